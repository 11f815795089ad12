use crate::config::Config;
use crate::errors::AppError;
use serde_json::Value;

/// Outcome of a single candidate endpoint attempt.
#[derive(Debug)]
enum CandidateFailure {
    /// Request never completed (connect failure, closed socket, body read).
    Transport(String),
    /// Upstream answered with a non-success status.
    Status { status: u16, body: String },
    /// Upstream answered 2xx but the body was not valid JSON.
    Parse { raw: String },
}

/// Client for the upstream CPF lookup service.
///
/// Holds the ordered candidate endpoints and the shared credential.
/// Candidates are tried strictly in order, one attempt each; the first one
/// that yields a parseable JSON body wins.
#[derive(Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    endpoints: Vec<String>,
    token: Option<String>,
}

impl LookupClient {
    /// Creates a new `LookupClient` from the loaded configuration.
    ///
    /// No request timeout is set: a stalled upstream parks only the one
    /// request waiting on it.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints: config.lookup_endpoints.clone(),
            token: config.lookup_token.clone(),
        }
    }

    /// Query the upstream service for a validated 11-digit CPF.
    ///
    /// Refuses immediately, before any network traffic, when no token is
    /// configured. Per-candidate failures (transport, non-2xx, unparsable
    /// body) are recovered by advancing to the next candidate; only
    /// exhaustion of the whole list is surfaced. With a single configured
    /// endpoint, that candidate's specific failure is returned instead so
    /// callers get the upstream status and raw body for diagnostics.
    pub async fn lookup(&self, cpf: &str) -> Result<Value, AppError> {
        let token = self.token.as_deref().ok_or(AppError::TokenNotConfigured)?;

        let mut last_failure = None;
        for endpoint in &self.endpoints {
            match self.try_candidate(endpoint, cpf, token).await {
                Ok(data) => {
                    tracing::info!("Lookup succeeded via {}", endpoint);
                    return Ok(data);
                }
                Err(failure) => {
                    tracing::warn!("Candidate {} failed: {:?}", endpoint, failure);
                    last_failure = Some(failure);
                }
            }
        }

        let attempts = self.endpoints.len();
        match (attempts, last_failure) {
            (1, Some(CandidateFailure::Status { status, body })) => {
                Err(AppError::UpstreamStatus { status, body })
            }
            (1, Some(CandidateFailure::Parse { raw })) => Err(AppError::UpstreamParse { raw }),
            _ => Err(AppError::UpstreamExhausted { attempts }),
        }
    }

    /// One GET against one candidate endpoint.
    async fn try_candidate(
        &self,
        endpoint: &str,
        cpf: &str,
        token: &str,
    ) -> Result<Value, CandidateFailure> {
        // Build URL with proper parameter encoding to prevent injection
        let url = reqwest::Url::parse_with_params(endpoint, &[("cpf", cpf), ("token", token)])
            .map_err(|e| CandidateFailure::Transport(format!("invalid endpoint URL: {}", e)))?;

        // Redact token from logs to prevent credential exposure
        tracing::debug!("GET {}?cpf={}&token=[REDACTED]", endpoint, cpf);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CandidateFailure::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CandidateFailure::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(CandidateFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|_| CandidateFailure::Parse { raw: body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config {
            port: 3000,
            lookup_token: Some("token".to_string()),
            lookup_endpoints: vec!["https://example.com/api/cpf".to_string()],
            static_dir: "public".to_string(),
        };
        let client = LookupClient::new(&config);
        assert_eq!(client.endpoints.len(), 1);
    }
}
