use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Request body carried no CPF value.
    MissingCpf,
    /// CPF input did not reduce to exactly 11 digits.
    InvalidCpf {
        /// Digit count after stripping, kept for diagnostics.
        digits: usize,
    },
    /// Lookup token absent from server configuration.
    TokenNotConfigured,
    /// Upstream answered with a non-success status.
    UpstreamStatus { status: u16, body: String },
    /// Upstream answered successfully but the body was not valid JSON.
    UpstreamParse { raw: String },
    /// Every configured candidate endpoint failed.
    UpstreamExhausted { attempts: usize },
    /// Internal server error.
    Internal(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingCpf => write!(f, "missing CPF in request body"),
            AppError::InvalidCpf { digits } => write!(
                f,
                "invalid CPF: {} digit(s) after stripping, expected 11",
                digits
            ),
            AppError::TokenNotConfigured => write!(f, "lookup token not configured"),
            AppError::UpstreamStatus { status, .. } => {
                write!(f, "upstream returned status {}", status)
            }
            AppError::UpstreamParse { .. } => write!(f, "upstream body is not valid JSON"),
            AppError::UpstreamExhausted { attempts } => {
                write!(f, "all {} upstream endpoint(s) failed", attempts)
            }
            AppError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Validation errors map to 400, configuration errors to 500, upstream
    /// failures to 502. Upstream diagnostics (status code, raw body) ride
    /// along in the JSON payload of the terminal failure; the credential
    /// never appears in any response or log line.
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingCpf => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "CPF não informado." }),
            ),
            AppError::InvalidCpf { .. } => {
                tracing::debug!("{}", self);
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "CPF inválido." }),
                )
            }
            AppError::TokenNotConfigured => {
                tracing::error!("Lookup rejected: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Token não configurado no servidor (.env)." }),
                )
            }
            AppError::UpstreamStatus { status, body } => {
                tracing::error!("Upstream returned {}: {}", status, body);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": "Falha na resposta da API de consulta",
                        "status": status,
                        "body": body,
                    }),
                )
            }
            AppError::UpstreamParse { raw } => {
                tracing::error!("Upstream body is not valid JSON: {}", raw);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "Erro ao converter resposta da API", "raw": raw }),
                )
            }
            AppError::UpstreamExhausted { .. } => {
                tracing::error!("{}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "Serviço de consulta indisponível." }),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Erro interno do servidor." }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
