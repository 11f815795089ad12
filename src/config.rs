/// Default upstream lookup endpoint, overridable via `CPF_API_URLS`.
const DEFAULT_LOOKUP_URL: &str = "https://api.zoomeyes.dad/api/cpf";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Upstream credential. `None` degrades every lookup to a per-request
    /// configuration error instead of refusing to boot.
    pub lookup_token: Option<String>,
    /// Ordered candidate endpoint URLs; the first one that yields a usable
    /// response wins.
    pub lookup_endpoints: Vec<String>,
    /// Directory of front-end assets served on the fallback route.
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            lookup_token: std::env::var("CPF_API_TOKEN")
                .or_else(|_| std::env::var("ZOOMEYES_TOKEN"))
                .ok()
                .filter(|s| !s.trim().is_empty()),
            lookup_endpoints: match std::env::var("CPF_API_URLS") {
                Ok(raw) => {
                    let urls: Vec<String> = raw
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_owned)
                        .collect();
                    if urls.is_empty() {
                        anyhow::bail!("CPF_API_URLS cannot be empty");
                    }
                    for url in &urls {
                        if !url.starts_with("http://") && !url.starts_with("https://") {
                            anyhow::bail!(
                                "CPF_API_URLS entries must start with http:// or https://"
                            );
                        }
                    }
                    urls
                }
                Err(_) => vec![DEFAULT_LOOKUP_URL.to_string()],
            },
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!(
            "Lookup endpoints configured: {}",
            config.lookup_endpoints.len()
        );
        tracing::info!("Lookup token present? {}", config.lookup_token.is_some());
        if config.lookup_token.is_none() {
            tracing::warn!(
                "CPF_API_TOKEN not set; /api/consultarCpf will answer with a configuration error"
            );
        }

        Ok(config)
    }
}
