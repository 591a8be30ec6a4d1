use std::env;

/// Server configuration, read once from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address to bind, e.g. "127.0.0.1:8080"
    pub listen_addr: String,
    /// Finnhub API token for the market data service
    pub finnhub_api_key: String,
    /// Resend API key; the email endpoint answers 500 when absent
    pub resend_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("FINBOARD_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            finnhub_api_key: env::var("FINNHUB_API_KEY").unwrap_or_default(),
            resend_api_key: env::var("RESEND_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }
}
