use std::sync::Arc;

use finboard_mailer::{EmailSender, ResendClient};
use finboard_market_data::MarketDataService;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub market_service: Arc<MarketDataService>,
    /// None when RESEND_API_KEY is not configured; the email endpoint
    /// answers 500 in that case.
    pub email_sender: Option<Arc<dyn EmailSender>>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FINBOARD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    if config.finnhub_api_key.is_empty() {
        tracing::warn!("FINNHUB_API_KEY is empty; market data requests will be rejected upstream");
    }

    let market_service = Arc::new(MarketDataService::new(config.finnhub_api_key.clone()));

    let email_sender: Option<Arc<dyn EmailSender>> = match &config.resend_api_key {
        Some(key) => Some(Arc::new(ResendClient::new(key.clone()))),
        None => {
            tracing::warn!("RESEND_API_KEY is not configured; email endpoint disabled");
            None
        }
    };

    Arc::new(AppState {
        market_service,
        email_sender,
    })
}
