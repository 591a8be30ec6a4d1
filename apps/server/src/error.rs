use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use finboard_mailer::MailerError;
use finboard_market_data::MarketDataError;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors, rendered as `{"error": "..."}` with a status code.
///
/// The email variants carry the French user-facing messages from the
/// landing page; market data errors surface the upstream condition.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Market(#[from] MarketDataError),

    #[error("Prénom et email sont requis")]
    MissingLeadFields,

    #[error("Service email non configuré")]
    EmailNotConfigured,

    #[error("Erreur lors de l'envoi de l'email")]
    EmailSend(#[source] MailerError),

    #[error("Erreur interne du serveur")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Market(e) => match e {
                MarketDataError::SymbolNotFound(_) => StatusCode::NOT_FOUND,
                MarketDataError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                MarketDataError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                MarketDataError::ProviderError { .. } | MarketDataError::Network(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::MissingLeadFields => StatusCode::BAD_REQUEST,
            Self::EmailNotConfigured | Self::EmailSend(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::EmailSend(source) => tracing::error!("email send failed: {}", source),
            Self::Internal(source) => tracing::error!("internal error: {:#}", source),
            _ if status.is_server_error() => tracing::error!("{}", self),
            _ => {}
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_not_found_maps_to_404() {
        let error = ApiError::Market(MarketDataError::SymbolNotFound("NOPE".to_string()));
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rate_limited_maps_to_429() {
        let error = ApiError::Market(MarketDataError::RateLimited {
            provider: "FINNHUB".to_string(),
        });
        assert_eq!(error.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_email_errors_keep_french_messages() {
        assert_eq!(
            ApiError::MissingLeadFields.to_string(),
            "Prénom et email sont requis"
        );
        assert_eq!(ApiError::MissingLeadFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::EmailNotConfigured.to_string(),
            "Service email non configuré"
        );
        assert_eq!(
            ApiError::EmailNotConfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
