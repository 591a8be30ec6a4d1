//! Error types for market data operations.

use thiserror::Error;

/// Errors that can occur while fetching or normalizing market data.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider, or the
    /// provider returned an all-zero quote for it.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429 or quota exhausted).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (unexpected status, malformed
    /// payload, inconsistent arrays).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::RateLimited {
            provider: "FINNHUB".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: FINNHUB");

        let error = MarketDataError::ProviderError {
            provider: "COINGECKO".to_string(),
            message: "unexpected payload".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: COINGECKO - unexpected payload"
        );
    }
}
