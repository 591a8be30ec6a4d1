//! CoinGecko market data provider.
//!
//! Fetches crypto prices from the public CoinGecko aggregator via a
//! single batched /coins/markets call. No API key is required; the
//! public tier is rate limited by IP.
//!
//! API documentation: https://docs.coingecko.com/reference/coins-markets

use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{Asset, AssetClass};

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// API Response Structures
// ============================================================================

/// One coin from /coins/markets
#[derive(Debug, Deserialize)]
struct MarketCoin {
    symbol: String,
    name: String,
    current_price: Option<f64>,
    price_change_24h: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    high_24h: Option<f64>,
    low_24h: Option<f64>,
    total_volume: Option<f64>,
    market_cap: Option<f64>,
}

// ============================================================================
// CoinGeckoProvider
// ============================================================================

/// CoinGecko market data provider for crypto assets.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    /// Create a new CoinGecko provider.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch current market data for the given coin ids, normalized to
    /// crypto [`Asset`] records in the upstream (market-cap) order.
    pub async fn markets(&self, ids: &[&str]) -> Result<Vec<Asset>, MarketDataError> {
        let url = format!("{}/coins/markets", BASE_URL);
        let ids_param = ids.join(",");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", "usd"),
                ("ids", ids_param.as_str()),
                ("order", "market_cap_desc"),
                ("sparkline", "false"),
                ("price_change_percentage", "24h"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        let coins: Vec<MarketCoin> = response.json().await?;

        debug!("CoinGecko: fetched {} coins", coins.len());

        Ok(coins.into_iter().map(normalize_coin).collect())
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Normalization
// ============================================================================

fn decimal_or_zero(value: Option<f64>) -> Decimal {
    value
        .and_then(|v| Decimal::try_from(v).ok())
        .unwrap_or_default()
}

fn normalize_coin(coin: MarketCoin) -> Asset {
    Asset {
        symbol: coin.symbol.to_uppercase(),
        name: coin.name,
        price: decimal_or_zero(coin.current_price),
        change: decimal_or_zero(coin.price_change_24h),
        change_percent: decimal_or_zero(coin.price_change_percentage_24h),
        high: decimal_or_zero(coin.high_24h),
        low: decimal_or_zero(coin.low_24h),
        volume: decimal_or_zero(coin.total_volume),
        market_cap: coin.market_cap.and_then(|v| Decimal::try_from(v).ok()),
        asset_class: AssetClass::Crypto,
    }
}

// ============================================================================
// Tests
// ============================================================================
