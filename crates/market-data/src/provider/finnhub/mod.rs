//! Finnhub market data provider.
//!
//! This module fetches dashboard data from the Finnhub API:
//! - Quotes via /quote (also used for forex, indices and commodities)
//! - Company profiles via /stock/profile2
//! - OHLC candles via /stock/candle
//! - Company news via /company-news
//!
//! Finnhub free tier is limited to 60 API calls per minute.
//! API documentation: https://finnhub.io/docs/api

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{Candle, CandleResolution, CompanyProfile, NewsArticle, QuoteSnapshot, Sentiment};

const BASE_URL: &str = "https://finnhub.io/api/v1";
const PROVIDER_ID: &str = "FINNHUB";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /quote endpoint
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    /// Current price
    c: Option<f64>,
    /// Absolute change
    d: Option<f64>,
    /// Percent change
    dp: Option<f64>,
    /// High price of the day
    h: Option<f64>,
    /// Low price of the day
    l: Option<f64>,
    // Note: o (open), pc (previous close) and t (timestamp) exist but are not used
}

/// Response from /stock/profile2 endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    /// Company name
    name: Option<String>,
    /// Market capitalization (in millions)
    market_capitalization: Option<f64>,
    /// Shares outstanding
    share_outstanding: Option<f64>,
}

/// Response from /stock/candle endpoint
#[derive(Debug, Deserialize)]
struct CandleResponse {
    /// Status: "ok" or "no_data"
    s: String,
    /// Close prices
    #[serde(default)]
    c: Vec<f64>,
    /// High prices
    #[serde(default)]
    h: Vec<f64>,
    /// Low prices
    #[serde(default)]
    l: Vec<f64>,
    /// Open prices
    #[serde(default)]
    o: Vec<f64>,
    /// Volume
    #[serde(default)]
    v: Vec<f64>,
    /// Timestamps (Unix)
    #[serde(default)]
    t: Vec<i64>,
}

/// One item from /company-news
#[derive(Debug, Deserialize)]
struct NewsItem {
    id: Option<i64>,
    headline: Option<String>,
    summary: Option<String>,
    source: Option<String>,
    url: Option<String>,
    image: Option<String>,
    /// Unix timestamp in seconds
    datetime: Option<i64>,
    /// Continuous sentiment score, absent on the free tier
    sentiment: Option<f64>,
}

/// Error response from Finnhub
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

// ============================================================================
// FinnhubProvider
// ============================================================================

/// Finnhub market data provider.
///
/// Stateless beyond the shared HTTP client; every call is a single
/// best-effort round trip with no retry.
pub struct FinnhubProvider {
    client: Client,
    api_key: String,
}

impl FinnhubProvider {
    /// Create a new Finnhub provider with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Make a GET request to the Finnhub API.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let url = format!("{}{}", BASE_URL, endpoint);

        let mut request = self.client.get(&url);

        // Add API key as header (more secure than query param)
        request = request.header("X-Finnhub-Token", &self.api_key);

        for (key, value) in params {
            request = request.query(&[(key, value)]);
        }

        debug!("Finnhub request: {} with {} params", endpoint, params.len());

        let response = request.send().await.map_err(|e| {
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

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "Invalid or missing API key".to_string(),
            });
        }

        // Quota exhausted
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                if let Some(error_msg) = error_resp.error {
                    return Err(MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: error_msg,
                    });
                }
            }

            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }

    fn parse<T: serde::de::DeserializeOwned>(text: &str, what: &str) -> Result<T, MarketDataError> {
        serde_json::from_str(text).map_err(|e| MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse {} response: {}", what, e),
        })
    }

    /// Fetch the current quote snapshot for a symbol.
    ///
    /// Works for equities and for venue-prefixed forex/index/commodity
    /// symbols alike. Omitted fields default to zero; callers decide
    /// whether a zero close means "symbol not found".
    pub async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot, MarketDataError> {
        let params = [("symbol", symbol)];
        let text = self.fetch("/quote", &params).await?;
        let response: QuoteResponse = Self::parse(&text, "quote")?;

        Ok(normalize_quote(response))
    }

    /// Fetch the company profile for a symbol.
    ///
    /// Finnhub answers `{}` for unknown symbols; that maps to an empty
    /// profile rather than an error, because the quote endpoint is the
    /// authority on symbol existence.
    pub async fn profile(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError> {
        let params = [("symbol", symbol)];
        let text = self.fetch("/stock/profile2", &params).await?;
        let response: ProfileResponse = Self::parse(&text, "profile")?;

        Ok(normalize_profile(response))
    }

    /// Fetch OHLC candles for a symbol over `[from, to]`.
    ///
    /// Returns an empty vector when upstream signals `no_data` or the
    /// time array is missing. Candles come back one-to-one with the
    /// upstream time array, in the same order.
    pub async fn candles(
        &self,
        symbol: &str,
        resolution: CandleResolution,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let from_ts = from.timestamp().to_string();
        let to_ts = to.timestamp().to_string();

        let params = [
            ("symbol", symbol),
            ("resolution", resolution.as_str()),
            ("from", from_ts.as_str()),
            ("to", to_ts.as_str()),
        ];

        let text = self.fetch("/stock/candle", &params).await?;
        let response: CandleResponse = Self::parse(&text, "candle")?;

        let candles = normalize_candles(response)?;

        debug!(
            "Finnhub: fetched {} candles for {} ({} to {})",
            candles.len(),
            symbol,
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d")
        );

        Ok(candles)
    }

    /// Fetch company news for a symbol over `[from, to]` (dates only).
    pub async fn company_news(
        &self,
        symbol: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<NewsArticle>, MarketDataError> {
        let from_date = from.format("%Y-%m-%d").to_string();
        let to_date = to.format("%Y-%m-%d").to_string();

        let params = [
            ("symbol", symbol),
            ("from", from_date.as_str()),
            ("to", to_date.as_str()),
        ];

        let text = self.fetch("/company-news", &params).await?;
        let items: Vec<NewsItem> = Self::parse(&text, "company-news")?;

        let articles: Vec<NewsArticle> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| normalize_news_item(index, item))
            .collect();

        debug!("Finnhub: fetched {} news items for {}", articles.len(), symbol);

        Ok(articles)
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

fn normalize_quote(response: QuoteResponse) -> QuoteSnapshot {
    QuoteSnapshot {
        close: decimal_or_zero(response.c),
        change: decimal_or_zero(response.d),
        change_percent: decimal_or_zero(response.dp),
        high: decimal_or_zero(response.h),
        low: decimal_or_zero(response.l),
    }
}

fn normalize_profile(response: ProfileResponse) -> CompanyProfile {
    CompanyProfile {
        name: response.name,
        // Finnhub reports market cap in millions
        market_cap: response
            .market_capitalization
            .and_then(|mc| Decimal::try_from(mc * 1_000_000.0).ok()),
        shares_outstanding: response
            .share_outstanding
            .and_then(|v| Decimal::try_from(v).ok()),
    }
}

fn normalize_candles(response: CandleResponse) -> Result<Vec<Candle>, MarketDataError> {
    if response.s != "ok" || response.t.is_empty() {
        return Ok(Vec::new());
    }

    let len = response.t.len();
    if response.c.len() != len
        || response.o.len() != len
        || response.h.len() != len
        || response.l.len() != len
    {
        return Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: "Mismatched array lengths in candle response".to_string(),
        });
    }

    let mut candles = Vec::with_capacity(len);
    for i in 0..len {
        candles.push(Candle {
            time: response.t[i],
            open: decimal_or_zero(Some(response.o[i])),
            high: decimal_or_zero(Some(response.h[i])),
            low: decimal_or_zero(Some(response.l[i])),
            close: decimal_or_zero(Some(response.c[i])),
            volume: response.v.get(i).and_then(|&v| Decimal::try_from(v).ok()),
        });
    }

    Ok(candles)
}

fn normalize_news_item(index: usize, item: NewsItem) -> NewsArticle {
    let published_at = item
        .datetime
        .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
        .unwrap_or_else(Utc::now);

    NewsArticle {
        id: item
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| index.to_string()),
        title: item.headline.unwrap_or_else(|| "Sans titre".to_string()),
        summary: item
            .summary
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Aucun résumé disponible.".to_string()),
        source: item.source.unwrap_or_else(|| "Inconnu".to_string()),
        url: item.url.unwrap_or_else(|| "#".to_string()),
        image_url: item
            .image
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/400/300", index)),
        published_at,
        sentiment: Sentiment::from_score(item.sentiment.unwrap_or(0.0)),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_response_parsing() {
        let json = r#"{
            "c": 150.25,
            "d": 1.50,
            "dp": 1.01,
            "h": 152.00,
            "l": 148.50,
            "o": 149.00,
            "pc": 148.75,
            "t": 1704067200
        }"#;

        let response: QuoteResponse = serde_json::from_str(json).unwrap();
        let snapshot = normalize_quote(response);
        assert_eq!(snapshot.close, dec!(150.25));
        assert_eq!(snapshot.change, dec!(1.50));
        assert_eq!(snapshot.change_percent, dec!(1.01));
        assert_eq!(snapshot.high, dec!(152.00));
        assert_eq!(snapshot.low, dec!(148.50));
    }

    #[test]
    fn test_quote_missing_fields_default_to_zero() {
        let response: QuoteResponse = serde_json::from_str("{}").unwrap();
        let snapshot = normalize_quote(response);
        assert_eq!(snapshot.close, Decimal::ZERO);
        assert_eq!(snapshot.change, Decimal::ZERO);
        assert_eq!(snapshot.high, Decimal::ZERO);
    }

    #[test]
    fn test_profile_market_cap_scaled_from_millions() {
        let json = r#"{
            "name": "Apple Inc",
            "marketCapitalization": 2800000,
            "shareOutstanding": 15550
        }"#;

        let response: ProfileResponse = serde_json::from_str(json).unwrap();
        let profile = normalize_profile(response);
        assert_eq!(profile.name.as_deref(), Some("Apple Inc"));
        assert_eq!(profile.market_cap, Some(dec!(2800000000000)));
        assert_eq!(profile.shares_outstanding, Some(dec!(15550)));
    }

    #[test]
    fn test_empty_profile_normalizes_to_defaults() {
        let response: ProfileResponse = serde_json::from_str("{}").unwrap();
        let profile = normalize_profile(response);
        assert!(profile.name.is_none());
        assert!(profile.market_cap.is_none());
    }

    #[test]
    fn test_candles_preserve_upstream_order() {
        let json = r#"{
            "s": "ok",
            "c": [150.0, 151.0, 152.0],
            "h": [151.0, 152.0, 153.0],
            "l": [149.0, 150.0, 151.0],
            "o": [149.5, 150.5, 151.5],
            "v": [1000000, 1100000, 1200000],
            "t": [1704067200, 1704153600, 1704240000]
        }"#;

        let response: CandleResponse = serde_json::from_str(json).unwrap();
        let candles = normalize_candles(response).unwrap();
        assert_eq!(candles.len(), 3);
        assert_eq!(
            candles.iter().map(|c| c.time).collect::<Vec<_>>(),
            vec![1704067200, 1704153600, 1704240000]
        );
        assert_eq!(candles[0].open, dec!(149.5));
        assert_eq!(candles[2].close, dec!(152.0));
        assert_eq!(candles[1].volume, Some(dec!(1100000)));
    }

    #[test]
    fn test_candles_no_data_yields_empty() {
        let json = r#"{"s": "no_data"}"#;
        let response: CandleResponse = serde_json::from_str(json).unwrap();
        assert!(normalize_candles(response).unwrap().is_empty());
    }

    #[test]
    fn test_candles_missing_time_array_yields_empty() {
        let json = r#"{"s": "ok", "c": [1.0]}"#;
        let response: CandleResponse = serde_json::from_str(json).unwrap();
        assert!(normalize_candles(response).unwrap().is_empty());
    }

    #[test]
    fn test_candles_mismatched_arrays_error() {
        let json = r#"{
            "s": "ok",
            "c": [150.0],
            "h": [151.0, 152.0],
            "l": [149.0],
            "o": [149.5],
            "t": [1704067200]
        }"#;

        let response: CandleResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            normalize_candles(response),
            Err(MarketDataError::ProviderError { .. })
        ));
    }

    #[test]
    fn test_news_item_normalization() {
        let json = r#"[{
            "id": 7381844,
            "headline": "Apple beats estimates",
            "summary": "Quarterly results above expectations.",
            "source": "Reuters",
            "url": "https://example.com/article",
            "image": "https://example.com/image.png",
            "datetime": 1704067200,
            "sentiment": 0.5
        }]"#;

        let items: Vec<NewsItem> = serde_json::from_str(json).unwrap();
        let article = normalize_news_item(0, items.into_iter().next().unwrap());
        assert_eq!(article.id, "7381844");
        assert_eq!(article.title, "Apple beats estimates");
        assert_eq!(article.sentiment, Sentiment::Positive);
        assert_eq!(article.published_at.timestamp(), 1704067200);
    }

    #[test]
    fn test_news_item_placeholders() {
        let items: Vec<NewsItem> = serde_json::from_str(r#"[{}]"#).unwrap();
        let article = normalize_news_item(3, items.into_iter().next().unwrap());
        assert_eq!(article.id, "3");
        assert_eq!(article.title, "Sans titre");
        assert_eq!(article.summary, "Aucun résumé disponible.");
        assert_eq!(article.source, "Inconnu");
        assert_eq!(article.url, "#");
        assert_eq!(article.image_url, "https://picsum.photos/seed/3/400/300");
        // Absent score buckets as neutral
        assert_eq!(article.sentiment, Sentiment::Neutral);
    }
}
