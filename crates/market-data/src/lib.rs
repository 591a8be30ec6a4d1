//! Finboard Market Data Crate
//!
//! Provider-agnostic market data fetching for the Finboard dashboard.
//!
//! # Overview
//!
//! The crate normalizes heterogeneous third-party JSON payloads into a
//! small family of display shapes:
//!
//! - Stocks: merged quote + company profile from Finnhub
//! - Crypto: one batched CoinGecko markets call for a fixed coin list
//! - Forex / indices / commodities: parallel Finnhub quote fan-out over
//!   fixed instrument catalogs, with synthetic placeholders on total
//!   failure
//! - Candles and company news for the chart and news feed views
//!
//! There is no caching, no retry and no cross-request state; every
//! operation is an independent best-effort round trip.
//!
//! # Core Types
//!
//! - [`MarketDataService`] - facade implementing the fetch policies
//! - [`Asset`], [`ForexRate`], [`IndexData`], [`CommodityData`] - normalized records
//! - [`Candle`], [`CandleResolution`] - chart data
//! - [`NewsArticle`], [`Sentiment`] - news feed data
//! - [`MarketDataError`] - error type for all operations

pub mod errors;
pub mod fallback;
pub mod instruments;
pub mod models;
pub mod provider;
pub mod service;

pub use errors::MarketDataError;
pub use models::{
    Asset, AssetClass, Candle, CandleResolution, CommodityData, CompanyProfile, ForexRate,
    IndexData, NewsArticle, QuoteSnapshot, Sentiment,
};
pub use provider::{CoinGeckoProvider, FinnhubProvider};
pub use service::{MarketDataService, DEFAULT_NEWS_COUNT};
