//! Normalized market data models
//!
//! This module contains the display shapes consumed by dashboard views:
//! - `asset` - Asset classes and per-instrument records (Asset, ForexRate, IndexData, CommodityData)
//! - `candle` - OHLC chart points (Candle) and supported resolutions (CandleResolution)
//! - `news` - News articles and sentiment bucketing (NewsArticle, Sentiment)
//! - `quote` - Raw provider snapshots before policy is applied (QuoteSnapshot, CompanyProfile)

mod asset;
mod candle;
mod news;
mod quote;

pub use asset::{Asset, AssetClass, CommodityData, ForexRate, IndexData};
pub use candle::{Candle, CandleResolution};
pub use news::{NewsArticle, Sentiment};
pub use quote::{CompanyProfile, QuoteSnapshot};
