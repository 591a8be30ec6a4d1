//! Market data provider implementations.
//!
//! Providers are thin HTTP clients that translate provider-specific
//! JSON into the normalized models. Per-view policy (filtering,
//! merging, fallback) lives in the [`service`](crate::service) module,
//! not in the providers.

pub mod coingecko;
pub mod finnhub;

pub use coingecko::CoinGeckoProvider;
pub use finnhub::FinnhubProvider;
