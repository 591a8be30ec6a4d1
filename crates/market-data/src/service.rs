//! Market data service - facade over the provider clients.
//!
//! Implements the per-view fetch policies: stock quotes fail loudly,
//! crypto/news/candles degrade to empty, forex/indices/commodities
//! fall back to synthetic placeholder data when every quote in the
//! fan-out fails.

use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::fallback;
use crate::instruments::{
    CommodityInstrument, ForexPair, IndexInstrument, COINGECKO_COIN_IDS, COMMODITIES,
    MAJOR_FOREX_PAIRS, MAJOR_INDICES,
};
use crate::models::{
    Asset, AssetClass, Candle, CandleResolution, CommodityData, CompanyProfile, ForexRate,
    IndexData, NewsArticle, QuoteSnapshot,
};
use crate::provider::{CoinGeckoProvider, FinnhubProvider};

/// Default number of articles returned by [`MarketDataService::news`].
pub const DEFAULT_NEWS_COUNT: usize = 5;

/// Default candle window when no `from` is given.
const DEFAULT_CANDLE_WINDOW_DAYS: i64 = 30;

/// News lookback window.
const NEWS_WINDOW_DAYS: i64 = 7;

/// Unified access to the market data providers.
///
/// Stateless across requests; each call is an independent best-effort
/// round trip with no retry and no caching.
pub struct MarketDataService {
    finnhub: FinnhubProvider,
    coingecko: CoinGeckoProvider,
}

impl MarketDataService {
    /// Create a new service backed by Finnhub (keyed) and CoinGecko (public).
    pub fn new(finnhub_api_key: String) -> Self {
        Self {
            finnhub: FinnhubProvider::new(finnhub_api_key),
            coingecko: CoinGeckoProvider::new(),
        }
    }

    /// Fetch a merged stock quote: /quote and /stock/profile2 are
    /// requested concurrently, then combined into one [`Asset`].
    ///
    /// Fails with [`MarketDataError::SymbolNotFound`] when the upstream
    /// close price is zero (Finnhub answers zeros instead of an error
    /// for unknown symbols). Other failures propagate to the caller.
    pub async fn stock_quote(&self, symbol: &str) -> Result<Asset, MarketDataError> {
        let (quote, profile) =
            tokio::try_join!(self.finnhub.quote(symbol), self.finnhub.profile(symbol))?;

        merge_stock_quote(symbol, quote, profile)
    }

    /// Fetch the fixed coin list from CoinGecko in one batched call.
    ///
    /// Degrades to an empty list on any failure.
    pub async fn crypto_assets(&self) -> Vec<Asset> {
        match self.coingecko.markets(COINGECKO_COIN_IDS).await {
            Ok(assets) => assets
                .into_iter()
                .filter(|a| a.price > Decimal::ZERO)
                .collect(),
            Err(e) => {
                warn!("crypto markets fetch failed, serving empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch the major forex pairs, one quote per pair in parallel.
    ///
    /// Pairs whose quote fails or comes back non-positive are dropped;
    /// when nothing survives, synthetic placeholder rates are served.
    pub async fn forex_rates(&self) -> Vec<ForexRate> {
        let fetches = MAJOR_FOREX_PAIRS.iter().map(|pair| async move {
            let symbol = pair.finnhub_symbol();
            self.finnhub
                .quote(&symbol)
                .await
                .map(|snapshot| forex_rate(pair, snapshot))
        });

        let rates = collect_positive(join_all(fetches).await, |r: &ForexRate| r.rate);
        if rates.is_empty() {
            warn!("all forex quotes failed or were non-positive, serving synthetic rates");
            return fallback::forex_rates();
        }
        rates
    }

    /// Fetch the major indices, one quote per index in parallel.
    pub async fn indices(&self) -> Vec<IndexData> {
        let fetches = MAJOR_INDICES.iter().map(|index| async move {
            self.finnhub
                .quote(index.finnhub)
                .await
                .map(|snapshot| index_data(index, snapshot))
        });

        let indices = collect_positive(join_all(fetches).await, |i: &IndexData| i.value);
        if indices.is_empty() {
            warn!("all index quotes failed or were non-positive, serving synthetic values");
            return fallback::indices();
        }
        indices
    }

    /// Fetch the commodity catalog, one quote per instrument in parallel.
    pub async fn commodities(&self) -> Vec<CommodityData> {
        let fetches = COMMODITIES.iter().map(|commodity| async move {
            self.finnhub
                .quote(commodity.finnhub)
                .await
                .map(|snapshot| commodity_data(commodity, snapshot))
        });

        let commodities = collect_positive(join_all(fetches).await, |c: &CommodityData| c.price);
        if commodities.is_empty() {
            warn!("all commodity quotes failed or were non-positive, serving synthetic prices");
            return fallback::commodities();
        }
        commodities
    }

    /// Fetch OHLC candles for a chart.
    ///
    /// `to` defaults to now and `from` to the trailing 30 days.
    /// Degrades to an empty list when upstream has no data or fails.
    pub async fn candles(
        &self,
        symbol: &str,
        resolution: CandleResolution,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Vec<Candle> {
        let to = to.unwrap_or_else(Utc::now);
        let from = from.unwrap_or(to - Duration::days(DEFAULT_CANDLE_WINDOW_DAYS));

        match self.finnhub.candles(symbol, resolution, from, to).await {
            Ok(candles) => candles,
            Err(e) => {
                warn!("candle fetch for {} failed, serving empty list: {}", symbol, e);
                Vec::new()
            }
        }
    }

    /// Fetch company news over the trailing 7 days, truncated to `count`.
    ///
    /// Degrades to an empty list on any failure.
    pub async fn news(&self, symbol: &str, count: usize) -> Vec<NewsArticle> {
        let to = Utc::now();
        let from = to - Duration::days(NEWS_WINDOW_DAYS);

        match self.finnhub.company_news(symbol, from, to).await {
            Ok(mut articles) => {
                articles.truncate(count);
                articles
            }
            Err(e) => {
                warn!("news fetch for {} failed, serving empty list: {}", symbol, e);
                Vec::new()
            }
        }
    }
}

// ============================================================================
// Normalization policy helpers
// ============================================================================

/// Keep successful entries whose key field is strictly positive.
fn collect_positive<T>(
    results: Vec<Result<T, MarketDataError>>,
    key: impl Fn(&T) -> Decimal,
) -> Vec<T> {
    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(item) if key(&item) > Decimal::ZERO => Some(item),
            Ok(_) => None,
            Err(e) => {
                debug!("dropping list entry: {}", e);
                None
            }
        })
        .collect()
}

fn merge_stock_quote(
    symbol: &str,
    quote: QuoteSnapshot,
    profile: CompanyProfile,
) -> Result<Asset, MarketDataError> {
    if quote.close <= Decimal::ZERO {
        return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
    }

    Ok(Asset {
        symbol: symbol.to_uppercase(),
        name: profile
            .name
            .unwrap_or_else(|| format!("{} Corp.", symbol.to_uppercase())),
        price: quote.close,
        change: quote.change,
        change_percent: quote.change_percent,
        high: quote.high,
        low: quote.low,
        volume: profile.shares_outstanding.unwrap_or_default(),
        market_cap: profile.market_cap,
        asset_class: AssetClass::Stocks,
    })
}

fn forex_rate(pair: &ForexPair, snapshot: QuoteSnapshot) -> ForexRate {
    ForexRate {
        pair: pair.pair.to_string(),
        name: pair.name.to_string(),
        rate: snapshot.close,
        change: snapshot.change,
        change_percent: snapshot.change_percent,
        asset_class: AssetClass::Forex,
    }
}

fn index_data(index: &IndexInstrument, snapshot: QuoteSnapshot) -> IndexData {
    IndexData {
        symbol: index.symbol.to_string(),
        name: index.name.to_string(),
        value: snapshot.close,
        change: snapshot.change,
        change_percent: snapshot.change_percent,
        asset_class: AssetClass::Indices,
    }
}

fn commodity_data(commodity: &CommodityInstrument, snapshot: QuoteSnapshot) -> CommodityData {
    CommodityData {
        symbol: commodity.symbol.to_string(),
        name: commodity.name.to_string(),
        price: snapshot.close,
        change: snapshot.change,
        change_percent: snapshot.change_percent,
        unit: commodity.unit.to_string(),
        asset_class: AssetClass::Commodities,
    }
}

// ============================================================================
// Tests
// ============================================================================
