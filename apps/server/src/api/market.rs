use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, TimeZone, Utc};
use finboard_market_data::{
    Asset, Candle, CandleResolution, CommodityData, ForexRate, IndexData, NewsArticle,
    DEFAULT_NEWS_COUNT,
};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_stock_quote(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Asset>> {
    let asset = state.market_service.stock_quote(&symbol).await?;
    Ok(Json(asset))
}

async fn get_crypto(State(state): State<Arc<AppState>>) -> Json<Vec<Asset>> {
    Json(state.market_service.crypto_assets().await)
}

async fn get_forex(State(state): State<Arc<AppState>>) -> Json<Vec<ForexRate>> {
    Json(state.market_service.forex_rates().await)
}

async fn get_indices(State(state): State<Arc<AppState>>) -> Json<Vec<IndexData>> {
    Json(state.market_service.indices().await)
}

async fn get_commodities(State(state): State<Arc<AppState>>) -> Json<Vec<CommodityData>> {
    Json(state.market_service.commodities().await)
}

#[derive(serde::Deserialize)]
struct CandleQuery {
    resolution: Option<CandleResolution>,
    /// Unix seconds, defaults to `to` minus 30 days
    from: Option<i64>,
    /// Unix seconds, defaults to now
    to: Option<i64>,
}

fn timestamp(seconds: Option<i64>) -> Option<DateTime<Utc>> {
    seconds.and_then(|s| Utc.timestamp_opt(s, 0).single())
}

async fn get_candles(
    Path(symbol): Path<String>,
    Query(query): Query<CandleQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<Candle>> {
    let candles = state
        .market_service
        .candles(
            &symbol,
            query.resolution.unwrap_or_default(),
            timestamp(query.from),
            timestamp(query.to),
        )
        .await;
    Json(candles)
}

#[derive(serde::Deserialize)]
struct NewsQuery {
    count: Option<usize>,
}

async fn get_news(
    Path(symbol): Path<String>,
    Query(query): Query<NewsQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<NewsArticle>> {
    let count = query.count.unwrap_or(DEFAULT_NEWS_COUNT);
    Json(state.market_service.news(&symbol, count).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/market/stocks/{symbol}", get(get_stock_quote))
        .route("/market/stocks/{symbol}/candles", get(get_candles))
        .route("/market/stocks/{symbol}/news", get(get_news))
        .route("/market/crypto", get(get_crypto))
        .route("/market/forex", get(get_forex))
        .route("/market/indices", get(get_indices))
        .route("/market/commodities", get(get_commodities))
}
