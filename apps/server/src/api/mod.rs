use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

mod email;
mod health;
mod market;

/// Build the full application router under `/api/v1`.
pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(market::router())
        .merge(email::router())
        .merge(health::router());

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The dashboard frontend is served from a separate origin
        .layer(CorsLayer::permissive())
}
