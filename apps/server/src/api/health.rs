use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::main_lib::AppState;

async fn get_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}
