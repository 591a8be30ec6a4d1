use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use finboard_mailer::LeadMessage;
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(serde::Deserialize)]
struct SendEmailRequest {
    prenom: Option<String>,
    email: Option<String>,
}

/// Send the checklist email to a captured lead.
///
/// Mirrors the landing-page contract: configuration is checked before
/// validation, blank fields count as missing, and every failure maps
/// to a French error string.
async fn send_email(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SendEmailRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let sender = state
        .email_sender
        .as_ref()
        .ok_or(ApiError::EmailNotConfigured)?;

    let prenom = body
        .prenom
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let email = body
        .email
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (Some(prenom), Some(email)) = (prenom, email) else {
        return Err(ApiError::MissingLeadFields);
    };

    let lead = LeadMessage {
        prenom: prenom.to_string(),
        email: email.to_string(),
    };

    let receipt = sender.send(&lead).await.map_err(ApiError::EmailSend)?;

    Ok(Json(json!({ "success": true, "data": receipt })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/email/send", post(send_email))
}
