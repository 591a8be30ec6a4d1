use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use finboard_mailer::{EmailSender, LeadMessage, MailerError, SendReceipt};
use finboard_market_data::MarketDataService;
use finboard_server::{api::app_router, AppState};
use tower::ServiceExt;

struct StubSender {
    fail: bool,
}

#[async_trait]
impl EmailSender for StubSender {
    async fn send(&self, lead: &LeadMessage) -> Result<SendReceipt, MailerError> {
        if self.fail {
            return Err(MailerError::Provider {
                message: "stub rejection".to_string(),
            });
        }
        Ok(SendReceipt {
            id: format!("stub-{}", lead.prenom.to_lowercase()),
        })
    }
}

fn test_router(email_sender: Option<Arc<dyn EmailSender>>) -> axum::Router {
    let state = Arc::new(AppState {
        market_service: Arc::new(MarketDataService::new(String::new())),
        email_sender,
    });
    app_router(state)
}

async fn post_email(app: axum::Router, body: serde_json::Value) -> (u16, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/email/send")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn missing_prenom_is_rejected() {
    let app = test_router(Some(Arc::new(StubSender { fail: false })));
    let (status, json) = post_email(app, serde_json::json!({ "email": "lead@example.com" })).await;
    assert_eq!(status, 400);
    assert_eq!(json["error"], "Prénom et email sont requis");
}

#[tokio::test]
async fn blank_email_counts_as_missing() {
    let app = test_router(Some(Arc::new(StubSender { fail: false })));
    let (status, json) =
        post_email(app, serde_json::json!({ "prenom": "Claire", "email": "   " })).await;
    assert_eq!(status, 400);
    assert_eq!(json["error"], "Prénom et email sont requis");
}

#[tokio::test]
async fn unconfigured_sender_is_a_server_error() {
    let app = test_router(None);
    let (status, json) = post_email(
        app,
        serde_json::json!({ "prenom": "Claire", "email": "lead@example.com" }),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(json["error"], "Service email non configuré");
}

#[tokio::test]
async fn configuration_is_checked_before_validation() {
    // Matches the landing page: a missing provider key answers 500
    // even when the body is also invalid.
    let app = test_router(None);
    let (status, json) = post_email(app, serde_json::json!({})).await;
    assert_eq!(status, 500);
    assert_eq!(json["error"], "Service email non configuré");
}

#[tokio::test]
async fn provider_failure_is_a_server_error() {
    let app = test_router(Some(Arc::new(StubSender { fail: true })));
    let (status, json) = post_email(
        app,
        serde_json::json!({ "prenom": "Claire", "email": "lead@example.com" }),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(json["error"], "Erreur lors de l'envoi de l'email");
}

#[tokio::test]
async fn successful_send_returns_receipt() {
    let app = test_router(Some(Arc::new(StubSender { fail: false })));
    let (status, json) = post_email(
        app,
        serde_json::json!({ "prenom": "Claire", "email": "lead@example.com" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"], "stub-claire");
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let app = test_router(None);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
}
