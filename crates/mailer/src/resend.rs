//! Resend transactional email client.
//!
//! API documentation: https://resend.com/docs/api-reference/emails/send-email

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::message::{checklist_html, checklist_subject};
use crate::{EmailSender, LeadMessage, MailerError, SendReceipt};

const API_URL: &str = "https://api.resend.com/emails";

/// Sender identity; the onboarding address works without a verified domain.
const DEFAULT_FROM: &str = "Inno-Mation <onboarding@resend.dev>";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    html: String,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Resend-backed [`EmailSender`].
pub struct ResendClient {
    client: Client,
    api_key: String,
    from: String,
}

impl ResendClient {
    /// Create a new client with the given API key and the default
    /// sender identity.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            from: DEFAULT_FROM.to_string(),
        }
    }

    /// Override the sender identity (e.g. a verified domain address).
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, lead: &LeadMessage) -> Result<SendReceipt, MailerError> {
        let body = SendRequest {
            from: &self.from,
            to: [lead.email.as_str()],
            subject: checklist_subject(&lead.prenom),
            html: checklist_html(&lead.prenom),
        };

        debug!("Sending checklist email to {}", lead.email);

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {} - {}", status, text));

            return Err(MailerError::Provider { message });
        }

        let receipt: SendResponse =
            response
                .json()
                .await
                .map_err(|e| MailerError::Provider {
                    message: format!("Failed to parse send response: {}", e),
                })?;

        debug!("Resend accepted email {}", receipt.id);

        Ok(SendReceipt { id: receipt.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_shape() {
        let body = SendRequest {
            from: DEFAULT_FROM,
            to: ["lead@example.com"],
            subject: checklist_subject("Claire"),
            html: checklist_html("Claire"),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["from"], DEFAULT_FROM);
        assert_eq!(json["to"][0], "lead@example.com");
        assert!(json["subject"].as_str().unwrap().contains("Claire"));
        assert!(json["html"].as_str().unwrap().contains("checklist"));
    }

    #[test]
    fn test_error_response_parsing() {
        let json = r#"{"statusCode": 422, "message": "Invalid `to` field", "name": "validation_error"}"#;
        let parsed: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("Invalid `to` field"));
    }
}
