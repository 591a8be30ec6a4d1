//! Finboard Mailer Crate
//!
//! Transactional email for the lead-capture landing page: a captured
//! lead (`prenom` + `email`) receives the French "Gagnez 5h/semaine"
//! checklist email through the Resend API.
//!
//! The [`EmailSender`] trait is the seam between the HTTP endpoint and
//! the provider, so the endpoint can be tested with a stub sender.

mod message;
mod resend;

pub use message::{checklist_html, checklist_subject};
pub use resend::ResendClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while sending an email.
#[derive(Error, Debug)]
pub enum MailerError {
    /// The provider rejected the request.
    #[error("Email provider error: {message}")]
    Provider {
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while reaching the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// A captured lead from the landing-page form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeadMessage {
    /// First name, used in the subject and greeting
    pub prenom: String,
    /// Recipient address
    pub email: String,
}

/// Provider acknowledgement for a sent email.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendReceipt {
    /// Provider-assigned message id
    pub id: String,
}

/// Sends the checklist email to a captured lead.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, lead: &LeadMessage) -> Result<SendReceipt, MailerError>;
}
