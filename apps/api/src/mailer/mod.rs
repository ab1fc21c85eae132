//! Mailer: the single point of entry for outbound email.
//!
//! Handlers only ever see `Arc<dyn Mailer>`; `ResendMailer` is the production
//! backend, tests substitute their own implementations.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("RESEND_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unreadable provider response: {0}")]
    Decode(String),
}

/// A fully composed message ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
}

/// Provider acknowledgement for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub id: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, MailError>;
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendError {
    message: String,
}

/// Resend transactional email API client.
#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl ResendMailer {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MailError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, MailError> {
        let api_key = self.api_key.as_deref().ok_or(MailError::MissingApiKey)?;

        let body = ResendRequest {
            from: &email.from,
            to: [&email.to],
            reply_to: email.reply_to.as_deref(),
            subject: &email.subject,
            text: &email.text,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            // Resend reports failures as {"statusCode", "name", "message"}
            let message = serde_json::from_str::<ResendError>(&raw)
                .map(|e| e.message)
                .unwrap_or(raw);
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ResendResponse =
            serde_json::from_str(&raw).map_err(|e| MailError::Decode(e.to_string()))?;

        debug!(email_id = %parsed.id, "Resend accepted message");
        Ok(SentEmail { id: parsed.id })
    }
}
