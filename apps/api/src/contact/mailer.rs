//! Outbound mail capability.
//!
//! The contact handler only sees `dyn MailSender`; `AppState` carries it as
//! `Option<Arc<dyn MailSender>>` so an unconfigured deployment is explicit
//! and tests can substitute a stub.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mail provider rejected the message (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// A fully composed message ready for the provider.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}

/// Sends mail through an HTTP provider API that accepts a JSON message and a
/// bearer token. One attempt per message.
#[derive(Clone)]
pub struct HttpMailSender {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpMailSender {
    pub fn new(endpoint: String, api_key: String) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Builds a sender when both `MAIL_API_URL` and `MAIL_API_KEY` are set.
    pub fn from_config(config: &Config) -> Result<Option<Self>, MailError> {
        match (&config.mail_api_url, &config.mail_api_key) {
            (Some(url), Some(key)) => Self::new(url.clone(), key.clone()).map(Some),
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl MailSender for HttpMailSender {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(mail)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Mail provider accepted message (status {status})");
        Ok(())
    }
}
