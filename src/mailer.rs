//! Outbound alert email delivery via the Mailjet HTTP API.
//!
//! This module owns the second error domain of the application: failures in
//! the notification pipeline itself. Those failures are represented by
//! `MailerError` and are fully independent of the application errors being
//! alerted on - callers log them and move on, they are never retried and
//! never reach an HTTP client.
//!
//! The `Mailer` trait is the seam between alert classification and the real
//! HTTP client, so tests can substitute an in-memory mailer and count
//! submissions.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;


/// Mailjet v3 send endpoint.
const MAILJET_SEND_URL: &str = "https://api.mailjet.com/v3/send";

/// A single alert email to be submitted to the mail service.
///
/// Ephemeral value object: constructed per triggering error, submitted once,
/// then discarded. Carries no identity or lifecycle beyond that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEmail {
    pub subject: String,
    pub body: String,
    pub recipients: Vec<String>,
}

/// Errors from the notification pipeline.
#[derive(Error, Debug)]
pub enum MailerError {
    /// A required configuration value was never provided.
    ///
    /// Carries the name of the missing environment variable. Startup already
    /// logged the gap; this surfaces it again at send time so the failed
    /// alert is attributable.
    #[error("Missing required environment variable: {0}")]
    MissingConfig(&'static str),

    /// HTTP transport error talking to the mail API.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The mail API rejected the submission.
    #[error("Mail API rejected the submission with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Submits alert emails to an outbound mail service.
///
/// Implementations only report whether the submission was accepted; delivery
/// status beyond that is not tracked.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: AlertEmail) -> Result<(), MailerError>;
}

/// Mailjet send request payload.
///
/// Field names follow Mailjet's v3 send API casing.
#[derive(Serialize)]
struct SendRequest<'a> {
    #[serde(rename = "FromName")]
    from_name: &'a str,
    #[serde(rename = "FromEmail")]
    from_email: &'a str,
    #[serde(rename = "Subject")]
    subject: &'a str,
    #[serde(rename = "Text-part")]
    text_part: &'a str,
    #[serde(rename = "Recipients")]
    recipients: Vec<Recipient<'a>>,
}

/// Single recipient record in a Mailjet send request.
#[derive(Serialize)]
struct Recipient<'a> {
    #[serde(rename = "Email")]
    email: &'a str,
}

/// Mailjet-backed mailer.
///
/// Holds the credentials and sender identity captured from configuration at
/// startup. Missing values are tolerated at construction time and reported
/// per-send, matching the soft validation in `Config::from_env`.
pub struct MailjetMailer {
    client: reqwest::Client,
    send_url: String,
    key: Option<String>,
    secret: Option<String>,
    from_name: Option<String>,
    from_email: Option<String>,
}

impl MailjetMailer {
    /// Creates a mailer from the loaded configuration.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client for API requests
    /// - `config` - Application configuration holding credentials and sender
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            send_url: MAILJET_SEND_URL.to_string(),
            key: config.mailjet_key.clone(),
            secret: config.mailjet_secret.clone(),
            from_name: config.alert_from_name.clone(),
            from_email: config.alert_from_email.clone(),
        }
    }
}

#[async_trait]
impl Mailer for MailjetMailer {
    /// Submits the email to Mailjet's send endpoint.
    ///
    /// Authenticates with basic auth (API key as username, secret as
    /// password) and posts the JSON payload Mailjet expects. Only the
    /// accepted/rejected outcome of the submission is inspected.
    ///
    /// # Returns
    /// - `Ok(())` - Mailjet accepted the submission
    /// - `Err(MailerError::MissingConfig)` - A credential or sender value was
    ///   never configured
    /// - `Err(MailerError::Request)` - Transport-level failure
    /// - `Err(MailerError::Rejected)` - Mailjet returned a non-success status
    async fn send(&self, email: AlertEmail) -> Result<(), MailerError> {
        let key = self
            .key
            .as_deref()
            .ok_or(MailerError::MissingConfig("MAILJET_KEY"))?;
        let secret = self
            .secret
            .as_deref()
            .ok_or(MailerError::MissingConfig("MAILJET_SECRET"))?;
        let from_name = self
            .from_name
            .as_deref()
            .ok_or(MailerError::MissingConfig("ALERT_FROM_NAME"))?;
        let from_email = self
            .from_email
            .as_deref()
            .ok_or(MailerError::MissingConfig("ALERT_FROM_EMAIL"))?;

        let payload = SendRequest {
            from_name,
            from_email,
            subject: &email.subject,
            text_part: &email.body,
            recipients: email
                .recipients
                .iter()
                .map(|address| Recipient {
                    email: address.as_str(),
                })
                .collect(),
        };

        let response = self
            .client
            .post(&self.send_url)
            .basic_auth(key, Some(secret))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected { status, body });
        }

        Ok(())
    }
}
