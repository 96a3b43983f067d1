//! Error classification and alert dispatch.
//!
//! `EmailAlerter` is the heart of the demo: given an application error, it
//! decides whether the error's kind is one the operator wants to hear about
//! and, if so, fires off an alert email without blocking the request that
//! raised the error.
//!
//! The send is best-effort telemetry. It runs as a detached task whose
//! outcome is observed only for logging; a failed or slow send logs late and
//! never affects request handling.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    error::{ErrorKind, ServiceError},
    mailer::{AlertEmail, Mailer},
};


/// Classifies application errors and emails the operator about matches.
///
/// Constructed once at startup with the set of alertable error kinds, the
/// mailer, and the recipient address. All three are immutable for the life
/// of the process; classification is a stateless per-call decision.
#[derive(Clone)]
pub struct EmailAlerter {
    alertable: HashSet<ErrorKind>,
    mailer: Arc<dyn Mailer>,
    recipient: Option<String>,
}

impl EmailAlerter {
    /// Creates an alerter for the given set of error kinds.
    ///
    /// # Arguments
    /// - `alertable` - Error kinds that should trigger an alert email
    /// - `mailer` - Outbound mail service used to deliver alerts
    /// - `recipient` - Operator address, if one was configured
    pub fn new(
        alertable: impl IntoIterator<Item = ErrorKind>,
        mailer: Arc<dyn Mailer>,
        recipient: Option<String>,
    ) -> Self {
        Self {
            alertable: alertable.into_iter().collect(),
            mailer,
            recipient,
        }
    }

    /// Dispatches an alert email if the error's kind is alertable.
    ///
    /// The classification and email construction run synchronously and never
    /// suspend; the actual send is spawned as a detached task. The task logs
    /// success (with the recipient list) or failure, and contains any send
    /// error at the task boundary - nothing about a failed alert ever reaches
    /// the request that raised the error.
    ///
    /// The returned handle lets tests await completion of the send; callers
    /// in the request path drop it, keeping the send fire-and-forget.
    ///
    /// # Arguments
    /// - `error` - The application error to classify
    ///
    /// # Returns
    /// - `Some(handle)` - An alert send was dispatched
    /// - `None` - The kind is not alertable, or no recipient is configured
    pub fn handle(&self, error: &ServiceError) -> Option<JoinHandle<()>> {
        if !self.alertable.contains(&error.kind()) {
            return None;
        }

        let Some(recipient) = self.recipient.clone() else {
            tracing::error!(
                "No alert recipient configured, dropping alert for {}",
                error.kind().name()
            );
            return None;
        };

        tracing::info!("Attempting to send error alert email to {}", recipient);

        let email = AlertEmail {
            subject: format!("SERVICE ALERT: {}", error.kind().name()),
            body: format!(
                "Something went wrong. Here's what we know: \n\n{}",
                error.message()
            ),
            recipients: vec![recipient],
        };

        let mailer = Arc::clone(&self.mailer);
        Some(tokio::spawn(async move {
            let recipients = email.recipients.join(", ");
            match mailer.send(email).await {
                Ok(()) => tracing::info!("Sent error alert email to {}", recipients),
                Err(e) => tracing::error!("Problem sending error alert email: {}", e),
            }
        }))
    }
}
