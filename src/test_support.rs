//! Shared test doubles.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::mailer::{AlertEmail, Mailer, MailerError};

/// In-memory mailer that records every submission instead of sending it.
///
/// Clones share the same submission log, so a test can keep one handle and
/// hand another to the alerter under test.
#[derive(Clone, Default)]
pub struct FakeMailer {
    sent: Arc<Mutex<Vec<AlertEmail>>>,
    reject: bool,
}

impl FakeMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose submissions are recorded but always rejected.
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    /// Every submission received so far, in order.
    pub fn sent(&self) -> Vec<AlertEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, email: AlertEmail) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(email);

        if self.reject {
            return Err(MailerError::Rejected {
                status: StatusCode::UNAUTHORIZED,
                body: "Invalid credentials".to_string(),
            });
        }

        Ok(())
    }
}
