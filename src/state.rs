//! Application state shared across request handlers.

use crate::alert::EmailAlerter;

/// Shared state, initialized once at startup and cloned per request.
///
/// `EmailAlerter` is cheap to clone: its mailer is reference-counted and its
/// alertable set is small and immutable.
#[derive(Clone)]
pub struct AppState {
    /// Email alerter invoked by the error alert middleware.
    pub alerter: EmailAlerter,
}

impl AppState {
    /// Creates the application state.
    pub fn new(alerter: EmailAlerter) -> Self {
        Self { alerter }
    }
}
