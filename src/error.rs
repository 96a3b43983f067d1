//! Application error types and HTTP response mapping.
//!
//! This module defines the demo's error domain: a closed set of named error
//! kinds, the `ServiceError` type that carries a kind plus a human-readable
//! message, and the `IntoResponse` implementation that turns any such error
//! into a generic 500 response. Full error details are logged server-side
//! only; clients always receive the same opaque body.
//!
//! The response conversion also stores a clone of the error in the response
//! extensions so that outer middleware (the email alert layer) can observe
//! which error terminated the request without changing what the client sees.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod test;

/// Named category of application failure.
///
/// Identity is the only thing that matters here: alert classification is a
/// set-membership check over these tags. The set is closed, so adding a new
/// failure category means adding a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Foo,
    Bar,
    Bizz,
}

impl ErrorKind {
    /// Every kind the demo routes can raise.
    pub const ALL: [ErrorKind; 3] = [ErrorKind::Foo, ErrorKind::Bar, ErrorKind::Bizz];

    /// Human-readable name used in logs and alert subjects.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Foo => "FooError",
            ErrorKind::Bar => "BarError",
            ErrorKind::Bizz => "BizzError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An application failure raised by a request handler.
///
/// Carries the failure category and a message describing what went wrong.
/// Clone is required so the response conversion can stash the error in the
/// response extensions for the alert middleware.
#[derive(Error, Debug, Clone)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    kind: ErrorKind,
    message: String,
}

impl ServiceError {
    /// Creates a new error of the given kind.
    ///
    /// # Arguments
    /// - `kind` - The failure category
    /// - `message` - Human-readable description of the failure
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The failure category, used for alert classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable failure description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// JSON body returned to clients for failed requests.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Terminal error handling for the request pipeline.
///
/// Logs the full error server-side and returns a 500 response with a generic
/// message, so internal error detail never leaks to clients. The original
/// error is inserted into the response extensions, where the email alert
/// middleware picks it up after the response has been produced.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Something went wrong".to_string(),
            }),
        )
            .into_response();

        response.extensions_mut().insert(self);
        response
    }
}
