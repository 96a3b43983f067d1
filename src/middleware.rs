//! Request pipeline middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::ServiceError, state::AppState};


/// Watches error responses and hands matching errors to the email alerter.
///
/// Runs the inner service first, then checks whether the response was
/// produced from a `ServiceError` (stashed in the response extensions by its
/// `IntoResponse` impl). Any error found is passed to the alerter for
/// classification; the response itself passes through unchanged either way,
/// so this layer can never swallow an error or alter what the client sees.
pub async fn error_alerts(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if let Some(error) = response.extensions().get::<ServiceError>() {
        // Fire-and-forget; the send task logs its own outcome.
        state.alerter.handle(error);
    }

    response
}
