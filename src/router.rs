//! Axum route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{controller::russian_roulette, middleware::error_alerts, state::AppState};

/// Builds the application router.
///
/// Every GET path hits the roulette handler. The error alert layer sits
/// directly around the routes so it sees each error response; the trace
/// layer wraps everything for per-request logging.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(russian_roulette))
        .route("/{*path}", get(russian_roulette))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            error_alerts,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
