//! Process initialization helpers.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// Respects `RUST_LOG` when set; defaults to info-level logging otherwise.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the shared HTTP client for external API requests.
///
/// Redirects are disabled; the client only ever talks to a fixed API
/// endpoint and should not follow anything else.
///
/// # Returns
/// - `Ok(Client)` - Configured HTTP client
/// - `Err(reqwest::Error)` - TLS backend or client initialization failed
pub fn setup_reqwest_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
}
