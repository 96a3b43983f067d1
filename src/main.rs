mod alert;
mod config;
mod controller;
mod error;
mod mailer;
mod middleware;
mod router;
mod startup;
mod state;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use crate::{
    alert::EmailAlerter, config::Config, error::ErrorKind, mailer::MailjetMailer, state::AppState,
};

/// Error kinds that trigger an alert email when raised.
///
/// `Bizz` is deliberately left out so the demo exercises both alerting and
/// non-alerting errors.
const ALERTABLE_KINDS: [ErrorKind; 2] = [ErrorKind::Foo, ErrorKind::Bar];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    // Missing alert variables are logged here but don't halt startup; the
    // corresponding sends fail (and are logged) later instead.
    let config = Config::from_env();
    let http_client = startup::setup_reqwest_client()?;

    let mailer = Arc::new(MailjetMailer::new(http_client, &config));
    let alerter = EmailAlerter::new(ALERTABLE_KINDS, mailer, config.alert_to_email.clone());

    tracing::info!("Starting server");

    let app = router::router(AppState::new(alerter));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Your app is listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
