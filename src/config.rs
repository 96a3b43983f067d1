//! Environment-based application configuration.
//!
//! Configuration is read once at process start and passed into constructors
//! explicitly; nothing reads the ambient environment at request time.
//!
//! Validation is deliberately soft: a missing alert variable is logged as an
//! error but does not halt the process, since the demo server is still useful
//! without a working mail configuration. Sends that need the missing value
//! fail later with the variable's name and are logged by the alert task.

const DEFAULT_PORT: u16 = 8080;

/// Application configuration loaded from the environment.
pub struct Config {
    /// Mailjet API key (`MAILJET_KEY`).
    pub mailjet_key: Option<String>,
    /// Mailjet API secret (`MAILJET_SECRET`).
    pub mailjet_secret: Option<String>,
    /// Sender address for alert emails (`ALERT_FROM_EMAIL`).
    pub alert_from_email: Option<String>,
    /// Sender display name for alert emails (`ALERT_FROM_NAME`).
    pub alert_from_name: Option<String>,
    /// Recipient address for alert emails (`ALERT_TO_EMAIL`).
    pub alert_to_email: Option<String>,
    /// Port the HTTP server listens on (`PORT`, default 8080).
    pub port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Each missing or empty alert variable is logged as an error but left as
    /// `None` rather than failing startup. An unset or unparsable `PORT`
    /// falls back to the default.
    ///
    /// # Returns
    /// - `Config` - Configuration with whatever values were present
    pub fn from_env() -> Self {
        Self {
            mailjet_key: required_var("MAILJET_KEY"),
            mailjet_secret: required_var("MAILJET_SECRET"),
            alert_from_email: required_var("ALERT_FROM_EMAIL"),
            alert_from_name: required_var("ALERT_FROM_NAME"),
            alert_to_email: required_var("ALERT_TO_EMAIL"),
            port: port_from_env(),
        }
    }
}

/// Reads a required variable, logging an error when it is absent or empty.
fn required_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            tracing::error!("Missing required environment variable: {}", name);
            None
        }
    }
}

/// Reads `PORT`, defaulting when unset and warning on unparsable values.
fn port_from_env() -> u16 {
    let Ok(value) = std::env::var("PORT") else {
        return DEFAULT_PORT;
    };

    match value.parse() {
        Ok(port) => port,
        Err(_) => {
            tracing::warn!(
                "Invalid PORT value '{}', falling back to {}",
                value,
                DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}

#[cfg(test)]
mod test;
