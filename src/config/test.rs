use super::*;

/// Tests configuration loading across present, missing, and invalid values.
///
/// Runs as one sequential test because it mutates process-wide environment
/// variables, which would race if split across parallel tests.
///
/// Expected: present values load, missing values become None without
/// halting, and PORT falls back to the default when unset or unparsable
#[test]
fn loads_configuration_from_environment() {
    let vars = [
        ("MAILJET_KEY", "key"),
        ("MAILJET_SECRET", "secret"),
        ("ALERT_FROM_EMAIL", "alerts@example.com"),
        ("ALERT_FROM_NAME", "Service Alerts"),
        ("ALERT_TO_EMAIL", "ops@example.com"),
        ("PORT", "9090"),
    ];
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let config = Config::from_env();
    assert_eq!(config.mailjet_key.as_deref(), Some("key"));
    assert_eq!(config.mailjet_secret.as_deref(), Some("secret"));
    assert_eq!(config.alert_from_email.as_deref(), Some("alerts@example.com"));
    assert_eq!(config.alert_from_name.as_deref(), Some("Service Alerts"));
    assert_eq!(config.alert_to_email.as_deref(), Some("ops@example.com"));
    assert_eq!(config.port, 9090);

    // Missing and empty values degrade to None rather than failing startup.
    std::env::remove_var("MAILJET_KEY");
    std::env::set_var("ALERT_TO_EMAIL", "");
    let config = Config::from_env();
    assert_eq!(config.mailjet_key, None);
    assert_eq!(config.alert_to_email, None);
    assert_eq!(config.mailjet_secret.as_deref(), Some("secret"));

    // PORT falls back to the default when unset or unparsable.
    std::env::remove_var("PORT");
    assert_eq!(Config::from_env().port, DEFAULT_PORT);
    std::env::set_var("PORT", "not-a-port");
    assert_eq!(Config::from_env().port, DEFAULT_PORT);

    for (name, _) in vars {
        std::env::remove_var(name);
    }
}
