//! Configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Twilio sandbox sender used when `TWILIO_WHATSAPP_NUMBER` is unset.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "whatsapp:+14155238886";

/// Webhook server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Verbose logging when no `RUST_LOG` is set.
    pub debug: bool,
    /// Directory for `app.log`.
    pub log_dir: PathBuf,
    /// Twilio account credentials.
    pub twilio: TwilioConfig,
}

/// Twilio account credentials and sender number.
#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub whatsapp_number: String,
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("whatsapp_number", &self.whatsapp_number)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `TWILIO_ACCOUNT_SID` | Twilio account SID | (required) |
    /// | `TWILIO_AUTH_TOKEN` | Twilio auth token | (required) |
    /// | `TWILIO_WHATSAPP_NUMBER` | WhatsApp sender | `whatsapp:+14155238886` |
    /// | `HOST` | Bind host | `0.0.0.0` |
    /// | `PORT` | Bind port | `8000` |
    /// | `DEBUG` | Debug logging | `true` |
    /// | `LOG_DIR` | Log directory | `logs` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let account_sid = required("TWILIO_ACCOUNT_SID")?;
        let auth_token = required("TWILIO_AUTH_TOKEN")?;
        let whatsapp_number = env::var("TWILIO_WHATSAPP_NUMBER")
            .unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        if host.trim().is_empty() {
            return Err(ConfigError::InvalidHost);
        }

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => 8000,
        };

        let debug = env::var("DEBUG")
            .map(|v| parse_bool(&v))
            .unwrap_or(true);

        let log_dir = env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Ok(Self {
            host,
            port,
            debug,
            log_dir,
            twilio: TwilioConfig {
                account_sid,
                auth_token,
                whatsapp_number,
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn parse_bool(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value == "true" || value == "1"
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("HOST must not be empty")]
    InvalidHost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool(" TRUE "));
        assert!(parse_bool("1"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("yes"));
    }

    #[test]
    fn test_debug_redacts_auth_token() {
        let twilio = TwilioConfig {
            account_sid: "AC123".to_string(),
            auth_token: "secret-token".to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        };
        let printed = format!("{twilio:?}");
        assert!(printed.contains("AC123"));
        assert!(!printed.contains("secret-token"));
    }

    // Env vars are process-global, so all scenarios run under one lock.
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all() {
            for name in [
                "TWILIO_ACCOUNT_SID",
                "TWILIO_AUTH_TOKEN",
                "TWILIO_WHATSAPP_NUMBER",
                "HOST",
                "PORT",
                "DEBUG",
                "LOG_DIR",
            ] {
                std::env::remove_var(name);
            }
        }

        // Missing credentials
        clear_all();
        match Config::from_env() {
            Err(ConfigError::MissingVar(name)) => assert_eq!(name, "TWILIO_ACCOUNT_SID"),
            other => panic!("Expected MissingVar, got {other:?}"),
        }

        std::env::set_var("TWILIO_ACCOUNT_SID", "AC123");
        std::env::set_var("TWILIO_AUTH_TOKEN", "  ");
        match Config::from_env() {
            Err(ConfigError::MissingVar(name)) => assert_eq!(name, "TWILIO_AUTH_TOKEN"),
            other => panic!("Expected MissingVar, got {other:?}"),
        }

        // Defaults
        std::env::set_var("TWILIO_AUTH_TOKEN", "token");
        let config = Config::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.debug);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.twilio.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);

        // Overrides
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "9000");
        std::env::set_var("DEBUG", "False");
        std::env::set_var("LOG_DIR", "/tmp/bmtc-logs");
        std::env::set_var("TWILIO_WHATSAPP_NUMBER", "whatsapp:+15550001111");
        let config = Config::from_env().unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert!(!config.debug);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/bmtc-logs"));
        assert_eq!(config.twilio.whatsapp_number, "whatsapp:+15550001111");

        // Invalid port
        std::env::set_var("PORT", "eighty");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPort(raw)) if raw == "eighty"
        ));

        clear_all();
    }
}
