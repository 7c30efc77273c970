//! Server configuration loaded from environment variables.

use std::str::FromStr;

use crate::error::ServerError;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8090;

/// Log line format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ServerError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8090`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset or blank variables. A non-blank but unparseable `PORT` or
    /// `LOG_FORMAT` is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ServerError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8090);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_unset_port_uses_default() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.addr(), "0.0.0.0:8090");
    }

    #[test]
    fn test_port_from_env() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "3000")])).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "abc")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort { ref value, .. } if value == "abc"));

        let err = Config::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort { .. }));
    }

    #[test]
    fn test_host_and_log_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("RUST_LOG", "debug"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", ""),
            ("HOST", " "),
            ("LOG_FORMAT", ""),
        ]))
        .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_invalid_log_format() {
        let err = Config::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidLogFormat(ref v) if v == "xml"));
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "debug".to_string(),
            log_format: LogFormat::Text,
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}
