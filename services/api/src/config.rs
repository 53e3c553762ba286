//! Service configuration
//!
//! Settings are layered, later sources winning:
//! 1. built-in defaults
//! 2. an optional `portfolio.toml` in the working directory
//! 3. `PORTFOLIO_`-prefixed environment variables, `__` separating nested keys
//!    (e.g. `PORTFOLIO_SERVER__PORT=8080`, `PORTFOLIO_STATIC_DIR=public`)
//! 4. a bare `PORT` variable, as set by most hosting platforms

use std::env;
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A source could not be read or deserialized
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// The `PORT` override is not a valid port number
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    /// Directory holding the built client
    pub static_dir: PathBuf,
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            static_dir: PathBuf::from("dist/public"),
            log: LogSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from `portfolio.toml` and the process environment
    pub fn load() -> Result<Self, SettingsError> {
        Self::from_sources(
            Environment::with_prefix("PORTFOLIO"),
            env::var("PORT").ok(),
        )
    }

    /// Load settings from the given environment source and optional port override
    pub fn from_sources(
        environment: Environment,
        port_override: Option<String>,
    ) -> Result<Self, SettingsError> {
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name("portfolio").required(false))
            .add_source(
                environment
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(port) = port_override {
            settings.server.port = port
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidPort(port.clone()))?;
        }

        Ok(settings)
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        Environment::with_prefix("PORTFOLIO").source(Some(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_sources(environment(&[]), None).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind_address(), "0.0.0.0:5000");
        assert_eq!(settings.static_dir, PathBuf::from("dist/public"));
    }

    #[test]
    fn test_prefixed_environment_overrides() {
        let settings = Settings::from_sources(
            environment(&[
                ("PORTFOLIO_SERVER__HOST", "127.0.0.1"),
                ("PORTFOLIO_SERVER__PORT", "8080"),
                ("PORTFOLIO_STATIC_DIR", "public"),
                ("PORTFOLIO_LOG__LEVEL", "debug"),
            ]),
            None,
        )
        .unwrap();

        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
        assert_eq!(settings.static_dir, PathBuf::from("public"));
        assert_eq!(settings.log.level, "debug");
    }

    #[test]
    fn test_port_override_wins() {
        let settings = Settings::from_sources(
            environment(&[("PORTFOLIO_SERVER__PORT", "8080")]),
            Some("3000".to_string()),
        )
        .unwrap();

        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_invalid_port_override() {
        let result = Settings::from_sources(environment(&[]), Some("eighty".to_string()));

        assert!(matches!(result, Err(SettingsError::InvalidPort(value)) if value == "eighty"));
    }

    #[test]
    #[serial]
    fn test_load_reads_process_environment() {
        // SAFETY: serialized with every other test that touches the environment
        unsafe {
            env::set_var("PORTFOLIO_SERVER__HOST", "10.0.0.1");
        }

        let settings = Settings::load();

        unsafe {
            env::remove_var("PORTFOLIO_SERVER__HOST");
        }

        assert_eq!(settings.unwrap().server.host, "10.0.0.1");
    }
}
