//! # Settings
//!
//! Layered configuration for the client and the command line.
//!
//! Sources, later ones winning:
//!
//! 1. built-in defaults
//! 2. `freightquote.toml` in the working directory, or an explicit file
//! 3. environment variables prefixed `FREIGHTQUOTE_`, with `__` between
//!    nested keys (`FREIGHTQUOTE_TRANSPORT__READ_TIMEOUT_MS=30000`)
//!
//! A `.env` file, when present, is loaded into the environment first. A
//! missing file is fine; an unreadable or malformed one is an error.

use crate::infrastructure::transport::TransportConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Production endpoint of the quoting service.
pub const API_URL: &str = "https://b2b.Freightquote.com/dll/FQXMLQuoter.asp";

/// Settings file looked up when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "freightquote";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "FREIGHTQUOTE";

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// The `.env` file exists but could not be loaded.
    #[error("failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    /// The transport section is inconsistent.
    #[error("invalid transport settings: {0}")]
    Transport(String),
}

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Use the published test account.
    pub test: bool,
    /// Service endpoint.
    pub api_url: String,
    /// Transport settings.
    pub transport: TransportConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            test: false,
            api_url: API_URL.to_string(),
            transport: TransportConfig::default(),
        }
    }
}

impl Settings {
    /// Loads settings from the default file (if any) and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is unreadable or the result fails
    /// transport validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads settings, reading `path` instead of the default file.
    ///
    /// An explicit file must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is unreadable or the result fails
    /// transport validation.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        accept_missing_dotenv(dotenvy::dotenv())?;

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Checks the transport section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Transport` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.transport
            .validate()
            .map_err(|e| ConfigError::Transport(e.message().to_string()))
    }
}

/// Treats a missing `.env` file as success and surfaces every other failure.
fn accept_missing_dotenv(result: Result<PathBuf, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(error)) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(ConfigError::Dotenv(error)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_file(contents: &str) -> (std::path::PathBuf, std::fs::File) {
        let path = std::env::temp_dir().join(format!(
            "freightquote-settings-{}-{}.toml",
            std::process::id(),
            contents.len()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (path, file)
    }

    #[test]
    fn defaults_point_at_production() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, API_URL);
        assert!(!settings.test);
        assert_eq!(settings.transport, TransportConfig::default());
    }

    #[test]
    fn explicit_file_is_read() {
        let (path, _file) = settings_file(
            "email = \"ops@example.com\"\npassword = \"pw\"\ntest = true\n\n[transport]\nread_timeout_ms = 1500\nretry_safe = true\n",
        );
        let settings = Settings::load_from(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.email, "ops@example.com");
        assert!(settings.test);
        assert_eq!(settings.api_url, API_URL);
        assert_eq!(settings.transport.read_timeout_ms(), 1500);
        assert!(settings.transport.retry_safe());
        assert_eq!(settings.transport.open_timeout_ms(), 5000);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("freightquote-settings-does-not-exist.toml");
        assert!(Settings::load_from(Some(&path)).is_err());
    }

    #[test]
    fn missing_dotenv_is_ignored() {
        let missing = dotenvy::Error::Io(io::Error::from(io::ErrorKind::NotFound));
        assert!(accept_missing_dotenv(Err(missing)).is_ok());
        assert!(accept_missing_dotenv(Ok(PathBuf::from(".env"))).is_ok());
    }

    #[test]
    fn malformed_dotenv_is_an_error() {
        let malformed = dotenvy::Error::LineParse("FREIGHTQUOTE EMAIL".to_string(), 12);
        let err = accept_missing_dotenv(Err(malformed)).unwrap_err();
        assert!(matches!(err, ConfigError::Dotenv(_)));

        let denied = dotenvy::Error::Io(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(accept_missing_dotenv(Err(denied)).is_err());
    }

    #[test]
    fn protected_key_without_password_is_rejected() {
        let (path, _file) = settings_file(
            "[transport]\nclient_identity = \"client.p12\"\npem_password_required = true\n",
        );
        let result = Settings::load_from(Some(&path));
        std::fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("The private key requires a password"));
    }
}
