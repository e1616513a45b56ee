//! # Transport Configuration
//!
//! Timeouts, TLS material and retry settings for [`HttpsClient`].
//!
//! The configuration is a plain value handed to the client at construction;
//! nothing here is global.
//!
//! [`HttpsClient`]: crate::infrastructure::transport::HttpsClient
//!
//! # Examples
//!
//! ```
//! use freightquote::infrastructure::transport::TransportConfig;
//!
//! let config = TransportConfig::default()
//!     .with_read_timeout_ms(10_000)
//!     .with_retry_safe(true);
//!
//! assert_eq!(config.open_timeout_ms(), 5000);
//! assert!(config.ssl_strict());
//! assert!(config.validate().is_ok());
//! ```

use crate::infrastructure::transport::error::{TransportError, TransportResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default connection open timeout in milliseconds.
pub const DEFAULT_OPEN_TIMEOUT_MS: u64 = 5000;

/// Default read timeout in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 20000;

/// Default number of attempts per request.
pub const MAX_ATTEMPTS: u32 = 3;

/// User-Agent sent when the caller does not set one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows; U; Windows NT 6.0; en-us) AppleWebKit/531.9 (KHTML, like Gecko) Version/4.0.3 Safari/531.9";

/// Content-Type sent with POST bodies when the caller does not set one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Transport settings.
///
/// The client identity file is a PEM bundle (certificate and private key)
/// when `pem_password_required` is off, and a PKCS#12 archive protected by
/// `pem_password` when it is on.
///
/// The read timeout bounds the whole exchange once the connection is open,
/// from sending the request to reading the last byte of the body. It is
/// not an idle timer between reads.
///
/// In strict mode with a `ca_file`, only that bundle is trusted; the
/// platform roots are used when no bundle is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Connection open timeout in milliseconds.
    open_timeout_ms: u64,
    /// Total request deadline in milliseconds.
    read_timeout_ms: u64,
    /// Whether to verify the server certificate.
    ssl_strict: bool,
    /// CA bundle trusted instead of the platform roots in strict mode.
    ca_file: Option<PathBuf>,
    /// Client certificate and key for mutual TLS.
    client_identity: Option<PathBuf>,
    /// Whether the client key is password protected.
    pem_password_required: bool,
    /// Password for a protected client key.
    pem_password: Option<String>,
    /// Whether requests that may have reached the server can be retried.
    retry_safe: bool,
    /// Attempts per request, including the first.
    max_attempts: u32,
    /// User-Agent applied when the request has none.
    user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            open_timeout_ms: DEFAULT_OPEN_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            ssl_strict: true,
            ca_file: None,
            client_identity: None,
            pem_password_required: false,
            pem_password: None,
            retry_safe: false,
            max_attempts: MAX_ATTEMPTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl TransportConfig {
    /// Sets the open timeout.
    #[must_use]
    pub fn with_open_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.open_timeout_ms = timeout_ms;
        self
    }

    /// Sets the read timeout.
    #[must_use]
    pub fn with_read_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.read_timeout_ms = timeout_ms;
        self
    }

    /// Sets strict certificate verification.
    #[must_use]
    pub fn with_ssl_strict(mut self, strict: bool) -> Self {
        self.ssl_strict = strict;
        self
    }

    /// Sets the CA bundle path.
    #[must_use]
    pub fn with_ca_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_file = Some(path.into());
        self
    }

    /// Sets the client identity path.
    #[must_use]
    pub fn with_client_identity(mut self, path: impl Into<PathBuf>) -> Self {
        self.client_identity = Some(path.into());
        self
    }

    /// Marks the client key as password protected.
    #[must_use]
    pub fn with_pem_password_required(mut self, required: bool) -> Self {
        self.pem_password_required = required;
        self
    }

    /// Sets the client key password.
    #[must_use]
    pub fn with_pem_password(mut self, password: impl Into<String>) -> Self {
        self.pem_password = Some(password.into());
        self
    }

    /// Allows retrying requests that may have reached the server.
    #[must_use]
    pub fn with_retry_safe(mut self, retry_safe: bool) -> Self {
        self.retry_safe = retry_safe;
        self
    }

    /// Sets the number of attempts per request.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the default User-Agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the open timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn open_timeout_ms(&self) -> u64 {
        self.open_timeout_ms
    }

    /// Returns the read timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn read_timeout_ms(&self) -> u64 {
        self.read_timeout_ms
    }

    /// Returns the open timeout.
    #[must_use]
    pub fn open_timeout(&self) -> Duration {
        Duration::from_millis(self.open_timeout_ms)
    }

    /// Returns the read timeout.
    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Returns whether the server certificate is verified.
    #[inline]
    #[must_use]
    pub fn ssl_strict(&self) -> bool {
        self.ssl_strict
    }

    /// Returns the CA bundle path.
    #[must_use]
    pub fn ca_file(&self) -> Option<&Path> {
        self.ca_file.as_deref()
    }

    /// Returns whether the platform root certificates are trusted, i.e.
    /// no CA bundle replaces them.
    #[must_use]
    pub fn trusts_platform_roots(&self) -> bool {
        self.ca_file.is_none()
    }

    /// Returns the client identity path.
    #[must_use]
    pub fn client_identity(&self) -> Option<&Path> {
        self.client_identity.as_deref()
    }

    /// Returns whether the client key is password protected.
    #[inline]
    #[must_use]
    pub fn pem_password_required(&self) -> bool {
        self.pem_password_required
    }

    /// Returns the client key password, if set and non-empty.
    #[must_use]
    pub fn pem_password(&self) -> Option<&str> {
        self.pem_password.as_deref().filter(|p| !p.is_empty())
    }

    /// Returns whether unsafe requests may be retried.
    #[inline]
    #[must_use]
    pub fn retry_safe(&self) -> bool {
        self.retry_safe
    }

    /// Returns the number of attempts per request.
    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the default User-Agent.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Checks the settings that can be verified without touching the network.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Configuration` if a protected client key has
    /// no password or if `max_attempts` is zero.
    pub fn validate(&self) -> TransportResult<()> {
        if self.max_attempts == 0 {
            return Err(TransportError::configuration(
                "max_attempts must be at least 1",
            ));
        }
        if self.client_identity.is_some() && self.pem_password_required && self.pem_password().is_none()
        {
            return Err(TransportError::configuration(
                "The private key requires a password",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TransportConfig::default();
        assert_eq!(config.open_timeout(), Duration::from_secs(5));
        assert_eq!(config.read_timeout(), Duration::from_secs(20));
        assert!(config.ssl_strict());
        assert!(!config.retry_safe());
        assert_eq!(config.max_attempts(), 3);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn ca_file_replaces_platform_roots() {
        assert!(TransportConfig::default().trusts_platform_roots());
        let config = TransportConfig::default().with_ca_file("certs/cacert.pem");
        assert!(!config.trusts_platform_roots());
    }

    #[test]
    fn protected_key_without_password_is_rejected() {
        let config = TransportConfig::default()
            .with_client_identity("client.p12")
            .with_pem_password_required(true);
        let error = config.validate().unwrap_err();
        assert_eq!(error.message(), "The private key requires a password");

        let config = config.with_pem_password("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn protected_key_with_password_is_accepted() {
        let config = TransportConfig::default()
            .with_client_identity("client.p12")
            .with_pem_password_required(true)
            .with_pem_password("secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_attempts_is_rejected() {
        assert!(TransportConfig::default().with_max_attempts(0).validate().is_err());
    }

    #[test]
    fn deserializes_partial_settings() {
        let config: TransportConfig =
            serde_json::from_str(r#"{"read_timeout_ms": 1500, "ssl_strict": false}"#).unwrap();
        assert_eq!(config.read_timeout_ms(), 1500);
        assert!(!config.ssl_strict());
        assert_eq!(config.open_timeout_ms(), DEFAULT_OPEN_TIMEOUT_MS);
    }
}
