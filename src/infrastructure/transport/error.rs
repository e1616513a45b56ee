//! # Transport Errors
//!
//! Error taxonomy for HTTP transport operations.
//!
//! Connection failures come in two kinds:
//!
//! - [`TransportError::RetriableConnection`]: the request never reached the
//!   server (connection refused) and is always safe to retry.
//! - [`TransportError::Connection`]: the request may have reached the server
//!   (dropped, reset, timed out). It is only retried when the caller opts in.
//!
//! Configuration and URL errors are raised before any network activity and
//! are never retried.
//!
//! # Examples
//!
//! ```
//! use freightquote::infrastructure::transport::error::TransportError;
//!
//! let error = TransportError::refused();
//! assert!(error.is_retriable());
//!
//! let error = TransportError::timed_out();
//! assert!(!error.is_retriable());
//! assert!(error.is_connection());
//! ```

use thiserror::Error;

/// Message for a refused connection.
pub const REFUSED_MESSAGE: &str = "The remote server refused the connection";

/// Message for a connection dropped mid-request.
pub const DROPPED_MESSAGE: &str = "The remote server dropped the connection";

/// Message for a connection reset by the peer.
pub const RESET_MESSAGE: &str = "The remote server reset the connection";

/// Message for an open or read timeout.
pub const TIMED_OUT_MESSAGE: &str = "The connection to the remote server timed out";

/// Error type for transport operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server could not be reached; retrying cannot cause side effects.
    #[error("retriable connection error: {message}")]
    RetriableConnection {
        /// Error message.
        message: String,
    },

    /// The connection failed after the request may have been sent.
    #[error("connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The transport is misconfigured (TLS material, passwords, limits).
    #[error("transport configuration error: {message}")]
    Configuration {
        /// Error message.
        message: String,
    },

    /// The request URL could not be parsed.
    #[error("invalid url: {message}")]
    InvalidUrl {
        /// Error message.
        message: String,
    },
}

impl TransportError {
    /// Creates a retriable connection error.
    #[must_use]
    pub fn retriable_connection(message: impl Into<String>) -> Self {
        Self::RetriableConnection {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an invalid URL error.
    #[must_use]
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    /// The server refused the connection.
    #[must_use]
    pub fn refused() -> Self {
        Self::retriable_connection(REFUSED_MESSAGE)
    }

    /// The server dropped the connection.
    #[must_use]
    pub fn dropped() -> Self {
        Self::connection(DROPPED_MESSAGE)
    }

    /// The server reset the connection.
    #[must_use]
    pub fn reset() -> Self {
        Self::connection(RESET_MESSAGE)
    }

    /// The connection timed out.
    #[must_use]
    pub fn timed_out() -> Self {
        Self::connection(TIMED_OUT_MESSAGE)
    }

    /// Returns true if the error is always safe to retry.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::RetriableConnection { .. })
    }

    /// Returns true for either kind of connection failure.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::RetriableConnection { .. } | Self::Connection { .. }
        )
    }

    /// Returns the error message without its category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::RetriableConnection { message }
            | Self::Connection { message }
            | Self::Configuration { message }
            | Self::InvalidUrl { message } => message,
        }
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
