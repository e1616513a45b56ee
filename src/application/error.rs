//! # Application Errors
//!
//! Failures that abort a quote before a result exists.
//!
//! Validation problems and errors reported by the quoting service are not
//! errors at this level: they are recorded on the resolved
//! [`Quote`](crate::application::Quote).
//!
//! # Error Hierarchy
//!
//! ```text
//! QuoteError
//! ├── Domain(DomainError)       - unknown attribute during construction
//! ├── Transport(TransportError) - connection or TLS configuration failure
//! └── Codec(CodecError)         - request document could not be written
//! ```
//!
//! # Examples
//!
//! ```
//! use freightquote::application::error::QuoteError;
//! use freightquote::infrastructure::transport::TransportError;
//!
//! let err: QuoteError = TransportError::refused().into();
//! assert!(err.is_transport());
//! assert!(err.to_string().contains("refused"));
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::transport::TransportError;
use crate::infrastructure::xml::CodecError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Construction error from a field map.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Transport failure after retries.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Request document could not be rendered.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

impl QuoteError {
    /// Returns true if this is a construction error.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns true if this is a transport error.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if the failure was a connection problem.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connection(),
            Self::Domain(_) | Self::Codec(_) => false,
        }
    }
}

/// Result type for application operations.
pub type QuoteResult<T> = Result<T, QuoteError>;
