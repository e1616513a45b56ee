//! # XML Codec
//!
//! Wire format of the quoting service.
//!
//! - [`XmlBuilder`]: indented element writer
//! - [`Fragment`]: how each entity renders itself
//! - [`request`]: the full `freightquote` request document
//! - [`response`]: parsing of `FQERROR` / `FQQUOTE` responses

pub mod builder;
pub mod fragments;
pub mod request;
pub mod response;

pub use builder::XmlBuilder;
pub use fragments::Fragment;
pub use request::{render_request, render_wire_request};
pub use response::{QuoteResponse, parse_response};

use thiserror::Error;

/// Error type for document generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The writer failed.
    #[error("xml write error: {message}")]
    Write {
        /// Error message.
        message: String,
    },

    /// The generated document was not valid UTF-8.
    #[error("xml encoding error: {message}")]
    Encoding {
        /// Error message.
        message: String,
    },
}

impl CodecError {
    /// Creates a write error.
    #[must_use]
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }

    /// Creates an encoding error.
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }
}

/// Result type for document generation.
pub type CodecResult<T> = Result<T, CodecError>;
