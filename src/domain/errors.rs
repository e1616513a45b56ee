//! # Domain Errors
//!
//! Construction errors raised while building entities from field maps.
//!
//! These are terminal: they signal a mismatch between the caller's field
//! names and the entity schema, and never end up in an [`Errors`]
//! collection.
//!
//! [`Errors`]: crate::domain::validation::Errors
//!
//! # Examples
//!
//! ```
//! use freightquote::domain::errors::DomainError;
//!
//! let error = DomainError::unknown_attribute("Stop", "zip");
//! assert_eq!(error.to_string(), "unknown attribute: zip (Stop)");
//! ```

use thiserror::Error;

/// Error type for entity construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A field name outside the entity's allow-list was supplied.
    #[error("unknown attribute: {attribute} ({entity})")]
    UnknownAttribute {
        /// The entity being constructed.
        entity: &'static str,
        /// The rejected field name.
        attribute: String,
    },
}

impl DomainError {
    /// Creates an unknown attribute error.
    #[must_use]
    pub fn unknown_attribute(entity: &'static str, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            entity,
            attribute: attribute.into(),
        }
    }

    /// Returns the rejected attribute name.
    #[must_use]
    pub fn attribute(&self) -> &str {
        match self {
            Self::UnknownAttribute { attribute, .. } => attribute,
        }
    }
}

/// Result type for entity construction.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_attribute_exposes_name() {
        let error = DomainError::unknown_attribute("Shipment", "colour");
        assert_eq!(error.attribute(), "colour");
        assert!(error.to_string().contains("Shipment"));
    }
}
