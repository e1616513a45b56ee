//! # Stop Entity
//!
//! An intermediate stop between origin and destination.

use crate::domain::errors::DomainResult;
use crate::domain::validation::{Assignable, Errors, FieldValue, Validateable};

/// An intermediate stop, identified by its zip code.
///
/// # Examples
///
/// ```
/// use freightquote::domain::entities::Stop;
/// use freightquote::domain::validation::Validateable;
///
/// let mut stop = Stop::new("46202-1234");
/// assert!(stop.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stop {
    zip_code: FieldValue,
    errors: Errors,
}

impl Stop {
    /// Creates a stop at `zip_code`.
    #[must_use]
    pub fn new(zip_code: impl Into<FieldValue>) -> Self {
        Self {
            zip_code: zip_code.into(),
            errors: Errors::new(),
        }
    }

    /// Returns the zip code.
    #[inline]
    #[must_use]
    pub fn zip_code(&self) -> &FieldValue {
        &self.zip_code
    }
}

impl Assignable for Stop {
    const ENTITY: &'static str = "Stop";

    fn assign(&mut self, attribute: &str, value: FieldValue) -> DomainResult<()> {
        match attribute {
            "zip_code" => self.zip_code = value,
            other => return Err(Self::unknown_attribute(other)),
        }
        Ok(())
    }
}

impl Validateable for Stop {
    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }

    fn validate(&mut self, errors: &mut Errors) {
        super::validate_zip_code(&self.zip_code, errors);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::validation::Attributes;

    #[test]
    fn five_and_nine_digit_codes_validate() {
        assert!(Stop::new("46202").is_valid());
        assert!(Stop::new("46202-1234").is_valid());
    }

    #[test]
    fn missing_zip_reports_both_messages() {
        let mut stop = Stop::default();
        assert!(!stop.is_valid());
        assert_eq!(
            stop.errors().get("zip_code").unwrap(),
            &[
                "cannot be empty".to_string(),
                "is not a 5 or 9 digit zip code".to_string()
            ]
        );
    }

    #[test]
    fn numeric_zip_is_not_a_zip_code() {
        let mut stop = Stop::new(46202);
        assert!(!stop.is_valid());
        assert_eq!(stop.errors().on("zip_code"), Some("is not a 5 or 9 digit zip code"));
    }

    #[test]
    fn from_attributes_rejects_unknown_fields() {
        let error = Stop::from_attributes(Attributes::new().with("zip", "46202")).unwrap_err();
        assert_eq!(error.attribute(), "zip");
    }
}
