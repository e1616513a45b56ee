//! # Cod Entity
//!
//! Collect-on-delivery instructions attached to the service block.

use crate::domain::errors::DomainResult;
use crate::domain::validation::{Assignable, Errors, FieldValue, Validateable};

/// Collect-on-delivery amount and remittance address.
///
/// An empty `Cod` is still rendered into every request; it is only
/// validated when the caller supplies one.
///
/// # Examples
///
/// ```
/// use freightquote::domain::entities::Cod;
/// use freightquote::domain::validation::{Assignable, Attributes, Validateable};
///
/// let mut cod = Cod::from_attributes(
///     Attributes::new()
///         .with("amount_to_collect", 1000.0)
///         .with("remit_to_name", "Acme Flooring")
///         .with("remit_to_address", "1 Main St")
///         .with("remit_to_city", "Indianapolis")
///         .with("remit_to_state", "IN")
///         .with("remit_to_zip_code", "46202"),
/// )
/// .unwrap();
/// assert!(cod.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cod {
    amount_to_collect: FieldValue,
    remit_to_name: FieldValue,
    remit_to_address: FieldValue,
    remit_to_city: FieldValue,
    remit_to_state: FieldValue,
    remit_to_zip_code: FieldValue,
    errors: Errors,
}

impl Cod {
    /// Returns the amount to collect.
    #[must_use]
    pub fn amount_to_collect(&self) -> &FieldValue {
        &self.amount_to_collect
    }

    /// Returns the remittance name.
    #[must_use]
    pub fn remit_to_name(&self) -> &FieldValue {
        &self.remit_to_name
    }

    /// Returns the remittance street address.
    #[must_use]
    pub fn remit_to_address(&self) -> &FieldValue {
        &self.remit_to_address
    }

    /// Returns the remittance city.
    #[must_use]
    pub fn remit_to_city(&self) -> &FieldValue {
        &self.remit_to_city
    }

    /// Returns the remittance state.
    #[must_use]
    pub fn remit_to_state(&self) -> &FieldValue {
        &self.remit_to_state
    }

    /// Returns the remittance zip code.
    #[must_use]
    pub fn remit_to_zip_code(&self) -> &FieldValue {
        &self.remit_to_zip_code
    }
}

impl Assignable for Cod {
    const ENTITY: &'static str = "Cod";

    fn assign(&mut self, attribute: &str, value: FieldValue) -> DomainResult<()> {
        match attribute {
            "amount_to_collect" => self.amount_to_collect = value,
            "remit_to_name" => self.remit_to_name = value,
            "remit_to_address" => self.remit_to_address = value,
            "remit_to_city" => self.remit_to_city = value,
            "remit_to_state" => self.remit_to_state = value,
            "remit_to_zip_code" => self.remit_to_zip_code = value,
            other => return Err(Self::unknown_attribute(other)),
        }
        Ok(())
    }
}

impl Validateable for Cod {
    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }

    fn validate(&mut self, errors: &mut Errors) {
        if !(self.amount_to_collect.is_numeric() && self.amount_to_collect.to_float() > 0.0) {
            errors.add("amount_to_collect", "is not a valid amount (> 0.00)");
        }

        let remit_fields = [
            ("remit_to_name", &self.remit_to_name),
            ("remit_to_address", &self.remit_to_address),
            ("remit_to_city", &self.remit_to_city),
            ("remit_to_state", &self.remit_to_state),
            ("remit_to_zip_code", &self.remit_to_zip_code),
        ];
        for (field, value) in remit_fields {
            if value.is_blank() {
                errors.add(field, "is required");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::validation::Attributes;

    fn remit_attributes() -> Attributes {
        Attributes::new()
            .with("remit_to_name", "Acme Flooring")
            .with("remit_to_address", "1 Main St")
            .with("remit_to_city", "Indianapolis")
            .with("remit_to_state", "IN")
            .with("remit_to_zip_code", "46202")
    }

    #[test]
    fn integral_amount_is_numeric() {
        let mut cod = Cod::from_attributes(remit_attributes().with("amount_to_collect", 250)).unwrap();
        assert!(cod.is_valid());
    }

    #[test]
    fn textual_amount_is_rejected() {
        let mut cod =
            Cod::from_attributes(remit_attributes().with("amount_to_collect", "1000.00")).unwrap();
        assert!(!cod.is_valid());
        assert_eq!(
            cod.errors().on("amount_to_collect"),
            Some("is not a valid amount (> 0.00)")
        );
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        for amount in [0.0, -5.0] {
            let mut cod =
                Cod::from_attributes(remit_attributes().with("amount_to_collect", amount)).unwrap();
            assert!(!cod.is_valid(), "{amount} should be rejected");
        }
    }

    #[test]
    fn empty_cod_reports_every_field() {
        let mut cod = Cod::default();
        assert!(!cod.is_valid());
        assert_eq!(cod.errors().count(), 6);
        assert!(cod
            .errors()
            .full_messages()
            .contains(&"Remit to zip code is required".to_string()));
    }
}
