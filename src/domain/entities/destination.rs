//! # Destination Entity
//!
//! Delivery location with its accessorial flags.
//!
//! At least one of loading dock, residence or inside delivery must be set.
//! The construction site flag is validated as a boolean but does not
//! satisfy that requirement on its own.

use crate::domain::errors::DomainResult;
use crate::domain::validation::{Assignable, Errors, FieldValue, Validateable};

/// Delivery location.
///
/// # Examples
///
/// ```
/// use freightquote::domain::entities::Destination;
/// use freightquote::domain::validation::Validateable;
///
/// let mut destination = Destination::new("95014").with_flags(false, true, false, false, true);
/// assert!(destination.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Destination {
    zip_code: FieldValue,
    loading_dock: FieldValue,
    residence: FieldValue,
    construction_site: FieldValue,
    inside: FieldValue,
    lift_gate: FieldValue,
    errors: Errors,
}

impl Destination {
    /// Creates a destination at `zip_code` with every flag unset.
    #[must_use]
    pub fn new(zip_code: impl Into<FieldValue>) -> Self {
        Self {
            zip_code: zip_code.into(),
            ..Self::default()
        }
    }

    /// Sets all five flags: loading dock, residence, construction site,
    /// inside delivery and lift gate.
    #[must_use]
    pub fn with_flags(
        mut self,
        loading_dock: bool,
        residence: bool,
        construction_site: bool,
        inside: bool,
        lift_gate: bool,
    ) -> Self {
        self.loading_dock = loading_dock.into();
        self.residence = residence.into();
        self.construction_site = construction_site.into();
        self.inside = inside.into();
        self.lift_gate = lift_gate.into();
        self
    }

    /// Returns the zip code.
    #[must_use]
    pub fn zip_code(&self) -> &FieldValue {
        &self.zip_code
    }

    /// Returns the loading dock flag.
    #[must_use]
    pub fn loading_dock(&self) -> &FieldValue {
        &self.loading_dock
    }

    /// Returns the residence flag.
    #[must_use]
    pub fn residence(&self) -> &FieldValue {
        &self.residence
    }

    /// Returns the construction site flag.
    #[must_use]
    pub fn construction_site(&self) -> &FieldValue {
        &self.construction_site
    }

    /// Returns the inside delivery flag.
    #[must_use]
    pub fn inside(&self) -> &FieldValue {
        &self.inside
    }

    /// Returns the lift gate flag.
    #[must_use]
    pub fn lift_gate(&self) -> &FieldValue {
        &self.lift_gate
    }
}

impl Assignable for Destination {
    const ENTITY: &'static str = "Destination";

    fn assign(&mut self, attribute: &str, value: FieldValue) -> DomainResult<()> {
        match attribute {
            "zip_code" => self.zip_code = value,
            "loading_dock" => self.loading_dock = value,
            "residence" => self.residence = value,
            "construction_site" => self.construction_site = value,
            "inside" => self.inside = value,
            "lift_gate" => self.lift_gate = value,
            other => return Err(Self::unknown_attribute(other)),
        }
        Ok(())
    }
}

impl Validateable for Destination {
    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }

    fn validate(&mut self, errors: &mut Errors) {
        super::validate_boolean("loading_dock", &self.loading_dock, errors);
        super::validate_boolean("residence", &self.residence, errors);
        super::validate_boolean("construction_site", &self.construction_site, errors);
        super::validate_boolean("inside", &self.inside, errors);
        super::validate_boolean("lift_gate", &self.lift_gate, errors);
        super::validate_zip_code(&self.zip_code, errors);

        // construction_site does not count toward this rule.
        if !(self.loading_dock.is_true() || self.residence.is_true() || self.inside.is_true()) {
            errors.add(
                "loading_dock",
                ", residence, construction_site, inside or lift_gate must be true",
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::validation::Attributes;

    #[test]
    fn residence_delivery_is_valid() {
        let mut destination = Destination::new("95014").with_flags(false, true, false, false, true);
        assert!(destination.is_valid());
        assert!(destination.errors().is_empty());
    }

    #[test]
    fn all_flags_false_is_invalid() {
        let mut destination =
            Destination::new("95014").with_flags(false, false, false, false, false);
        assert!(!destination.is_valid());
        assert_eq!(
            destination.errors().full_messages(),
            vec!["Loading dock , residence, construction_site, inside or lift_gate must be true"]
        );
    }

    #[test]
    fn construction_site_alone_does_not_satisfy_flag_rule() {
        let mut destination = Destination::new("95014").with_flags(false, false, true, false, false);
        assert!(!destination.is_valid());
        assert!(destination.errors().contains("loading_dock"));
    }

    #[test]
    fn lift_gate_alone_does_not_satisfy_flag_rule() {
        let mut destination = Destination::new("95014").with_flags(false, false, false, false, true);
        assert!(!destination.is_valid());
    }

    #[test]
    fn flags_must_be_literal_booleans() {
        let mut destination = Destination::from_attributes(
            Attributes::new()
                .with("zip_code", "95014")
                .with("loading_dock", "true")
                .with("residence", true)
                .with("construction_site", 0)
                .with("inside", false)
                .with("lift_gate", false),
        )
        .unwrap();
        assert!(!destination.is_valid());
        assert_eq!(
            destination.errors().on("loading_dock"),
            Some("is not a boolean (true/false) value")
        );
        assert!(destination.errors().contains("construction_site"));
        assert!(!destination.errors().contains("residence"));
    }

    #[test]
    fn validation_is_idempotent() {
        let mut destination = Destination::new("9501").with_flags(false, false, false, false, false);
        let first = (destination.is_valid(), destination.errors().full_messages());
        let second = (destination.is_valid(), destination.errors().full_messages());
        assert_eq!(first, second);
    }
}
