//! # Origin Entity
//!
//! Pickup location. Carried into the request as-is; the service checks it.

use crate::domain::errors::DomainResult;
use crate::domain::validation::{Assignable, FieldValue};

/// Pickup location and its accessorial flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Origin {
    zip_code: FieldValue,
    loading_dock: FieldValue,
    residence: FieldValue,
    construction_site: FieldValue,
    inside: FieldValue,
    lift_gate: FieldValue,
}

impl Origin {
    /// Creates an origin at `zip_code` with every flag unset.
    #[must_use]
    pub fn new(zip_code: impl Into<FieldValue>) -> Self {
        Self {
            zip_code: zip_code.into(),
            ..Self::default()
        }
    }

    /// Sets the loading dock flag.
    #[must_use]
    pub fn with_loading_dock(mut self, value: impl Into<FieldValue>) -> Self {
        self.loading_dock = value.into();
        self
    }

    /// Sets the residence flag.
    #[must_use]
    pub fn with_residence(mut self, value: impl Into<FieldValue>) -> Self {
        self.residence = value.into();
        self
    }

    /// Sets the lift gate flag.
    #[must_use]
    pub fn with_lift_gate(mut self, value: impl Into<FieldValue>) -> Self {
        self.lift_gate = value.into();
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

    /// Returns the inside pickup flag.
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

impl Assignable for Origin {
    const ENTITY: &'static str = "Origin";

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
