//! # Carrier
//!
//! A rate option returned by the quoting service.

use crate::domain::errors::DomainResult;
use crate::domain::validation::{Assignable, FieldValue};
use crate::domain::value_objects::RateAmount;
use serde::{Deserialize, Serialize};

/// One carrier option from a quote response.
///
/// Values are the text of the response elements, copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Carrier {
    option_id: String,
    name: String,
    scac: String,
    rate: String,
    freight_cost: String,
    fuel_surcharge: String,
    transit: String,
}

impl Carrier {
    /// Returns the option identifier.
    #[must_use]
    pub fn option_id(&self) -> &str {
        &self.option_id
    }

    /// Returns the carrier name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the Standard Carrier Alpha Code.
    #[must_use]
    pub fn scac(&self) -> &str {
        &self.scac
    }

    /// Returns the total rate text, e.g. `$74.43`.
    #[must_use]
    pub fn rate(&self) -> &str {
        &self.rate
    }

    /// Returns the linehaul cost text.
    #[must_use]
    pub fn freight_cost(&self) -> &str {
        &self.freight_cost
    }

    /// Returns the fuel surcharge text.
    #[must_use]
    pub fn fuel_surcharge(&self) -> &str {
        &self.fuel_surcharge
    }

    /// Returns the transit time in days, as text.
    #[must_use]
    pub fn transit(&self) -> &str {
        &self.transit
    }

    /// Returns the numeric amount of the rate, or `None` when the rate is blank.
    #[must_use]
    pub fn rate_amount(&self) -> Option<RateAmount> {
        if self.rate.trim().is_empty() {
            None
        } else {
            Some(RateAmount::parse(&self.rate))
        }
    }
}

impl Assignable for Carrier {
    const ENTITY: &'static str = "Carrier";

    fn assign(&mut self, attribute: &str, value: FieldValue) -> DomainResult<()> {
        let value = value.to_string();
        match attribute {
            "option_id" => self.option_id = value,
            "name" => self.name = value,
            "scac" => self.scac = value,
            "rate" => self.rate = value,
            "freight_cost" => self.freight_cost = value,
            "fuel_surcharge" => self.fuel_surcharge = value,
            "transit" => self.transit = value,
            other => return Err(Self::unknown_attribute(other)),
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::validation::Attributes;
    use rust_decimal::Decimal;

    #[test]
    fn rate_amount_skips_blank_rates() {
        let carrier = Carrier::from_attributes(Attributes::new().with("rate", " ")).unwrap();
        assert!(carrier.rate_amount().is_none());

        let carrier = Carrier::from_attributes(Attributes::new().with("rate", "$72.13")).unwrap();
        assert_eq!(carrier.rate_amount().map(RateAmount::value), Some(Decimal::new(7213, 2)));
    }

    #[test]
    fn serializes_with_field_names() {
        let carrier = Carrier::from_attributes(
            Attributes::new().with("option_id", "1").with("scac", "DUGN"),
        )
        .unwrap();
        let json = serde_json::to_value(&carrier).unwrap();
        assert_eq!(json["option_id"], "1");
        assert_eq!(json["scac"], "DUGN");
    }
}
