//! # Shipment Entity
//!
//! One line of freight: weight, class, packaging and handling flags.
//!
//! # Dimension rules
//!
//! Length, width and height become mandatory when the package type is a
//! vehicle (`MOTORCYCLE`, `ATV`) or when the weight exceeds 1,200 lbs,
//! whatever the package type.

use crate::domain::errors::DomainResult;
use crate::domain::validation::{Assignable, Errors, FieldValue, Validateable};
use crate::domain::value_objects::{PackageType, WeightClass};

/// Maximum weight accepted per shipment, in pounds.
pub const MAX_WEIGHT_LBS: i64 = 2000;

/// Weight above which dimensions are required, in pounds.
pub const DIMENSIONS_REQUIRED_ABOVE_LBS: i64 = 1200;

/// One line of freight.
///
/// Before validation the weight is coerced to whole pounds and the package
/// type is upper-cased.
///
/// # Examples
///
/// ```
/// use freightquote::domain::entities::Shipment;
/// use freightquote::domain::validation::{Assignable, Attributes, Validateable};
///
/// let mut shipment = Shipment::from_attributes(
///     Attributes::new()
///         .with("weight", 2000)
///         .with("weight_class", 50)
///         .with("length", 76)
///         .with("width", 80)
///         .with("height", 48)
///         .with("product_description", "hardwood flooring")
///         .with("hazardous", false)
///         .with("package_type", "pallets")
///         .with("pieces", 1)
///         .with("stackable", false),
/// )
/// .unwrap();
///
/// assert!(shipment.is_valid());
/// assert_eq!(shipment.package_type().as_str(), Some("PALLETS"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shipment {
    weight: FieldValue,
    weight_class: FieldValue,
    length: FieldValue,
    width: FieldValue,
    height: FieldValue,
    nmfc: FieldValue,
    product_description: FieldValue,
    hazardous: FieldValue,
    package_type: FieldValue,
    pieces: FieldValue,
    stackable: FieldValue,
    errors: Errors,
}

impl Shipment {
    /// Returns the weight.
    #[must_use]
    pub fn weight(&self) -> &FieldValue {
        &self.weight
    }

    /// Returns the freight class.
    #[must_use]
    pub fn weight_class(&self) -> &FieldValue {
        &self.weight_class
    }

    /// Returns the length.
    #[must_use]
    pub fn length(&self) -> &FieldValue {
        &self.length
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> &FieldValue {
        &self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> &FieldValue {
        &self.height
    }

    /// Returns the NMFC item number.
    #[must_use]
    pub fn nmfc(&self) -> &FieldValue {
        &self.nmfc
    }

    /// Returns the product description.
    #[must_use]
    pub fn product_description(&self) -> &FieldValue {
        &self.product_description
    }

    /// Returns the hazardous materials flag.
    #[must_use]
    pub fn hazardous(&self) -> &FieldValue {
        &self.hazardous
    }

    /// Returns the package type.
    #[must_use]
    pub fn package_type(&self) -> &FieldValue {
        &self.package_type
    }

    /// Returns the piece count.
    #[must_use]
    pub fn pieces(&self) -> &FieldValue {
        &self.pieces
    }

    /// Returns the stackable flag.
    #[must_use]
    pub fn stackable(&self) -> &FieldValue {
        &self.stackable
    }

    fn dimensions(&self) -> [(&'static str, &FieldValue); 3] {
        [
            ("length", &self.length),
            ("width", &self.width),
            ("height", &self.height),
        ]
    }
}

impl Assignable for Shipment {
    const ENTITY: &'static str = "Shipment";

    fn assign(&mut self, attribute: &str, value: FieldValue) -> DomainResult<()> {
        match attribute {
            "weight" => self.weight = value,
            "weight_class" => self.weight_class = value,
            "length" => self.length = value,
            "width" => self.width = value,
            "height" => self.height = value,
            "nmfc" => self.nmfc = value,
            "product_description" => self.product_description = value,
            "hazardous" => self.hazardous = value,
            "package_type" => self.package_type = value,
            "pieces" => self.pieces = value,
            "stackable" => self.stackable = value,
            other => return Err(Self::unknown_attribute(other)),
        }
        Ok(())
    }
}

impl Validateable for Shipment {
    fn errors(&self) -> &Errors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }

    fn before_validate(&mut self) {
        self.weight = FieldValue::Integer(self.weight.to_integer());
        self.package_type.make_uppercase();
    }

    fn validate(&mut self, errors: &mut Errors) {
        let package = self
            .package_type
            .as_str()
            .and_then(|text| text.parse::<PackageType>().ok());
        if self.package_type.is_blank() {
            errors.add("package_type", "is required");
        } else if package.is_none() {
            errors.add("package_type", "is not valid");
        }

        if self.weight_class.is_blank() {
            errors.add("weight_class", "is required");
        } else if !self.weight_class.is_numeric()
            || WeightClass::from_number(self.weight_class.to_float()).is_none()
        {
            errors.add("weight_class", "is not valid");
        }

        let weight = self.weight.to_integer();
        if weight <= 0 {
            errors.add("weight", "is required");
        }
        if weight > MAX_WEIGHT_LBS {
            errors.add("weight", "cannot be over 2000 lbs");
        }

        if package.is_some_and(PackageType::requires_dimensions) {
            for (field, value) in self.dimensions() {
                if value.to_integer() == 0 {
                    errors.add(
                        field,
                        format!("is required by package type {}", self.package_type),
                    );
                }
            }
        }

        if weight > DIMENSIONS_REQUIRED_ABOVE_LBS {
            for (field, value) in self.dimensions() {
                if value.to_integer() == 0 {
                    errors.add(
                        field,
                        format!(
                            "is required by package type {} over 1,200 lbs",
                            self.package_type
                        ),
                    );
                }
            }
        }

        if self.product_description.is_blank() {
            errors.add("product_description", "is required");
        }

        super::validate_boolean("hazardous", &self.hazardous, errors);
        if self.pieces.to_integer() < 1 {
            errors.add("pieces", "are required");
        }
        super::validate_boolean("stackable", &self.stackable, errors);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::validation::Attributes;

    fn pallet_attributes() -> Attributes {
        Attributes::new()
            .with("weight", 500)
            .with("weight_class", 50)
            .with("product_description", "hardwood flooring")
            .with("hazardous", false)
            .with("package_type", "PALLETS")
            .with("pieces", 1)
            .with("stackable", false)
    }

    fn shipment(attributes: Attributes) -> Shipment {
        Shipment::from_attributes(attributes).unwrap()
    }

    #[test]
    fn light_pallet_needs_no_dimensions() {
        assert!(shipment(pallet_attributes()).is_valid());
    }

    #[test]
    fn normalization_coerces_weight_and_package_type() {
        let mut shipment = shipment(
            pallet_attributes()
                .with("weight", "750 lbs")
                .with("package_type", "crates"),
        );
        assert!(shipment.is_valid());
        assert_eq!(shipment.weight(), &FieldValue::Integer(750));
        assert_eq!(shipment.package_type().as_str(), Some("CRATES"));
    }

    #[test]
    fn unknown_package_type_is_rejected() {
        let mut shipment = shipment(pallet_attributes().with("package_type", "PALLET"));
        assert!(!shipment.is_valid());
        assert_eq!(shipment.errors().on("package_type"), Some("is not valid"));
    }

    #[test]
    fn missing_package_type_is_required() {
        let mut shipment = shipment(pallet_attributes().with("package_type", FieldValue::Null));
        assert!(!shipment.is_valid());
        assert_eq!(shipment.errors().get("package_type").unwrap(), &["is required"]);
    }

    #[test]
    fn weight_class_must_be_listed_and_numeric() {
        let mut fractional = shipment(pallet_attributes().with("weight_class", 77.5));
        assert!(fractional.is_valid());

        let mut unlisted = shipment(pallet_attributes().with("weight_class", 75));
        assert!(!unlisted.is_valid());
        assert_eq!(unlisted.errors().on("weight_class"), Some("is not valid"));

        let mut textual = shipment(pallet_attributes().with("weight_class", "50"));
        assert!(!textual.is_valid());
    }

    #[test]
    fn overweight_shipment_fails_even_with_dimensions() {
        let mut shipment = shipment(
            pallet_attributes()
                .with("weight", 2001)
                .with("length", 48)
                .with("width", 40)
                .with("height", 40),
        );
        assert!(!shipment.is_valid());
        assert_eq!(
            shipment.errors().full_messages(),
            vec!["Weight cannot be over 2000 lbs"]
        );
    }

    #[test]
    fn zero_weight_is_required() {
        let mut shipment = shipment(pallet_attributes().with("weight", 0));
        assert!(!shipment.is_valid());
        assert_eq!(shipment.errors().on("weight"), Some("is required"));
    }

    #[test]
    fn heavy_freight_requires_dimensions_regardless_of_type() {
        let mut shipment = shipment(pallet_attributes().with("weight", 1500));
        assert!(!shipment.is_valid());
        for field in ["length", "width", "height"] {
            assert_eq!(
                shipment.errors().on(field),
                Some("is required by package type PALLETS over 1,200 lbs")
            );
        }
    }

    #[test]
    fn vehicles_require_dimensions() {
        let mut shipment = shipment(pallet_attributes().with("package_type", "atv"));
        assert!(!shipment.is_valid());
        assert_eq!(
            shipment.errors().on("length"),
            Some("is required by package type ATV")
        );

        let mut measured = Shipment::from_attributes(
            pallet_attributes()
                .with("package_type", "MOTORCYCLE")
                .with("length", 84)
                .with("width", 36)
                .with("height", 48),
        )
        .unwrap();
        assert!(measured.is_valid());
    }

    #[test]
    fn flags_and_pieces() {
        let mut shipment = shipment(
            pallet_attributes()
                .with("hazardous", "no")
                .with("stackable", FieldValue::Null)
                .with("pieces", 0)
                .with("product_description", ""),
        );
        assert!(!shipment.is_valid());
        assert_eq!(
            shipment.errors().full_messages(),
            vec![
                "Product description is required",
                "Hazardous is not a boolean (true/false) value",
                "Pieces are required",
                "Stackable is not a boolean (true/false) value",
            ]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let mut shipment = shipment(pallet_attributes().with("weight", 1500));
        let first = (shipment.is_valid(), shipment.errors().clone());
        let second = (shipment.is_valid(), shipment.errors().clone());
        assert_eq!(first, second);
    }
}
