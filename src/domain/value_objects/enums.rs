//! # Domain Enums
//!
//! Closed vocabularies accepted by the quoting service.
//!
//! - [`PackageType`] - How the freight is packaged
//! - [`BillTo`] - Which party pays for the shipment
//!
//! Parsing is exact: values must already be in the service's upper-case
//! spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Packaging of a shipment.
///
/// # Examples
///
/// ```
/// use freightquote::domain::value_objects::PackageType;
///
/// let package: PackageType = "TUBING/PIPE".parse().unwrap();
/// assert_eq!(package, PackageType::TubingPipe);
/// assert!(!package.requires_dimensions());
/// assert!(PackageType::Motorcycle.requires_dimensions());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PackageType {
    /// Palletized freight.
    #[serde(rename = "PALLETS")]
    Pallets = 0,
    /// Bags.
    #[serde(rename = "BAGS")]
    Bags = 1,
    /// Bales.
    #[serde(rename = "BALES")]
    Bales = 2,
    /// Boxes.
    #[serde(rename = "BOXES")]
    Boxes = 3,
    /// Bunches.
    #[serde(rename = "BUNCHES")]
    Bunches = 4,
    /// Carpets.
    #[serde(rename = "CARPETS")]
    Carpets = 5,
    /// Coils.
    #[serde(rename = "COILS")]
    Coils = 6,
    /// Crates.
    #[serde(rename = "CRATES")]
    Crates = 7,
    /// Cylinders.
    #[serde(rename = "CYLINDERS")]
    Cylinders = 8,
    /// Drums.
    #[serde(rename = "DRUMS")]
    Drums = 9,
    /// Pails.
    #[serde(rename = "PAILS")]
    Pails = 10,
    /// Reels.
    #[serde(rename = "REELS")]
    Reels = 11,
    /// Rolls.
    #[serde(rename = "ROLLS")]
    Rolls = 12,
    /// Tubing or pipe.
    #[serde(rename = "TUBING/PIPE")]
    TubingPipe = 13,
    /// A motorcycle.
    #[serde(rename = "MOTORCYCLE")]
    Motorcycle = 14,
    /// An all-terrain vehicle.
    #[serde(rename = "ATV")]
    Atv = 15,
}

impl PackageType {
    /// Every accepted package type, in the service's order.
    pub const ALL: [Self; 16] = [
        Self::Pallets,
        Self::Bags,
        Self::Bales,
        Self::Boxes,
        Self::Bunches,
        Self::Carpets,
        Self::Coils,
        Self::Crates,
        Self::Cylinders,
        Self::Drums,
        Self::Pails,
        Self::Reels,
        Self::Rolls,
        Self::TubingPipe,
        Self::Motorcycle,
        Self::Atv,
    ];

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pallets => "PALLETS",
            Self::Bags => "BAGS",
            Self::Bales => "BALES",
            Self::Boxes => "BOXES",
            Self::Bunches => "BUNCHES",
            Self::Carpets => "CARPETS",
            Self::Coils => "COILS",
            Self::Crates => "CRATES",
            Self::Cylinders => "CYLINDERS",
            Self::Drums => "DRUMS",
            Self::Pails => "PAILS",
            Self::Reels => "REELS",
            Self::Rolls => "ROLLS",
            Self::TubingPipe => "TUBING/PIPE",
            Self::Motorcycle => "MOTORCYCLE",
            Self::Atv => "ATV",
        }
    }

    /// Returns true for vehicle types, which always need length, width and height.
    #[inline]
    #[must_use]
    pub const fn requires_dimensions(self) -> bool {
        matches!(self, Self::Motorcycle | Self::Atv)
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|package| package.as_str() == s)
            .ok_or_else(|| ParseEnumError::InvalidValue("PackageType", s.to_string()))
    }
}

/// Party billed for the shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum BillTo {
    /// The shipper pays.
    Shipper = 0,
    /// The receiver pays.
    Receiver = 1,
    /// A third-party site pays.
    Site = 2,
}

impl BillTo {
    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shipper => "SHIPPER",
            Self::Receiver => "RECEIVER",
            Self::Site => "SITE",
        }
    }
}

impl fmt::Display for BillTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillTo {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHIPPER" => Ok(Self::Shipper),
            "RECEIVER" => Ok(Self::Receiver),
            "SITE" => Ok(Self::Site),
            _ => Err(ParseEnumError::InvalidValue("BillTo", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod package_type {
        use super::*;

        #[test]
        fn all_spellings_round_trip() {
            for package in PackageType::ALL {
                assert_eq!(package.as_str().parse::<PackageType>().unwrap(), package);
            }
        }

        #[test]
        fn parsing_is_exact() {
            assert!("pallets".parse::<PackageType>().is_err());
            assert!("PALLET".parse::<PackageType>().is_err());
        }

        #[test]
        fn only_vehicles_require_dimensions() {
            let vehicles: Vec<_> = PackageType::ALL
                .into_iter()
                .filter(|p| p.requires_dimensions())
                .collect();
            assert_eq!(vehicles, vec![PackageType::Motorcycle, PackageType::Atv]);
        }

        #[test]
        fn serde_uses_wire_spelling() {
            let json = serde_json::to_string(&PackageType::TubingPipe).unwrap();
            assert_eq!(json, "\"TUBING/PIPE\"");
        }
    }

    mod bill_to {
        use super::*;

        #[test]
        fn from_str_works() {
            assert_eq!("SHIPPER".parse::<BillTo>().unwrap(), BillTo::Shipper);
            assert_eq!("RECEIVER".parse::<BillTo>().unwrap(), BillTo::Receiver);
            assert_eq!("SITE".parse::<BillTo>().unwrap(), BillTo::Site);
        }

        #[test]
        fn from_str_invalid() {
            let error = "BROKER".parse::<BillTo>().unwrap_err();
            assert_eq!(error.to_string(), "invalid BillTo value: 'BROKER'");
        }
    }
}
