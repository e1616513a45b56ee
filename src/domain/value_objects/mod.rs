//! # Value Objects
//!
//! Fixed vocabularies and wire-format rules used by the entities.
//!
//! - [`PackageType`]: the 16 accepted package types
//! - [`BillTo`]: the party billed for the shipment
//! - [`WeightClass`]: the 18 NMFC freight classes
//! - [`ZipCode`]: 5-digit and ZIP+4 pattern
//! - [`RateAmount`]: numeric amount extracted from a quoted rate

pub mod enums;
pub mod rate;
pub mod weight_class;
pub mod zip_code;

pub use enums::{BillTo, PackageType, ParseEnumError};
pub use rate::RateAmount;
pub use weight_class::WeightClass;
pub use zip_code::ZipCode;
