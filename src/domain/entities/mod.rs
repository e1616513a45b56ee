//! # Domain Entities
//!
//! Validated value objects describing one quote request.
//!
//! ## Locations
//!
//! - [`Origin`]: pickup location
//! - [`Stop`]: intermediate stop
//! - [`Destination`]: delivery location and accessorial flags
//!
//! ## Freight and services
//!
//! - [`Shipment`]: one line of freight
//! - [`Cod`]: collect-on-delivery instructions
//!
//! ## Aggregate
//!
//! - [`QuoteRequest`]: everything submitted for one quote
//!
//! ## Results
//!
//! - [`Carrier`]: a rate option returned by the service

pub mod carrier;
pub mod cod;
pub mod destination;
pub mod origin;
pub mod quote_request;
pub mod shipment;
pub mod stop;

pub use carrier::Carrier;
pub use cod::Cod;
pub use destination::Destination;
pub use origin::Origin;
pub use quote_request::QuoteRequest;
pub use shipment::Shipment;
pub use stop::Stop;

use crate::domain::validation::{Errors, FieldValue};
use crate::domain::value_objects::ZipCode;

const NOT_BOOLEAN: &str = "is not a boolean (true/false) value";

/// Zip code rules shared by every location entity.
fn validate_zip_code(zip_code: &FieldValue, errors: &mut Errors) {
    if zip_code.is_blank() {
        errors.add("zip_code", "cannot be empty");
    }
    if !zip_code.as_str().is_some_and(ZipCode::is_valid) {
        errors.add("zip_code", "is not a 5 or 9 digit zip code");
    }
}

/// Records `field` unless `value` is literally `true` or `false`.
fn validate_boolean(field: &str, value: &FieldValue, errors: &mut Errors) {
    if value.as_bool().is_none() {
        errors.add(field, NOT_BOOLEAN);
    }
}
