//! # Domain Layer
//!
//! Quote request entities and the validation engine they share.
//!
//! - [`validation`]: field maps, error collection, validate cycle
//! - [`entities`]: Origin, Stop, Destination, Shipment, Cod, Carrier
//! - [`value_objects`]: package types, weight classes, zip codes, rates
//! - [`errors`]: construction errors

pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;
