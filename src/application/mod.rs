//! # Application Layer
//!
//! Quote resolution on top of the domain and infrastructure layers.
//!
//! - [`Quote`]: validate, submit and parse one request
//! - [`FreightQuote`]: credentials, endpoint and transport in one place
//! - [`error`]: failures that prevent a quote from resolving

pub mod client;
pub mod error;
pub mod quote;

pub use client::FreightQuote;
pub use error::{QuoteError, QuoteResult};
pub use quote::Quote;
