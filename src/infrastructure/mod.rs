//! # Infrastructure Layer
//!
//! Adapters between the domain and the outside world.
//!
//! - [`xml`]: request rendering and response parsing
//! - [`transport`]: HTTPS delivery with bounded retries

pub mod transport;
pub mod xml;
