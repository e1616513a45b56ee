//! # freightquote
//!
//! Client for the Freightquote XML rate-quoting service.
//!
//! A quote request is assembled from validated entities (origin, stops,
//! destination, shipments, collect-on-delivery), rendered as the service's
//! XML document, posted over HTTPS with bounded retries and parsed back
//! into carrier rate options or an error map.
//!
//! # Layers
//!
//! - [`domain`]: entities, value objects and the validation engine
//! - [`infrastructure`]: XML codec and HTTPS transport
//! - [`application`]: the [`Quote`] orchestrator and the [`FreightQuote`] client
//! - [`settings`]: file and environment configuration
//!
//! # Examples
//!
//! ```no_run
//! use freightquote::domain::entities::{Destination, Origin, QuoteRequest, Shipment};
//! use freightquote::domain::validation::{Assignable, Attributes};
//! use freightquote::infrastructure::transport::{HttpsClient, TransportConfig};
//! use freightquote::FreightQuote;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpsClient::new(TransportConfig::default())?;
//! let mut client = FreightQuote::new("", "", Box::new(transport)).with_test_mode(true);
//!
//! let shipment = Shipment::from_attributes(
//!     Attributes::new()
//!         .with("weight", 150)
//!         .with("weight_class", 50)
//!         .with("product_description", "books")
//!         .with("hazardous", false)
//!         .with("package_type", "BOXES")
//!         .with("pieces", 2)
//!         .with("stackable", true),
//! )?;
//!
//! let request = QuoteRequest::new()
//!     .with_origin(Origin::new("46202"))
//!     .with_destination(Destination::new("95014").with_flags(false, true, false, false, true))
//!     .with_shipment(shipment);
//!
//! let quote = client.quote(request)?;
//! if let Some(carrier) = quote.cheapest_carrier() {
//!     println!("{} {}", carrier.name(), carrier.rate());
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod settings;

pub use application::{FreightQuote, Quote, QuoteError, QuoteResult};
pub use settings::Settings;
