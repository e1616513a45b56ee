//! # Transport
//!
//! Resilient HTTPS transport used to reach the quoting service.
//!
//! - [`TransportConfig`]: timeouts, TLS material, retry settings
//! - [`TransportError`]: retriable vs. unsafe connection failures
//! - [`RetryPolicy`]: bounded immediate retries
//! - [`Transport`]: the seam the orchestrator depends on
//! - [`HttpsClient`]: blocking implementation backed by reqwest

pub mod client;
pub mod config;
pub mod error;
pub mod retry;
pub mod traits;

pub use client::HttpsClient;
pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use retry::{RetryDecision, RetryPolicy};
pub use traits::{HttpMethod, HttpRequest, Transport};
