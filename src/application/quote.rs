//! # Quote
//!
//! Validates a [`QuoteRequest`], submits it and holds the outcome.
//!
//! Resolution happens entirely inside [`Quote::new`]: by the time it
//! returns, the quote carries either a quote id and carriers, or an error
//! map. An invalid request is never sent; its validation messages become
//! the error map.

use crate::application::error::QuoteResult;
use crate::domain::entities::{Carrier, QuoteRequest};
use crate::domain::validation::{Assignable, Attributes, Errors, Validateable};
use crate::domain::value_objects::RateAmount;
use crate::infrastructure::transport::Transport;
use crate::infrastructure::xml::{parse_response, render_wire_request};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, info};

/// Content type of the request document.
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// A resolved quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    request: QuoteRequest,
    quote_id: Option<String>,
    carriers: Vec<Carrier>,
    errors: Errors,
}

impl Quote {
    /// Validates `request` and, if it is valid, posts it to `url`.
    ///
    /// When the test flag is set the credentials are replaced by the test
    /// account before anything else happens.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::Transport` if the service could not be reached
    /// within the retry policy, or `QuoteError::Codec` if the document could
    /// not be rendered. Validation failures and service-reported errors are
    /// not errors; see [`Quote::errors`].
    pub fn new(mut request: QuoteRequest, transport: &dyn Transport, url: &str) -> QuoteResult<Self> {
        request.apply_test_account();

        if !request.is_valid() {
            info!(
                errors = request.errors().count(),
                "quote request failed validation; not submitted"
            );
            let errors = request.errors().clone();
            return Ok(Self {
                request,
                quote_id: None,
                carriers: Vec::new(),
                errors,
            });
        }

        let body = render_wire_request(&request)?;
        debug!(url, bytes = body.len(), test = request.is_test(), "submitting quote request");
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE));
        let response = transport.post(url, &body, headers)?;
        let parsed = parse_response(response.as_deref());

        info!(
            quote_id = parsed.quote_id.as_deref().unwrap_or_default(),
            carriers = parsed.carriers.len(),
            errors = parsed.errors.count(),
            "quote resolved"
        );

        Ok(Self {
            request,
            quote_id: parsed.quote_id,
            carriers: parsed.carriers,
            errors: parsed.errors,
        })
    }

    /// Builds the request from a field map, then resolves it as [`Quote::new`].
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::Domain` for a field outside the allow-list, plus
    /// everything [`Quote::new`] can return.
    pub fn from_attributes(
        attributes: Attributes,
        transport: &dyn Transport,
        url: &str,
    ) -> QuoteResult<Self> {
        let request = QuoteRequest::from_attributes(attributes)?;
        Self::new(request, transport, url)
    }

    /// Returns true if no validation, protocol or response errors were recorded.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the error map: field messages when validation failed,
    /// otherwise service error codes or response sentinels.
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Returns the quote identifier assigned by the service.
    #[inline]
    #[must_use]
    pub fn quote_id(&self) -> Option<&str> {
        self.quote_id.as_deref()
    }

    /// Returns the carrier options in response order.
    #[inline]
    #[must_use]
    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }

    /// Returns the request as it was validated and sent.
    #[inline]
    #[must_use]
    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }

    /// Returns the carrier with the lowest rate.
    ///
    /// Carriers with a blank rate are skipped and the first of equal rates
    /// wins. Returns `None` when no carrier has a rate, and also when the
    /// lowest rate is exactly zero.
    #[must_use]
    pub fn cheapest_carrier(&self) -> Option<&Carrier> {
        let mut lowest: Option<(usize, RateAmount)> = None;
        for (index, carrier) in self.carriers.iter().enumerate() {
            let Some(amount) = carrier.rate_amount() else {
                continue;
            };
            if lowest.as_ref().is_none_or(|(_, low)| amount < *low) {
                lowest = Some((index, amount));
            }
        }

        let (index, amount) = lowest?;
        if amount.is_zero() {
            return None;
        }
        self.carriers.get(index)
    }
}
