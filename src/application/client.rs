//! # FreightQuote Client
//!
//! Holds credentials, endpoint and transport, and resolves quotes with
//! them.
//!
//! # Reuse
//!
//! The first call to [`FreightQuote::quote`] resolves a quote and keeps it;
//! later calls return that same quote and ignore their request. Call
//! [`FreightQuote::take_quote`] to clear it before asking for another.

use crate::application::error::QuoteResult;
use crate::application::quote::Quote;
use crate::domain::entities::QuoteRequest;
use crate::domain::entities::quote_request::{TEST_ACCOUNT_EMAIL, TEST_ACCOUNT_PASSWORD};
use crate::domain::errors::DomainResult;
use crate::domain::validation::{Assignable, Attributes, FieldValue};
use crate::infrastructure::transport::{HttpsClient, Transport};
use crate::settings::{API_URL, Settings};
use std::fmt;
use tracing::debug;

/// Client for the quoting service.
///
/// # Examples
///
/// ```no_run
/// use freightquote::application::FreightQuote;
/// use freightquote::settings::Settings;
///
/// let settings = Settings {
///     test: true,
///     ..Settings::default()
/// };
/// let client = FreightQuote::from_settings(&settings)?;
/// assert_eq!(client.email(), "xmltest@freightquote.com");
/// # Ok::<(), freightquote::application::error::QuoteError>(())
/// ```
pub struct FreightQuote {
    email: String,
    password: String,
    test: bool,
    api_url: String,
    transport: Box<dyn Transport>,
    quote: Option<Quote>,
}

impl fmt::Debug for FreightQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreightQuote")
            .field("email", &self.email)
            .field("test", &self.test)
            .field("api_url", &self.api_url)
            .field("quote", &self.quote)
            .finish_non_exhaustive()
    }
}

/// Credential fields accepted by [`FreightQuote::from_attributes`].
#[derive(Default)]
struct Credentials {
    email: FieldValue,
    password: FieldValue,
    test: FieldValue,
}

impl Assignable for Credentials {
    const ENTITY: &'static str = "FreightQuote";

    fn assign(&mut self, attribute: &str, value: FieldValue) -> DomainResult<()> {
        match attribute {
            "email" => self.email = value,
            "password" => self.password = value,
            "test" => self.test = value,
            other => return Err(Self::unknown_attribute(other)),
        }
        Ok(())
    }
}

impl FreightQuote {
    /// Creates a live client posting to the production endpoint.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            test: false,
            api_url: API_URL.to_string(),
            transport,
            quote: None,
        }
    }

    /// Creates a client from `email`, `password` and `test` attributes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownAttribute` for any other key.
    pub fn from_attributes(attributes: Attributes, transport: Box<dyn Transport>) -> DomainResult<Self> {
        let credentials = Credentials::from_attributes(attributes)?;
        Ok(Self::new(
            credentials.email.to_string(),
            credentials.password.to_string(),
            transport,
        )
        .with_test_mode(credentials.test.is_true()))
    }

    /// Creates a client with an [`HttpsClient`] built from `settings`.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::Transport` if the transport settings are invalid.
    pub fn from_settings(settings: &Settings) -> QuoteResult<Self> {
        let transport = HttpsClient::new(settings.transport.clone())?;
        Ok(Self::new(
            settings.email.clone(),
            settings.password.clone(),
            Box::new(transport),
        )
        .with_test_mode(settings.test)
        .with_api_url(settings.api_url.clone()))
    }

    /// Enables or disables test mode. Enabling it replaces the credentials
    /// with the published test account.
    #[must_use]
    pub fn with_test_mode(mut self, test: bool) -> Self {
        self.test = test;
        if test {
            self.email = TEST_ACCOUNT_EMAIL.to_string();
            self.password = TEST_ACCOUNT_PASSWORD.to_string();
        }
        self
    }

    /// Sets the endpoint.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Returns the account email.
    #[inline]
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the account password.
    #[inline]
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns true in test mode.
    #[inline]
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.test
    }

    /// Returns the endpoint.
    #[inline]
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Resolves `request` with this client's credentials, or returns the
    /// quote resolved by an earlier call.
    ///
    /// # Errors
    ///
    /// See [`Quote::new`]. A failed call keeps nothing, so the next call
    /// tries again.
    pub fn quote(&mut self, request: QuoteRequest) -> QuoteResult<&Quote> {
        let quote = match self.quote.take() {
            Some(quote) => {
                debug!("reusing resolved quote");
                quote
            }
            None => {
                let request = request.with_credentials(
                    self.email.as_str(),
                    self.password.as_str(),
                    self.test,
                );
                Quote::new(request, self.transport.as_ref(), &self.api_url)?
            }
        };
        let quote: &Quote = self.quote.insert(quote);
        Ok(quote)
    }

    /// Returns the kept quote, if any.
    #[must_use]
    pub fn last_quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    /// Removes and returns the kept quote.
    pub fn take_quote(&mut self) -> Option<Quote> {
        self.quote.take()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::{Destination, Origin, Shipment};
    use crate::infrastructure::transport::{HttpRequest, TransportResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting {
        calls: Arc<AtomicUsize>,
    }

    impl Transport for Counting {
        fn execute(&self, request: &HttpRequest) -> TransportResult<Option<String>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            assert!(request.body().unwrap().contains("EMAIL=\"XMLTEST@FREIGHTQUOTE.COM\""));
            Ok(Some(format!("<FQQUOTE QUOTEID=\"{call}\"/>")))
        }
    }

    fn counting() -> (Box<dyn Transport>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Box::new(Counting { calls: Arc::clone(&calls) }), calls)
    }

    fn request() -> QuoteRequest {
        let shipment = Shipment::from_attributes(
            Attributes::new()
                .with("weight", 150)
                .with("weight_class", 50)
                .with("product_description", "books")
                .with("hazardous", false)
                .with("package_type", "BOXES")
                .with("pieces", 2)
                .with("stackable", true),
        )
        .unwrap();
        QuoteRequest::new()
            .with_origin(Origin::new("46202"))
            .with_destination(Destination::new("95014").with_flags(true, false, false, false, false))
            .with_shipment(shipment)
    }

    #[test]
    fn test_mode_replaces_credentials() {
        let (transport, _) = counting();
        let client = FreightQuote::new("me@example.com", "secret", transport).with_test_mode(true);
        assert_eq!(client.email(), TEST_ACCOUNT_EMAIL);
        assert_eq!(client.password(), TEST_ACCOUNT_PASSWORD);
        assert_eq!(client.api_url(), API_URL);
    }

    #[test]
    fn from_attributes_honours_test_flag() {
        let (transport, _) = counting();
        let client = FreightQuote::from_attributes(
            Attributes::new()
                .with("email", "me@example.com")
                .with("password", "secret")
                .with("test", true),
            transport,
        )
        .unwrap();
        assert!(client.is_test());
        assert_eq!(client.email(), TEST_ACCOUNT_EMAIL);
    }

    #[test]
    fn from_attributes_rejects_unknown_keys() {
        let (transport, _) = counting();
        let err = FreightQuote::from_attributes(Attributes::new().with("token", "x"), transport)
            .unwrap_err();
        assert_eq!(err.attribute(), "token");
    }

    #[test]
    fn quote_is_kept_until_taken() {
        let (transport, calls) = counting();
        let mut client = FreightQuote::new("me@example.com", "secret", transport).with_test_mode(true);

        assert_eq!(client.quote(request()).unwrap().quote_id(), Some("1"));
        assert_eq!(client.quote(request()).unwrap().quote_id(), Some("1"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let taken = client.take_quote().unwrap();
        assert_eq!(taken.quote_id(), Some("1"));
        assert!(client.last_quote().is_none());

        assert_eq!(client.quote(request()).unwrap().quote_id(), Some("2"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
