//! # Transport Trait
//!
//! The seam between the quote orchestrator and the network.
//!
//! [`Transport`] executes an [`HttpRequest`] and returns the raw response
//! body, `None` when the response carried no body at all.

use crate::infrastructure::transport::config::{DEFAULT_CONTENT_TYPE, DEFAULT_USER_AGENT};
use crate::infrastructure::transport::error::{TransportError, TransportResult};
use reqwest::header::{AsHeaderName, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use std::fmt;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET.
    Get,
    /// POST.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// An outgoing request.
///
/// # Examples
///
/// ```
/// use freightquote::infrastructure::transport::HttpRequest;
/// use reqwest::header::{CONTENT_TYPE, HeaderValue};
///
/// let request = HttpRequest::post("https://example.com/quote", "<freightquote/>")
///     .with_header(CONTENT_TYPE, HeaderValue::from_static("text/xml"))
///     .with_defaults("test-agent")?;
///
/// assert_eq!(request.header("content-type"), Some("text/xml"));
/// assert_eq!(request.header("User-Agent"), Some("test-agent"));
/// # Ok::<(), freightquote::infrastructure::transport::TransportError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    url: String,
    body: Option<String>,
    headers: HeaderMap,
}

impl HttpRequest {
    /// Creates a GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Creates a POST request with `body`.
    #[must_use]
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body.into()),
            headers: HeaderMap::new(),
        }
    }

    /// Sets a header, replacing any previous value.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merges `headers` into the request; later values replace earlier ones.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Adds the default User-Agent and, for POST, the default Content-Type,
    /// unless already present.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Configuration` if `user_agent` is not a
    /// valid header value.
    pub fn with_defaults(mut self, user_agent: &str) -> TransportResult<Self> {
        if self.method == HttpMethod::Post && !self.headers.contains_key(CONTENT_TYPE) {
            self.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        }
        if !self.headers.contains_key(USER_AGENT) {
            let value = if user_agent.is_empty() {
                HeaderValue::from_static(DEFAULT_USER_AGENT)
            } else {
                HeaderValue::from_str(user_agent).map_err(|e| {
                    TransportError::configuration(format!("Invalid User-Agent: {}", e))
                })?
            };
            self.headers.insert(USER_AGENT, value);
        }
        Ok(self)
    }

    /// Returns the method.
    #[inline]
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a header value as text, if present and visible ASCII.
    #[must_use]
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Executes HTTP requests and returns raw response bodies.
pub trait Transport {
    /// Executes `request`.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` once the implementation's retry policy
    /// gives up, or immediately for configuration problems.
    fn execute(&self, request: &HttpRequest) -> TransportResult<Option<String>>;

    /// Executes a GET request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    fn get(&self, url: &str, headers: HeaderMap) -> TransportResult<Option<String>> {
        self.execute(&HttpRequest::get(url).with_headers(headers))
    }

    /// Executes a POST request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    fn post(
        &self,
        url: &str,
        body: &str,
        headers: HeaderMap,
    ) -> TransportResult<Option<String>> {
        self.execute(&HttpRequest::post(url, body).with_headers(headers))
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> TransportResult<Option<String>> {
        (**self).execute(request)
    }
}
