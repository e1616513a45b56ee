//! # HTTPS Client
//!
//! Blocking HTTP/HTTPS transport with timeouts, TLS policy and retries.
//!
//! One connection is opened per request and closed afterwards. Response
//! bodies are returned whatever the status code: the quoting service
//! reports its errors inside the document.
//!
//! # Examples
//!
//! ```no_run
//! use freightquote::infrastructure::transport::{HttpsClient, Transport, TransportConfig};
//! use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml"));
//!
//! let client = HttpsClient::new(TransportConfig::default())?;
//! let body = client.post(
//!     "https://b2b.Freightquote.com/dll/FQXMLQuoter.asp",
//!     "<FREIGHTQUOTE/>",
//!     headers,
//! )?;
//! # Ok::<(), freightquote::infrastructure::transport::TransportError>(())
//! ```

use crate::infrastructure::transport::config::TransportConfig;
use crate::infrastructure::transport::error::{TransportError, TransportResult};
use crate::infrastructure::transport::retry::RetryPolicy;
use crate::infrastructure::transport::traits::{HttpMethod, HttpRequest, Transport};
use reqwest::blocking::{Client, Response};
use reqwest::{Certificate, Identity, StatusCode, Url};
use std::io;
use tracing::{debug, warn};

/// Blocking HTTPS transport.
#[derive(Debug, Clone)]
pub struct HttpsClient {
    config: TransportConfig,
    policy: RetryPolicy,
}

impl HttpsClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Configuration` if the configuration is
    /// inconsistent, e.g. a protected client key without a password.
    pub fn new(config: TransportConfig) -> TransportResult<Self> {
        config.validate()?;
        let policy = RetryPolicy::from_config(&config);
        Ok(Self { config, policy })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Builds a single-use client for `url`.
    fn build_client(&self, url: &Url) -> TransportResult<Client> {
        let mut builder = Client::builder()
            .connect_timeout(self.config.open_timeout())
            .timeout(self.config.read_timeout())
            .pool_max_idle_per_host(0);

        if url.scheme() == "https" {
            if self.config.ssl_strict() {
                builder =
                    builder.tls_built_in_root_certs(self.config.trusts_platform_roots());
                if let Some(certificate) = self.load_ca_certificate()? {
                    builder = builder.add_root_certificate(certificate);
                }
            } else {
                builder = builder.danger_accept_invalid_certs(true);
            }

            if let Some(identity) = self.load_identity()? {
                builder = builder.identity(identity);
            }
        }

        builder.build().map_err(|e| {
            TransportError::configuration(format!("Failed to create HTTP client: {}", e))
        })
    }

    fn load_ca_certificate(&self) -> TransportResult<Option<Certificate>> {
        let Some(path) = self.config.ca_file() else {
            return Ok(None);
        };
        let pem = std::fs::read(path).map_err(|e| {
            TransportError::configuration(format!(
                "Failed to read CA file {}: {}",
                path.display(),
                e
            ))
        })?;
        Certificate::from_pem(&pem)
            .map(Some)
            .map_err(|e| TransportError::configuration(format!("Invalid CA certificate: {}", e)))
    }

    fn load_identity(&self) -> TransportResult<Option<Identity>> {
        let Some(path) = self.config.client_identity() else {
            return Ok(None);
        };
        let bytes = std::fs::read(path).map_err(|e| {
            TransportError::configuration(format!(
                "Failed to read client identity {}: {}",
                path.display(),
                e
            ))
        })?;

        let identity = if self.config.pem_password_required() {
            let password = self.config.pem_password().ok_or_else(|| {
                TransportError::configuration("The private key requires a password")
            })?;
            Identity::from_pkcs12_der(&bytes, password)
        } else {
            Identity::from_pkcs8_pem(&bytes, &bytes)
        };

        identity
            .map(Some)
            .map_err(|e| TransportError::configuration(format!("Invalid client identity: {}", e)))
    }

    /// Sends `request` once.
    fn send_once(
        &self,
        client: &Client,
        url: &Url,
        request: &HttpRequest,
    ) -> TransportResult<Option<String>> {
        let mut builder = match request.method() {
            HttpMethod::Get => client.get(url.clone()),
            HttpMethod::Post => client.post(url.clone()),
        }
        .headers(request.headers().clone());
        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().map_err(classify)?;
        read_body(response)
    }
}

impl Transport for HttpsClient {
    fn execute(&self, request: &HttpRequest) -> TransportResult<Option<String>> {
        let request = request.clone().with_defaults(self.config.user_agent())?;
        let url = Url::parse(request.url())
            .map_err(|e| TransportError::invalid_url(format!("{}: {}", request.url(), e)))?;
        let client = self.build_client(&url)?;

        debug!(method = %request.method(), url = %url, "executing request");
        self.policy
            .run(|_| self.send_once(&client, &url, &request))
    }
}

/// Reads the body; statuses that cannot carry one yield `None`.
fn read_body(response: Response) -> TransportResult<Option<String>> {
    let status = response.status();
    if !status.is_success() {
        warn!(%status, "remote server answered with a non-success status");
    }
    if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED {
        return Ok(None);
    }
    response.text().map(Some).map_err(classify)
}

/// Maps a reqwest error onto the transport taxonomy.
fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        return TransportError::timed_out();
    }
    match io_error_kind(&error) {
        Some(io::ErrorKind::ConnectionRefused) => TransportError::refused(),
        Some(io::ErrorKind::ConnectionReset) => TransportError::reset(),
        Some(io::ErrorKind::TimedOut) => TransportError::timed_out(),
        _ if error.is_connect() => {
            TransportError::connection(format!("Connection failed: {}", error))
        }
        _ => TransportError::dropped(),
    }
}

/// Finds the first I/O error in the source chain.
fn io_error_kind(error: &(dyn std::error::Error + 'static)) -> Option<io::ErrorKind> {
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            return Some(io_error.kind());
        }
        source = cause.source();
    }
    None
}
