//! HTTP client and configuration.

use crate::error::StreamError;
use crate::types::Credentials;
use crate::video::{Video, HEADER_AUTH_EMAIL, HEADER_AUTH_KEY};
use std::time::Duration;

/// Default authority for the Cloudflare v4 API.
pub(crate) const DEFAULT_API_BASE: &str = "https://api.cloudflare.com";

/// A Cloudflare Stream client.
///
/// The client is cloneable and can be shared across threads. It manages
/// connection pooling and holds the account credentials; every request it
/// issues carries the `X-Auth-Key` and `X-Auth-Email` headers.
///
/// Operations on an existing video live on the [`Video`] handles created
/// with [`video`](Client::video); uploads are account-scoped and live on
/// [`upload`](Client::upload).
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) inner: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) api_base: String,
}

impl Client {
    /// Create a new client with default transport settings.
    ///
    /// No timeout, proxy, or retry policy is configured; use
    /// [`Client::builder`] to bound request latency.
    ///
    /// Returns [`StreamError::InvalidCredentials`] if any of `key`, `zone`,
    /// or `email` is empty.
    pub fn new(
        key: impl Into<String>,
        zone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, StreamError> {
        let credentials = Credentials::new(key, zone, email)?;
        ClientBuilder::new().credentials(credentials).build()
    }

    /// Create a client from [`Credentials::from_env`].
    pub fn from_env() -> Result<Self, StreamError> {
        ClientBuilder::new().credentials(Credentials::from_env()?).build()
    }

    /// Create a client builder for customization.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a video handle for the given resource URL.
    ///
    /// No network request is made until an operation is called. The URL is
    /// treated as opaque - it is whatever a previous call (or the caller)
    /// supplied.
    pub fn video(&self, resource_url: &str) -> Video {
        Video {
            url: resource_url.to_string(),
            client: self.clone(),
        }
    }

    /// Attach the auth headers to a request.
    pub(crate) fn with_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header(HEADER_AUTH_KEY, &self.credentials.key)
            .header(HEADER_AUTH_EMAIL, &self.credentials.email)
    }

    /// Account-scoped upload endpoint.
    pub(crate) fn copy_endpoint(&self) -> String {
        format!(
            "{}/client/v4/accounts/{}/stream/copy",
            self.api_base.trim_end_matches('/'),
            self.credentials.zone
        )
    }
}

/// Builder for configuring a Client.
#[must_use = "builders do nothing unless you call .build()"]
pub struct ClientBuilder {
    credentials: Option<Credentials>,
    api_base: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new client builder.
    pub fn new() -> Self {
        Self {
            credentials: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: None,
        }
    }

    /// Set the account credentials. Required.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the API authority used for account-scoped endpoints.
    ///
    /// Only the upload endpoint is built from this value; the other
    /// operations target resource URLs returned by the API verbatim.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// No timeout is applied unless one is set here.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// Returns [`StreamError::InvalidCredentials`] if no credentials were
    /// supplied, and [`StreamError::Network`] if the underlying HTTP client
    /// fails to build (e.g. TLS configuration).
    pub fn build(self) -> Result<Client, StreamError> {
        let credentials = self.credentials.ok_or(StreamError::InvalidCredentials)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build().map_err(StreamError::Network)?;

        Ok(Client {
            inner,
            credentials,
            api_base: self.api_base,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
