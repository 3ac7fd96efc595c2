//! Credentials and resource identifier parsing.

use crate::error::StreamError;
use std::env;
use std::fmt;

/// Authentication credentials for the Cloudflare Stream API.
///
/// All three fields are required, validated at construction, and immutable
/// for the lifetime of the client. `key` and `email` are sent as the
/// `X-Auth-Key` / `X-Auth-Email` headers on every request; `zone` selects
/// the account in the upload endpoint path.
#[derive(Clone)]
pub struct Credentials {
    pub(crate) key: String,
    pub(crate) zone: String,
    pub(crate) email: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"<redacted>")
            .field("zone", &self.zone)
            .field("email", &self.email)
            .finish()
    }
}

impl Credentials {
    /// Create credentials from explicit values.
    ///
    /// Returns [`StreamError::InvalidCredentials`] if any value is empty.
    pub fn new(
        key: impl Into<String>,
        zone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, StreamError> {
        let (key, zone, email) = (key.into(), zone.into(), email.into());

        if key.is_empty() || zone.is_empty() || email.is_empty() {
            return Err(StreamError::InvalidCredentials);
        }

        Ok(Self { key, zone, email })
    }

    /// Read credentials from the environment.
    ///
    /// Looks up `CF_STREAM_KEY`, `CF_STREAM_ZONE`, and `CF_STREAM_EMAIL`;
    /// a missing variable fails the same way as an empty value. This is
    /// the only built-in host-configuration adapter - anything richer
    /// (config files, secret stores) belongs to the caller, which can feed
    /// [`Credentials::new`] directly.
    pub fn from_env() -> Result<Self, StreamError> {
        Self::new(
            env::var("CF_STREAM_KEY").unwrap_or_default(),
            env::var("CF_STREAM_ZONE").unwrap_or_default(),
            env::var("CF_STREAM_EMAIL").unwrap_or_default(),
        )
    }
}

/// Extract the trailing path segment of a resource URL as the video id.
///
/// The URL is otherwise opaque: no validation is performed, and the result
/// may be empty for a URL with a trailing slash.
pub(crate) fn video_id(resource_url: &str) -> &str {
    resource_url.rsplit('/').next().unwrap_or("")
}
