//! Video resource handle and operations.

use crate::client::Client;
use crate::error::StreamError;
use crate::types::video_id;
use serde::Serialize;
use tracing::{debug, warn};

/// Protocol header names
pub(crate) const HEADER_AUTH_KEY: &str = "X-Auth-Key";
pub(crate) const HEADER_AUTH_EMAIL: &str = "X-Auth-Email";
pub(crate) const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub(crate) const HEADER_CONTENT_LENGTH: &str = "Content-Length";

/// Upload protocol headers
pub(crate) const HEADER_TUS_RESUMABLE: &str = "Tus-Resumable";
pub(crate) const HEADER_UPLOAD_OFFSET: &str = "Upload-Offset";

/// Media type for JSON-returning calls.
pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";

/// A handle to a video resource on Cloudflare Stream.
///
/// This is a lightweight, cloneable object - not a persistent connection.
/// Operations make HTTP requests on demand against the resource URL the
/// handle was created with.
#[derive(Clone, Debug)]
pub struct Video {
    pub(crate) url: String,
    pub(crate) client: Client,
}

/// Request body for [`Video::allow`].
#[derive(Serialize)]
struct AllowBody<'a> {
    uid: &'a str,
    #[serde(rename = "allowedOrigins")]
    allowed_origins: [&'a str; 1],
}

impl Video {
    /// Get the video resource URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the processing status of the video.
    ///
    /// Returns the decoded JSON body for **any** HTTP status: the Stream
    /// API reports application errors inside the response envelope, so
    /// callers must inspect the body's own `success` field. Only transport
    /// failures and undecodable bodies are errors.
    pub async fn status(&self) -> Result<serde_json::Value, StreamError> {
        debug!("GET {}", self.url);

        let resp = self
            .client
            .with_auth(self.client.inner.get(&self.url))
            .header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
            .send()
            .await?;

        let body = resp.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// Delete the video.
    pub async fn delete(&self) -> Result<(), StreamError> {
        debug!("DELETE {}", self.url);

        let resp = self
            .client
            .with_auth(self.client.inner.delete(&self.url))
            .header(HEADER_CONTENT_LENGTH, "0")
            .send()
            .await?;

        let status = resp.status().as_u16();
        match status {
            204 => Ok(()),
            _ => {
                warn!("DELETE {} returned {}", self.url, status);
                Err(StreamError::unexpected_status(status, &self.url))
            }
        }
    }

    /// Fetch the embed code for the video.
    ///
    /// Returns the raw body of `{url}/embed`.
    pub async fn embed_code(&self) -> Result<String, StreamError> {
        let url = format!("{}/embed", self.url);
        debug!("GET {}", url);

        let resp = self
            .client
            .with_auth(self.client.inner.get(&url))
            .header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
            .send()
            .await?;

        let status = resp.status().as_u16();
        match status {
            200 => Ok(resp.text().await?),
            _ => {
                warn!("GET {} returned {}", url, status);
                Err(StreamError::unexpected_status(status, &url))
            }
        }
    }

    /// Restrict playback of the video to an allowed origin.
    ///
    /// `origins` is a hostname, not a URL: any value containing `/` is
    /// rejected with [`StreamError::InvalidOrigins`] before a request is
    /// issued. The value is sent verbatim as the single element of the
    /// `allowedOrigins` array, keyed by the trailing path segment of the
    /// resource URL.
    pub async fn allow(&self, origins: &str) -> Result<(), StreamError> {
        if origins.contains('/') {
            return Err(StreamError::InvalidOrigins {
                origins: origins.to_string(),
            });
        }

        // Serialized up front: this request carries no Content-Type header.
        let body = serde_json::to_string(&AllowBody {
            uid: video_id(&self.url),
            allowed_origins: [origins],
        })?;

        debug!("POST {}", self.url);

        let resp = self
            .client
            .with_auth(self.client.inner.post(&self.url))
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        match status {
            200 => Ok(()),
            _ => {
                warn!("POST {} returned {}", self.url, status);
                Err(StreamError::unexpected_status(status, &self.url))
            }
        }
    }
}
