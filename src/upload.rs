//! Account-scoped video upload.

use crate::client::Client;
use crate::error::StreamError;
use crate::video::{
    HEADER_CONTENT_LENGTH, HEADER_CONTENT_TYPE, HEADER_TUS_RESUMABLE, HEADER_UPLOAD_OFFSET,
};
use bytes::Bytes;
use std::path::Path;
use tracing::{debug, warn};

/// Media type for upload bodies.
const CONTENT_TYPE_UPLOAD: &str = "application/offset+octet-stream";

/// Protocol version marker sent with every upload.
const TUS_VERSION: &str = "1.0.0";

/// Response from an upload operation.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct UploadResponse {
    /// Resource URL of the created video, from the `Location` header.
    ///
    /// Pass this to [`Client::video`](crate::Client::video) to manage the
    /// uploaded video.
    pub location: Option<String>,
}

impl Client {
    /// Upload a video file to the account's Stream library.
    ///
    /// The whole file is read into memory and sent as a single request with
    /// `Upload-Offset: 0`; the tus header marks the protocol version, not a
    /// resumable transfer.
    ///
    /// Fails with [`StreamError::InvalidFile`] before any request is issued
    /// if the file cannot be read, and with
    /// [`StreamError::OperationFailed`] if the API answers anything other
    /// than 204.
    pub async fn upload(&self, filepath: impl AsRef<Path>) -> Result<UploadResponse, StreamError> {
        let filepath = filepath.as_ref();

        let data = tokio::fs::read(filepath)
            .await
            .map_err(|e| StreamError::InvalidFile {
                path: filepath.display().to_string(),
                source: e,
            })?;
        let data = Bytes::from(data);
        let len = data.len();

        let url = self.copy_endpoint();
        debug!("POST {} ({} bytes)", url, len);

        let resp = self
            .with_auth(self.inner.post(&url))
            .header(HEADER_CONTENT_LENGTH, len.to_string())
            .header(HEADER_CONTENT_TYPE, CONTENT_TYPE_UPLOAD)
            .header(HEADER_TUS_RESUMABLE, TUS_VERSION)
            .header(HEADER_UPLOAD_OFFSET, "0")
            .body(data)
            .send()
            .await?;

        let status = resp.status().as_u16();
        match status {
            204 => {
                let location = resp
                    .headers()
                    .get(reqwest::header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.to_string());

                Ok(UploadResponse { location })
            }
            _ => {
                warn!("POST {} returned {}", url, status);
                Err(StreamError::unexpected_status(status, &url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::StreamError;
    use crate::video::{
        HEADER_AUTH_EMAIL, HEADER_AUTH_KEY, HEADER_TUS_RESUMABLE, HEADER_UPLOAD_OFFSET,
    };
    use crate::{Client, Credentials};
    use std::io::Write;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "test-key";
    const ZONE: &str = "test-zone";
    const EMAIL: &str = "user@example.com";

    fn client_for(server: &MockServer) -> Client {
        Client::builder()
            .credentials(Credentials::new(KEY, ZONE, EMAIL).unwrap())
            .api_base(server.uri())
            .build()
            .unwrap()
    }

    fn video_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_upload_missing_file_fails_before_any_request() {
        // No mock server is running: an issued request would surface as a
        // network error, not InvalidFile.
        let client = Client::new(KEY, ZONE, EMAIL).unwrap();
        match client.upload("/nonexistent/clip.mp4").await {
            Err(StreamError::InvalidFile { path, .. }) => {
                assert_eq!(path, "/nonexistent/clip.mp4")
            }
            _ => panic!("Expected InvalidFile"),
        }
    }

    #[tokio::test]
    async fn test_upload_sends_file_bytes_with_tus_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/client/v4/accounts/test-zone/stream/copy"))
            .and(header(HEADER_AUTH_KEY, KEY))
            .and(header(HEADER_AUTH_EMAIL, EMAIL))
            .and(header("Content-Type", "application/offset+octet-stream"))
            .and(header(HEADER_TUS_RESUMABLE, "1.0.0"))
            .and(header(HEADER_UPLOAD_OFFSET, "0"))
            .and(body_string("fake mp4 bytes"))
            .respond_with(ResponseTemplate::new(204).insert_header(
                "Location",
                "https://api.cloudflare.com/client/v4/accounts/test-zone/stream/abc123",
            ))
            .mount(&server)
            .await;

        let file = video_file(b"fake mp4 bytes");
        let resp = client_for(&server).upload(file.path()).await.unwrap();
        assert_eq!(
            resp.location.as_deref(),
            Some("https://api.cloudflare.com/client/v4/accounts/test-zone/stream/abc123")
        );
    }

    #[tokio::test]
    async fn test_upload_fails_on_400() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let file = video_file(b"fake mp4 bytes");
        match client_for(&server).upload(file.path()).await {
            Err(StreamError::OperationFailed { status, .. }) => assert_eq!(status, 400),
            _ => panic!("Expected OperationFailed"),
        }
    }

    #[tokio::test]
    async fn test_upload_fails_on_500() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let file = video_file(b"fake mp4 bytes");
        match client_for(&server).upload(file.path()).await {
            Err(StreamError::OperationFailed { status, .. }) => assert_eq!(status, 500),
            _ => panic!("Expected OperationFailed"),
        }
    }
}
