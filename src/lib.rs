//! Cloudflare Stream Rust Client
//!
//! A Rust client library for the Cloudflare Stream video API - upload video
//! files, query processing status, delete videos, fetch embed codes, and
//! restrict playback origins.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cfstream::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("api-key", "zone-id", "user@example.com")?;
//!
//!     // Upload a video; the Location header is its resource URL
//!     let uploaded = client.upload("clip.mp4").await?;
//!     let resource_url = uploaded.location.expect("Location header");
//!
//!     // Operate on the video through a handle
//!     let video = client.video(&resource_url);
//!     let status = video.status().await?;
//!     println!("{status}");
//!
//!     video.allow("example.com").await?;
//!     let embed = video.embed_code().await?;
//!     println!("{embed}");
//!
//!     video.delete().await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod upload;
mod video;

pub use client::{Client, ClientBuilder};
pub use error::StreamError;
pub use types::Credentials;
pub use upload::UploadResponse;
pub use video::Video;
