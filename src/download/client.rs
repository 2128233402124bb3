//! HTTP client wrapper for downloading files.
//!
//! This module provides the `HttpClient` struct which performs one GET per
//! URL and streams the body to disk, with timeout configuration and error
//! handling.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, StatusCode, redirect};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};
use url::Url;

use super::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use super::error::DownloadError;
use super::filename::destination_path;
use super::transport::Transport;
use crate::user_agent;

/// Client-level settings applied to every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportOptions {
    /// Time allowed to establish the connection.
    pub connect_timeout: Duration,
    /// Time allowed for the whole request, body included.
    pub read_timeout: Duration,
    /// Follow 3xx responses instead of treating them as failures.
    pub follow_redirects: bool,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(READ_TIMEOUT_SECS),
            follow_redirects: false,
        }
    }
}

/// HTTP client for downloading files with streaming support.
///
/// This client is designed to be created once and reused for multiple downloads,
/// taking advantage of connection pooling.
///
/// # Example
///
/// ```no_run
/// use fusker_core::download::HttpClient;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new();
/// let path = client.download_to_file("https://example.com/img001.jpg", Path::new("./downloads")).await?;
/// println!("Downloaded to: {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with default options.
    ///
    /// Default configuration:
    /// - Connect timeout: 30 seconds
    /// - Request timeout: 5 minutes (for large files)
    /// - Redirects: not followed
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::with_options(TransportOptions::default())
            .expect("failed to build HTTP client with static configuration")
    }

    /// Creates a new HTTP client with explicit options.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error if the TLS backend or system
    /// configuration cannot be initialised.
    pub fn with_options(options: TransportOptions) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.read_timeout)
            .gzip(true)
            .user_agent(user_agent::default_download_user_agent());
        if !options.follow_redirects {
            builder = builder.redirect(redirect::Policy::none());
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Downloads `url` into `destination_dir`.
    ///
    /// The file is named after the URL's final `/`-segment and overwrites any
    /// existing file of that name. The directory must already exist.
    ///
    /// # Returns
    ///
    /// The path to the downloaded file.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if:
    /// - The URL is invalid, not http/https, or has no final segment
    /// - The request fails (network error, timeout)
    /// - The server returns any status other than 200
    /// - Reading the body or writing to disk fails
    #[must_use = "download result contains the path to the downloaded file"]
    #[instrument(skip(self, destination_dir), fields(url = %url))]
    pub async fn download_to_file(
        &self,
        url: &str,
        destination_dir: &Path,
    ) -> Result<PathBuf, DownloadError> {
        debug!("starting download");

        let parsed_url = Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;
        if !matches!(parsed_url.scheme(), "http" | "https") {
            return Err(DownloadError::unsupported_scheme(url, parsed_url.scheme()));
        }
        let file_path = destination_path(destination_dir, url)
            .ok_or_else(|| DownloadError::missing_filename(url))?;

        let response = self.send_request(parsed_url, url).await?;
        debug!(path = %file_path.display(), "resolved output path");

        let mut file = File::create(&file_path)
            .await
            .map_err(|e| DownloadError::io(file_path.clone(), e))?;

        // Stream response body to file, with cleanup on error
        let stream_result = stream_to_file(&mut file, response, url, &file_path).await;
        drop(file);

        if stream_result.is_err() {
            debug!(path = %file_path.display(), "cleaning up partial file after error");
            let _ = tokio::fs::remove_file(&file_path).await;
        }
        let bytes_written = stream_result?;

        info!(path = %file_path.display(), bytes = bytes_written, "download complete");
        Ok(file_path)
    }

    async fn send_request(
        &self,
        parsed_url: Url,
        url: &str,
    ) -> Result<reqwest::Response, DownloadError> {
        let response = self.client.get(parsed_url).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(url)
            } else {
                DownloadError::network(url, e)
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn fetch(&self, url: &str, destination_dir: &Path) -> Result<PathBuf, DownloadError> {
        self.download_to_file(url, destination_dir).await
    }
}

/// Streams response body to file, returning bytes written.
///
/// This is extracted to enable cleanup on error in the caller.
async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &str,
    file_path: &Path,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    // Once headers are in, a timeout is a body failure like any other.
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::stream(url, e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(file_path.to_path_buf(), e))?;

        bytes_written += chunk.len() as u64;
    }

    // Ensure all data is flushed to disk
    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(file_path.to_path_buf(), e))?;

    Ok(bytes_written)
}
