//! HTTP client wrapper for streaming image downloads.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};
use url::Url;

use super::constants::{CONNECT_TIMEOUT_SECS, DOWNLOAD_USER_AGENT, READ_TIMEOUT_SECS};
use super::error::DownloadError;

/// HTTP client for downloading files with streaming support.
///
/// Created once and reused across the whole batch to benefit from
/// connection pooling.
///
/// # Example
///
/// ```no_run
/// use scour::download::HttpClient;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new();
/// let bytes = client
///     .download_to_path("https://i.redd.it/abc123.png", Path::new("./pics/abc123.png"))
///     .await?;
/// println!("wrote {bytes} bytes");
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
    /// Creates a new HTTP client with default timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(DOWNLOAD_USER_AGENT)
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Downloads `url` to exactly `dest_path`, creating parent directories
    /// as needed, and returns the number of bytes written.
    ///
    /// The destination is chosen by the resolver, never derived from
    /// response headers. On a failed transfer the partial file is removed so
    /// a later run's existence check cannot mistake it for a complete
    /// download.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if the URL is invalid, the request fails
    /// (network error, timeout), the server returns an error status, or
    /// writing to disk fails.
    #[instrument(skip(self), fields(url = %url, dest = %dest_path.display()))]
    pub async fn download_to_path(
        &self,
        url: &str,
        dest_path: &Path,
    ) -> Result<u64, DownloadError> {
        debug!("starting download");

        Url::parse(url).map_err(|_| DownloadError::invalid_url(url.to_string()))?;

        if let Some(parent) = dest_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::io(parent.to_path_buf(), e))?;
        }

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(url)
            } else {
                DownloadError::network(url, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        let mut file = File::create(dest_path)
            .await
            .map_err(|e| DownloadError::io(dest_path.to_path_buf(), e))?;

        let stream_result = stream_to_file(&mut file, response, url, dest_path).await;
        if stream_result.is_err() {
            debug!(path = %dest_path.display(), "cleaning up partial file after error");
            let _ = tokio::fs::remove_file(dest_path).await;
        }
        let bytes_written = stream_result?;

        info!(path = %dest_path.display(), bytes = bytes_written, "download complete");
        Ok(bytes_written)
    }

    /// Returns a reference to the underlying reqwest client.
    ///
    /// Used by the album capability to fetch album pages with the same
    /// pooled connections and timeouts.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Streams response body to file, returning bytes written.
///
/// Extracted so the caller can clean up the partial file on error.
async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &str,
    dest_path: &Path,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::network(url, e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(dest_path.to_path_buf(), e))?;

        bytes_written += chunk.len() as u64;
    }

    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(dest_path.to_path_buf(), e))?;

    Ok(bytes_written)
}
