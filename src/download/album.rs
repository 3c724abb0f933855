//! Album capability: multi-image downloads delegated behind a trait.
//!
//! The resolver only knows whether *an* album capability is available; the
//! driver holds it as a trait object so the run degrades to a skip (never a
//! crash) when it is absent or disabled.

use std::path::Path;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info, instrument};

use super::client::HttpClient;
use super::error::DownloadError;

/// Matches `i.imgur.com/<id>.<ext>` asset references inside an album page.
#[allow(clippy::expect_used)]
static ALBUM_IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)i\.imgur\.com/([A-Za-z0-9]+\.(?:jpe?g|png|gif))")
        .expect("album image regex is valid") // Static pattern, safe to panic
});

/// Downloads every image of an album landing page into a directory.
///
/// # Object Safety
///
/// Uses `async_trait` so the driver can hold an `Option<&dyn
/// AlbumDownloader>`; Rust 2024 native async traits are not object-safe.
#[async_trait]
pub trait AlbumDownloader: Send + Sync {
    /// Downloads all images of `album_url` into `dest_dir`, creating the
    /// directory if needed, and returns how many images were written.
    async fn download_album(&self, album_url: &str, dest_dir: &Path)
    -> Result<usize, DownloadError>;
}

/// Album capability for imgur albums.
///
/// Fetches the album landing page and scrapes direct image references out
/// of the HTML. No imgur API credentials are involved, matching the rest of
/// the tool's unauthenticated operation.
#[derive(Debug, Clone)]
pub struct ImgurAlbumDownloader {
    client: HttpClient,
}

impl ImgurAlbumDownloader {
    /// Creates an album downloader sharing the given HTTP client.
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AlbumDownloader for ImgurAlbumDownloader {
    #[instrument(skip(self), fields(url = %album_url, dest = %dest_dir.display()))]
    async fn download_album(
        &self,
        album_url: &str,
        dest_dir: &Path,
    ) -> Result<usize, DownloadError> {
        debug!("fetching album page");
        let response = self
            .client
            .inner()
            .get(album_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DownloadError::timeout(album_url)
                } else {
                    DownloadError::network(album_url, e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(album_url, status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| DownloadError::network(album_url, e))?;

        let images = extract_album_images(&html);
        if images.is_empty() {
            return Err(DownloadError::empty_album(album_url));
        }
        debug!(images = images.len(), "album page scraped");

        tokio::fs::create_dir_all(dest_dir)
            .await
            .map_err(|e| DownloadError::io(dest_dir.to_path_buf(), e))?;

        for name in &images {
            let source = format!("https://i.imgur.com/{name}");
            self.client
                .download_to_path(&source, &dest_dir.join(name))
                .await?;
        }

        info!(images = images.len(), "album download complete");
        Ok(images.len())
    }
}

/// Extracts unique image filenames from album page HTML, in page order.
fn extract_album_images(html: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut images = Vec::new();
    for captures in ALBUM_IMAGE_PATTERN.captures_iter(html) {
        if let Some(name) = captures.get(1) {
            let name = name.as_str().to_string();
            if seen.insert(name.clone()) {
                images.push(name);
            }
        }
    }
    images
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_album_images_finds_assets_in_order() {
        let html = r#"
            <img src="//i.imgur.com/first.jpg" />
            <a href="https://i.imgur.com/second.png">second</a>
            <img src="//i.imgur.com/third.gif" />
        "#;
        assert_eq!(
            extract_album_images(html),
            vec!["first.jpg", "second.png", "third.gif"]
        );
    }

    #[test]
    fn test_extract_album_images_deduplicates() {
        let html = r#"
            <img src="//i.imgur.com/same.jpg" />
            <img src="https://i.imgur.com/same.jpg" />
        "#;
        assert_eq!(extract_album_images(html), vec!["same.jpg"]);
    }

    #[test]
    fn test_extract_album_images_accepts_jpeg_and_case_variants() {
        let html = r"i.imgur.com/a.jpeg i.IMGUR.com/b.PNG";
        assert_eq!(extract_album_images(html), vec!["a.jpeg", "b.PNG"]);
    }

    #[test]
    fn test_extract_album_images_ignores_non_image_links() {
        let html = r#"<a href="https://imgur.com/a/xyz">album</a> <script src="/app.js"></script>"#;
        assert!(extract_album_images(html).is_empty());
    }
}
