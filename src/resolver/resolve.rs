//! Resolution from classification to a concrete download action.
//!
//! [`resolve`] owns the skip-vs-fetch decision. Filesystem state enters only
//! through the injected `file_exists` predicate, so the function itself
//! performs no I/O and never fails: every degenerate input degrades to a
//! [`ResolvedAction::Skip`] with an explanatory [`SkipReason`].

use std::path::{Path, PathBuf};

use url::Url;

use crate::feed::Post;

use super::classify::{Classification, INDIRECT_IMAGE_HOST, classify};

/// Immutable configuration threaded through resolution.
///
/// These were ambient global flags in earlier incarnations of the tool; they
/// are an explicit value here so two resolutions with the same config and
/// post are guaranteed to agree.
#[derive(Debug, Clone)]
pub struct ResolveConfig {
    /// Per-feed directory that all destinations are computed under.
    pub dest_dir: PathBuf,
    /// Re-download files and albums that already exist on disk.
    pub overwrite: bool,
    /// Download posts tagged NSFW. When false the safety gate wins over
    /// every other rule.
    pub allow_nsfw: bool,
    /// Whether an album capability is wired in and enabled.
    pub albums_available: bool,
}

impl ResolveConfig {
    /// Creates a config with the default gates: no overwrite, NSFW allowed,
    /// albums available.
    #[must_use]
    pub fn new(dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            dest_dir: dest_dir.into(),
            overwrite: false,
            allow_nsfw: true,
            albums_available: true,
        }
    }
}

/// Why a post was skipped instead of fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Post is tagged NSFW and NSFW downloads are disabled.
    NsfwFiltered,
    /// The post URL could not be decomposed into host and path.
    UnparseableUrl,
    /// The URL is an album but no album capability is available.
    AlbumUnavailable,
    /// The album directory already exists and overwrite is off. Contents are
    /// never verified individually, so a partial album looks complete.
    AlbumAlreadyDownloaded,
    /// The destination file already exists and overwrite is off.
    AlreadyDownloaded,
    /// No recognized image source could be derived from the URL.
    UnsupportedUrl,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::NsfwFiltered => "nsfw filtered",
            Self::UnparseableUrl => "unparseable url",
            Self::AlbumUnavailable => "album support unavailable",
            Self::AlbumAlreadyDownloaded => "album already downloaded",
            Self::AlreadyDownloaded => "already downloaded",
            Self::UnsupportedUrl => "unsupported url: no recognized image extension",
        };
        f.write_str(text)
    }
}

/// The concrete action the driver should take for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAction {
    /// Nothing to transfer; the reason is reported in the run summary.
    Skip(SkipReason),
    /// Fetch the post URL as-is into `dest_path`.
    FetchDirect {
        /// URL whose path already names the image bytes.
        source_url: String,
        /// Destination file under the feed directory.
        dest_path: PathBuf,
    },
    /// Fetch a rewritten URL derived from an indirect landing page.
    ///
    /// The rewrite appends `.jpg` by naming convention; the true asset may
    /// be a png or gif. That mismatch is accepted, documented behavior.
    FetchRewritten {
        /// Rewritten URL on the image subdomain.
        source_url: String,
        /// Destination file under the feed directory.
        dest_path: PathBuf,
    },
    /// Hand the album URL to the album capability.
    DelegateAlbum {
        /// The album landing page URL, passed through unchanged.
        album_url: String,
        /// Directory the album contents should land in.
        dest_dir: PathBuf,
    },
}

/// Resolves one post into a download action.
///
/// Decision order is fixed: the NSFW gate runs before any URL inspection,
/// URL parsing before classification, and the existence check only ever
/// turns a fetch into a skip, never the other way around.
///
/// `file_exists` is the only window onto filesystem state; pass
/// `|p| p.exists()` in production and a closure over a set in tests.
pub fn resolve<F>(post: &Post, config: &ResolveConfig, file_exists: F) -> ResolvedAction
where
    F: Fn(&Path) -> bool,
{
    if post.is_nsfw && !config.allow_nsfw {
        return ResolvedAction::Skip(SkipReason::NsfwFiltered);
    }

    let Ok(parsed) = Url::parse(&post.url) else {
        return ResolvedAction::Skip(SkipReason::UnparseableUrl);
    };
    let Some(host) = parsed.host_str() else {
        return ResolvedAction::Skip(SkipReason::UnparseableUrl);
    };
    let path = parsed.path();

    match classify(host, path) {
        Classification::AlbumPath => {
            if !config.albums_available {
                return ResolvedAction::Skip(SkipReason::AlbumUnavailable);
            }
            let name = url_basename(path);
            if name.is_empty() {
                return ResolvedAction::Skip(SkipReason::UnsupportedUrl);
            }
            let dest_dir = config.dest_dir.join(name);
            if !config.overwrite && file_exists(&dest_dir) {
                return ResolvedAction::Skip(SkipReason::AlbumAlreadyDownloaded);
            }
            ResolvedAction::DelegateAlbum {
                album_url: post.url.clone(),
                dest_dir,
            }
        }
        Classification::DirectHost
        | Classification::SingleImageHost
        | Classification::UnknownWithImageExtension => {
            let name = url_basename(path);
            if name.is_empty() {
                return ResolvedAction::Skip(SkipReason::UnsupportedUrl);
            }
            let dest_path = config.dest_dir.join(name);
            if !config.overwrite && file_exists(&dest_path) {
                return ResolvedAction::Skip(SkipReason::AlreadyDownloaded);
            }
            ResolvedAction::FetchDirect {
                source_url: post.url.clone(),
                dest_path,
            }
        }
        Classification::IndirectImageHost => {
            // The full path is preserved (not just the basename) so any
            // subpath structure survives under the feed directory.
            let relative = path.trim_start_matches('/');
            if relative.is_empty() {
                return ResolvedAction::Skip(SkipReason::UnsupportedUrl);
            }
            let dest_path = config.dest_dir.join(format!("{relative}.jpg"));
            if !config.overwrite && file_exists(&dest_path) {
                return ResolvedAction::Skip(SkipReason::AlreadyDownloaded);
            }
            let source_url = format!(
                "{}://i.{}{}.jpg",
                parsed.scheme(),
                INDIRECT_IMAGE_HOST,
                path
            );
            ResolvedAction::FetchRewritten {
                source_url,
                dest_path,
            }
        }
        Classification::Unsupported => ResolvedAction::Skip(SkipReason::UnsupportedUrl),
    }
}

/// Returns the final segment of a URL path, or `""` when the path ends in a
/// separator.
#[must_use]
pub fn url_basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}
