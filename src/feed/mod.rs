//! Feed reading boundary: subreddit listings as ordered batches of posts.
//!
//! The driver only depends on the [`FeedReader`] trait, so tests can supply
//! a canned batch of posts without any network. The production
//! implementation is [`RedditFeed`], which talks to Reddit's public JSON
//! listing endpoint.

mod error;
mod reddit;

pub use error::FeedError;
pub use reddit::RedditFeed;

use std::str::FromStr;

use async_trait::async_trait;

/// One feed entry carrying the attached URL the resolver will classify.
///
/// Immutable once produced; consumed exactly once by the driver loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// External URL believed to reference an image.
    pub url: String,
    /// Post title, used for per-post console output.
    pub title: String,
    /// Reddit permalink, logged for traceability.
    pub permalink: String,
    /// Content-safety flag (reddit `over_18`).
    pub is_nsfw: bool,
}

/// Listing sort order accepted by the feed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortFilter {
    /// Currently trending posts.
    Hot,
    /// Top-rated posts of the day.
    #[default]
    Top,
    /// Most recent posts.
    New,
    /// Most disputed posts.
    Controversial,
}

impl SortFilter {
    /// The path segment the listing endpoint expects for this sort.
    #[must_use]
    pub fn api_segment(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Top => "top",
            Self::New => "new",
            Self::Controversial => "controversial",
        }
    }
}

impl std::fmt::Display for SortFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_segment())
    }
}

impl FromStr for SortFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hot" => Ok(Self::Hot),
            "top" => Ok(Self::Top),
            "new" => Ok(Self::New),
            "controversial" => Ok(Self::Controversial),
            other => Err(format!(
                "unknown filter '{other}' (expected hot, top, new, or controversial)"
            )),
        }
    }
}

/// Produces an ordered, finite batch of posts for a named feed.
///
/// Implementations must not mutate their inputs. Failure here is fatal to
/// the run; it is surfaced to the caller, never swallowed.
///
/// # Object Safety
///
/// Uses `async_trait` so the driver can hold a `&dyn FeedReader`; Rust 2024
/// native async traits are not object-safe.
#[async_trait]
pub trait FeedReader: Send + Sync {
    /// Fetches up to `limit` posts from `feed` under the given sort order.
    async fn fetch(
        &self,
        feed: &str,
        filter: SortFilter,
        limit: u32,
    ) -> Result<Vec<Post>, FeedError>;
}
