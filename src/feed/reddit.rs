//! Reddit listing client backed by the public JSON endpoint.
//!
//! One unauthenticated GET per run:
//! `{base}/r/{feed}/{sort}.json?limit={n}`. The `top` sort adds `t=day`,
//! matching the tool's historical "top of the day" behavior.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::error::FeedError;
use super::{FeedReader, Post, SortFilter};

/// Connect timeout for listing requests.
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Read timeout for listing requests; payloads are small.
const READ_TIMEOUT_SECS: u64 = 60;

/// User-Agent sent with listing requests. Reddit rejects clients with a
/// blank or generic one.
const FEED_USER_AGENT: &str = concat!("scour/", env!("CARGO_PKG_VERSION"));

/// Feed reader for Reddit's public JSON listings.
#[derive(Debug, Clone)]
pub struct RedditFeed {
    client: Client,
    base_url: String,
}

impl RedditFeed {
    /// Creates a client against the production endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url("https://www.reddit.com")
    }

    /// Creates a client against an explicit base URL (used by tests to
    /// point at a local mock server).
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(FEED_USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl Default for RedditFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedReader for RedditFeed {
    #[instrument(skip(self), fields(filter = %filter))]
    async fn fetch(
        &self,
        feed: &str,
        filter: SortFilter,
        limit: u32,
    ) -> Result<Vec<Post>, FeedError> {
        if !is_valid_feed_name(feed) {
            return Err(FeedError::invalid_feed_name(feed));
        }
        let mut url = format!(
            "{}/r/{}/{}.json?limit={}&raw_json=1",
            self.base_url,
            feed,
            filter.api_segment(),
            limit
        );
        if filter == SortFilter::Top {
            url.push_str("&t=day");
        }
        debug!(url = %url, "fetching listing");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FeedError::network)?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(FeedError::unknown_feed(feed));
        }
        if !response.status().is_success() {
            return Err(FeedError::http_status(feed, status));
        }

        let body = response.text().await.map_err(FeedError::network)?;
        let listing: Listing =
            serde_json::from_str(&body).map_err(|e| FeedError::malformed(feed, e))?;

        let posts: Vec<Post> = listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.into_post())
            .collect();
        debug!(posts = posts.len(), "listing fetched");
        Ok(posts)
    }
}

/// Returns true if `feed` is a single safe path segment.
///
/// Subreddit names are ASCII alphanumerics, underscores, and hyphens; the
/// name is interpolated into the listing URL, so anything else (slashes,
/// query metacharacters, whitespace) would change the request shape.
fn is_valid_feed_name(feed: &str) -> bool {
    !feed.is_empty()
        && feed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: RawPost,
}

/// The subset of reddit's submission payload the tool cares about.
#[derive(Debug, Deserialize)]
struct RawPost {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    permalink: String,
    #[serde(default)]
    over_18: bool,
}

impl RawPost {
    fn into_post(self) -> Post {
        Post {
            url: self.url,
            title: self.title,
            permalink: self.permalink,
            is_nsfw: self.over_18,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE_LISTING: &str = r#"{
        "kind": "Listing",
        "data": {
            "children": [
                {
                    "kind": "t3",
                    "data": {
                        "url": "https://i.redd.it/abc123.png",
                        "title": "a cat",
                        "permalink": "/r/pics/comments/x/a_cat/",
                        "over_18": false,
                        "score": 1234
                    }
                },
                {
                    "kind": "t3",
                    "data": {
                        "url": "https://imgur.com/a/xyz789",
                        "title": "an album",
                        "permalink": "/r/pics/comments/y/an_album/",
                        "over_18": true
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn test_listing_deserializes_posts_in_order() {
        let listing: Listing = serde_json::from_str(SAMPLE_LISTING).unwrap();
        let posts: Vec<Post> = listing
            .data
            .children
            .into_iter()
            .map(|c| c.data.into_post())
            .collect();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].url, "https://i.redd.it/abc123.png");
        assert_eq!(posts[0].title, "a cat");
        assert!(!posts[0].is_nsfw);
        assert_eq!(posts[1].url, "https://imgur.com/a/xyz789");
        assert!(posts[1].is_nsfw);
    }

    #[test]
    fn test_listing_tolerates_missing_optional_fields() {
        let raw = r#"{"data": {"children": [{"data": {"title": "no url"}}]}}"#;
        let listing: Listing = serde_json::from_str(raw).unwrap();
        let post = listing.data.children.into_iter().next().unwrap().data.into_post();
        assert_eq!(post.url, "");
        assert!(!post.is_nsfw);
    }

    #[test]
    fn test_listing_tolerates_empty_children() {
        let raw = r#"{"data": {}}"#;
        let listing: Listing = serde_json::from_str(raw).unwrap();
        assert!(listing.data.children.is_empty());
    }

    #[test]
    fn test_feed_name_validation() {
        assert!(is_valid_feed_name("me_irl"));
        assert!(is_valid_feed_name("EarthPorn"));
        assert!(is_valid_feed_name("a-b"));
        assert!(!is_valid_feed_name(""));
        assert!(!is_valid_feed_name("pics/top"));
        assert!(!is_valid_feed_name("pics?limit=1"));
        assert!(!is_valid_feed_name("two words"));
        assert!(!is_valid_feed_name("../etc"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_unsafe_feed_name_before_any_request() {
        // Unroutable base: a request would fail with a network error, so an
        // InvalidFeedName result proves the name was rejected up front.
        let feed = RedditFeed::with_base_url("http://127.0.0.1:1");
        let result = feed.fetch("pics/../top", SortFilter::Top, 5).await;
        match result {
            Err(FeedError::InvalidFeedName { feed }) => assert_eq!(feed, "pics/../top"),
            other => panic!("expected InvalidFeedName, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_failure_is_network_error() {
        let feed = RedditFeed::with_base_url("http://127.0.0.1:1");
        let result = feed.fetch("pics", SortFilter::Top, 5).await;
        assert!(matches!(result, Err(FeedError::Network { .. })));
    }
}
