//! Error types for the feed reading boundary.

use thiserror::Error;

/// Errors that can occur while fetching a feed listing.
///
/// Any of these aborts the run before downloads begin; per-post problems are
/// handled downstream by the resolver and never surface here.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network-level error reaching the feed endpoint.
    #[error("network error fetching feed: {source}")]
    Network {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The feed endpoint answered with a non-success status.
    #[error("HTTP {status} fetching feed r/{feed}")]
    HttpStatus {
        /// Feed that was requested.
        feed: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The feed name contains characters that cannot form a listing path
    /// segment.
    #[error("invalid feed name '{feed}'")]
    InvalidFeedName {
        /// The offending name.
        feed: String,
    },

    /// The named feed does not exist (endpoint returned 404).
    #[error("unknown feed r/{feed}")]
    UnknownFeed {
        /// Feed that was requested.
        feed: String,
    },

    /// The listing payload did not match the expected shape.
    #[error("malformed listing for r/{feed}: {source}")]
    Malformed {
        /// Feed that was requested.
        feed: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl FeedError {
    /// Creates a network error from a reqwest error.
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    /// Creates an HTTP status error.
    pub fn http_status(feed: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            feed: feed.into(),
            status,
        }
    }

    /// Creates an invalid-feed-name error.
    pub fn invalid_feed_name(feed: impl Into<String>) -> Self {
        Self::InvalidFeedName { feed: feed.into() }
    }

    /// Creates an unknown-feed error.
    pub fn unknown_feed(feed: impl Into<String>) -> Self {
        Self::UnknownFeed { feed: feed.into() }
    }

    /// Creates a malformed-listing error.
    pub fn malformed(feed: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            feed: feed.into(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_http_status_display() {
        let error = FeedError::http_status("me_irl", 503);
        let msg = error.to_string();
        assert!(msg.contains("503"), "expected status in: {msg}");
        assert!(msg.contains("r/me_irl"), "expected feed in: {msg}");
    }

    #[test]
    fn test_feed_error_invalid_feed_name_display() {
        let error = FeedError::invalid_feed_name("pics/top");
        let msg = error.to_string();
        assert!(msg.contains("invalid feed name"), "expected prefix in: {msg}");
        assert!(msg.contains("pics/top"), "expected name in: {msg}");
    }

    #[test]
    fn test_feed_error_unknown_feed_display() {
        let error = FeedError::unknown_feed("no_such_sub");
        let msg = error.to_string();
        assert!(msg.contains("unknown feed"), "expected prefix in: {msg}");
        assert!(msg.contains("r/no_such_sub"), "expected feed in: {msg}");
    }

    #[test]
    fn test_feed_error_malformed_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = FeedError::malformed("pics", source);
        let msg = error.to_string();
        assert!(msg.contains("malformed listing"), "expected prefix in: {msg}");
        assert!(msg.contains("r/pics"), "expected feed in: {msg}");
    }
}
