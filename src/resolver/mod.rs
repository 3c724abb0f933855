//! URL classification and resolution engine.
//!
//! This module is the decision core of the tool: it turns a submission's raw
//! URL into a concrete, idempotent download action. It is deliberately split
//! into two pure functions:
//!
//! - [`classify`] - decides *what kind of URL this is* from `(host, path)`
//!   alone, with no filesystem or network access
//! - [`resolve`] - maps a classification plus configuration and an injected
//!   existence check onto *what should happen* (a [`ResolvedAction`])
//!
//! Keeping the two apart means classification can be tested exhaustively
//! without touching disk, and the skip-vs-fetch decision can be tested with a
//! plain closure standing in for the filesystem.
//!
//! # Example
//!
//! ```
//! use scour::feed::Post;
//! use scour::resolver::{ResolveConfig, ResolvedAction, resolve};
//!
//! let post = Post {
//!     url: "https://i.redd.it/abc123.png".to_string(),
//!     title: "cat".to_string(),
//!     permalink: "/r/pics/comments/x/cat/".to_string(),
//!     is_nsfw: false,
//! };
//! let config = ResolveConfig::new("pics");
//! let action = resolve(&post, &config, |_| false);
//! assert!(matches!(action, ResolvedAction::FetchDirect { .. }));
//! ```

mod classify;
mod resolve;

pub use classify::{
    ALBUM_PATH_PREFIX, Classification, DIRECT_IMAGE_HOST, INDIRECT_IMAGE_HOST, SINGLE_IMAGE_HOST,
    classify, has_image_extension,
};
pub use resolve::{ResolveConfig, ResolvedAction, SkipReason, resolve, url_basename};
