//! Scour Core Library
//!
//! An image scouring tool for reddit: fetches a batch of posts from a named
//! subreddit, classifies each post's attached URL, and downloads the
//! resolved image(s) into a per-feed directory, skipping anything already on
//! disk.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`feed`] - Subreddit listing client and the `FeedReader` boundary
//! - [`resolver`] - Pure URL classification and action resolution (the core)
//! - [`download`] - Streaming HTTP transfers and the album capability
//! - [`report`] - Per-run outcome accumulation and summary rendering
//! - [`runner`] - The sequential driver loop tying the above together

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod download;
pub mod feed;
pub mod report;
pub mod resolver;
pub mod runner;

// Re-export commonly used types
pub use download::{AlbumDownloader, DownloadError, HttpClient, ImgurAlbumDownloader};
pub use feed::{FeedError, FeedReader, Post, RedditFeed, SortFilter};
pub use report::RunReport;
pub use resolver::{Classification, ResolveConfig, ResolvedAction, SkipReason, classify, resolve};
pub use runner::run_batch;
