//! Download execution: streaming fetch-to-path and the album capability.
//!
//! This module performs the byte transfer the resolver decided on. It knows
//! nothing about classification; it is handed a source URL and a destination
//! path and either produces the file or a structured error.
//!
//! # Features
//!
//! - Streaming downloads (memory-efficient, no full-body buffering)
//! - Partial-file cleanup when a transfer fails midway
//! - Configurable timeouts (30s connect, 5min read by default)
//! - An optional album capability behind the [`AlbumDownloader`] trait

mod album;
mod client;
mod constants;
mod error;

pub use album::{AlbumDownloader, ImgurAlbumDownloader};
pub use client::HttpClient;
pub use constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
pub use error::DownloadError;
