//! Constants for the download module (timeouts, client identity).

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP read timeout (5 minutes, images can be large on slow links).
pub const READ_TIMEOUT_SECS: u64 = 300;

/// User-Agent sent with download requests.
pub(crate) const DOWNLOAD_USER_AGENT: &str = concat!("scour/", env!("CARGO_PKG_VERSION"));
