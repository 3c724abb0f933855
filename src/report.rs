//! Run report: per-post outcomes accumulated into a final summary.

/// Accumulates per-post outcomes for a single run.
///
/// Owned exclusively by the driver loop; rendered once at process end and
/// discarded. Every skip and failure carries a human-readable message so
/// nothing is only visible in the logs.
#[derive(Debug, Default)]
pub struct RunReport {
    attempted: usize,
    succeeded: usize,
    messages: Vec<String>,
}

impl RunReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed download.
    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    /// Records a post that resolved to a skip.
    pub fn record_skip(&mut self, message: impl Into<String>) {
        self.attempted += 1;
        self.messages.push(message.into());
    }

    /// Records a post whose transfer failed.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.attempted += 1;
        self.messages.push(message.into());
    }

    /// Number of posts processed.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of successful downloads.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// Accumulated skip and error messages, in post order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Renders the end-of-run summary.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("{} of {} files downloaded.", self.succeeded, self.attempted);
        if !self.messages.is_empty() {
            out.push_str("\n\nSummary of skips and errors:");
            for message in &self.messages {
                out.push('\n');
                out.push_str(message);
            }
        }
        out
    }
}
