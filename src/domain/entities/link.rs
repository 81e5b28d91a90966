//! Link record entity representing a short-code-to-URL mapping.

use chrono::{DateTime, Utc};

/// One mapping from a short code to a target URL, with visit tracking.
///
/// `code` and `url` are immutable after creation; only `clicks` and
/// `last_clicked` change, and only through [`LinkRecord::record_visit`].
#[derive(Debug, Clone)]
pub struct LinkRecord {
    pub code: String,
    pub url: String,
    pub clicks: u64,
    /// `None` until the link has been visited at least once.
    pub last_clicked: Option<DateTime<Utc>>,
}

impl LinkRecord {
    /// Creates an unvisited record.
    ///
    /// Callers are expected to pass already-trimmed, non-empty values;
    /// [`crate::domain::registry::LinkRegistry::add`] enforces that.
    pub fn new(code: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            url: url.into(),
            clicks: 0,
            last_clicked: None,
        }
    }

    /// Registers one visit: bumps the click counter and stamps the time.
    pub fn record_visit(&mut self) {
        self.clicks += 1;
        self.last_clicked = Some(Utc::now());
    }

    /// Returns true if the link has never been visited.
    pub fn is_unvisited(&self) -> bool {
        self.last_clicked.is_none()
    }
}
