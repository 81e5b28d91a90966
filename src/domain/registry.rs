//! In-memory registry of link records for the running session.

use thiserror::Error;

use crate::domain::entities::LinkRecord;

/// Why an [`LinkRegistry::add`] call was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddLinkError {
    #[error("short code must not be empty")]
    EmptyCode,
    #[error("target url must not be empty")]
    EmptyUrl,
    #[error("short code `{0}` is already taken")]
    DuplicateCode(String),
}

/// Ordered collection of [`LinkRecord`]s, newest-first by insertion.
///
/// Invariant: no two records have codes equal under case-insensitive
/// comparison. The registry is created empty at startup, mutated only
/// through [`add`](Self::add), [`remove`](Self::remove), and
/// [`record_visit`](Self::record_visit), and discarded with the process;
/// nothing is persisted.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    records: Vec<LinkRecord>,
}

impl LinkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new mapping at the front of the sequence.
    ///
    /// Both inputs are trimmed before use. The call is rejected when either
    /// trimmed value is empty, or when a record with the same code already
    /// exists under case-insensitive comparison. Target URLs are free-form
    /// and deliberately not deduplicated; several codes may point at the
    /// same destination.
    ///
    /// # Errors
    ///
    /// Returns [`AddLinkError`] describing the rejection. The registry is
    /// left unchanged on any error.
    pub fn add(&mut self, code: &str, url: &str) -> Result<&LinkRecord, AddLinkError> {
        let code = code.trim();
        let url = url.trim();

        if code.is_empty() {
            return Err(AddLinkError::EmptyCode);
        }
        if url.is_empty() {
            return Err(AddLinkError::EmptyUrl);
        }

        let lowered = code.to_lowercase();
        if self
            .records
            .iter()
            .any(|r| r.code.to_lowercase() == lowered)
        {
            return Err(AddLinkError::DuplicateCode(code.to_string()));
        }

        self.records.insert(0, LinkRecord::new(code, url));
        Ok(&self.records[0])
    }

    /// Removes the record whose code exactly matches `code`.
    ///
    /// Codes are controlled at creation time, so lookup here is exact, not
    /// case-insensitive. Returns whether a record was removed.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.code != code);
        self.records.len() < before
    }

    /// Records a visit on the record whose code exactly matches `code`.
    ///
    /// Increments the click counter and stamps `last_clicked` with the
    /// current time. The navigation side effect belongs to the caller; the
    /// counter update happens here whether or not navigation succeeds.
    /// Returns the updated record, or `None` when the code is unknown.
    pub fn record_visit(&mut self, code: &str) -> Option<&LinkRecord> {
        let record = self.records.iter_mut().find(|r| r.code == code)?;
        record.record_visit();
        Some(&*record)
    }

    /// Returns records matching `query`, preserving registry order.
    ///
    /// The query is trimmed and lowercased; a record matches when the query
    /// is a substring of its lowercased code or lowercased url. An empty
    /// query returns the full sequence. Pure read: neither counters nor
    /// ordering change.
    pub fn search(&self, query: &str) -> Vec<&LinkRecord> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|r| r.code.to_lowercase().contains(&q) || r.url.to_lowercase().contains(&q))
            .collect()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
