//! Matcher: case-insensitive substring filter over the record list.
//!
//! The query is trimmed and lowercased once. A record matches when its
//! lowercased `title` or `description` contains the query; `url` is never
//! consulted. Results keep the store order.

use crate::types::Record;

/// Result of running a query against the record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// The query was empty after trimming.
    NoQuery,
    /// Matching records in store order. May be empty.
    Matches(Vec<&'a Record>),
}

impl SearchOutcome<'_> {
    /// Number of matches; `0` for [`SearchOutcome::NoQuery`].
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::NoQuery => 0,
            SearchOutcome::Matches(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Filter `records` by `query`.
pub fn search<'a>(records: &'a [Record], query: &str) -> SearchOutcome<'a> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return SearchOutcome::NoQuery;
    }
    let matches: Vec<&Record> = records.iter().filter(|r| matches(r, &needle)).collect();
    tracing::debug!(query = %needle, matches = matches.len(), total = records.len(), "search");
    SearchOutcome::Matches(matches)
}

/// `needle` must already be normalised with [`normalize_query`].
pub fn matches(record: &Record, needle: &str) -> bool {
    record.title().to_lowercase().contains(needle)
        || record.description().to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
