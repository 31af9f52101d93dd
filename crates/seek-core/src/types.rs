//! Core types for seek-core.
//!
//! [`RawRecord`] is whatever the database document contains for one entry;
//! [`Record`] is the normalised shape every other layer works with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalised database entry.
///
/// All three fields are always present as text, possibly empty. Fields are
/// private so a `Record` cannot change after the normalizer builds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    title: String,
    description: String,
    url: String,
}

impl Record {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Empty when the source entry had no usable `url`.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// One untrusted entry from the database document.
///
/// Any JSON value is accepted. Only object members named `title`,
/// `description`, `content` and `url` are ever consulted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a top-level member. Returns `None` for non-object records.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
