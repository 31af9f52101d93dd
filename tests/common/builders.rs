//! Test builders: ergonomic constructors for records and database documents.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use seek::{store::RecordStore, Record};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// ```rust
/// let record = RecordBuilder::new("Red Panda")
///     .description("cute mammal")
///     .url("https://x.test")
///     .build();
/// ```
pub struct RecordBuilder {
    title: String,
    description: String,
    url: String,
}

impl RecordBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            url: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn build(self) -> Record {
        Record::new(self.title, self.description, self.url)
    }
}

/// A store pre-filled with `records`.
pub fn store_with(records: Vec<Record>) -> RecordStore {
    let store = RecordStore::new();
    store.replace(records);
    store
}

// ---------------------------------------------------------------------------
// DatabaseBuilder
// ---------------------------------------------------------------------------

/// Builds a database document (a JSON array of raw entries).
#[derive(Default)]
pub struct DatabaseBuilder {
    entries: Vec<Value>,
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a well-formed entry.
    pub fn entry(self, title: &str, description: &str, url: &str) -> Self {
        self.raw(json!({ "title": title, "description": description, "url": url }))
    }

    /// Append an arbitrary JSON value as-is.
    pub fn raw(mut self, value: Value) -> Self {
        self.entries.push(value);
        self
    }

    pub fn to_json(&self) -> String {
        Value::Array(self.entries.clone()).to_string()
    }

    /// Write the document to `dir/name` and return its path.
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.to_json()).expect("write database fixture");
        path
    }
}
