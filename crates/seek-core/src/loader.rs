//! Loader: fetches the database document and fills the [`RecordStore`].
//!
//! Fetching is abstracted behind [`Fetch`] so the loader does not care whether
//! the bytes came from disk or over HTTP. Implementations must bypass any
//! cache and read the source fresh on every call.
//!
//! A failed load is handled here: it is logged, the results view shows
//! [`LOAD_FAILED`], and the store keeps whatever it held before.

use crate::{
    normalizer::normalize_all,
    render::{ResultsView, LOAD_FAILED},
    store::RecordStore,
    types::RawRecord,
};
use serde_json::Value;
use std::{cell::RefCell, future::Future};

/// Everything that can go wrong while loading the database.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to fetch {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{location} returned HTTP status {status}")]
    Status { location: String, status: u16 },
    #[error("timed out fetching {0}")]
    Timeout(String),
    #[error("database is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("database root must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// A source of raw database bytes.
pub trait Fetch {
    /// Human-readable location for logs.
    fn location(&self) -> String;

    /// Read the full document, bypassing caches.
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>>;
}

/// Parse a database document into raw records.
pub fn parse_database(body: &[u8]) -> Result<Vec<RawRecord>, LoadError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => Ok(items.into_iter().map(RawRecord::from).collect()),
        other => Err(LoadError::NotAnArray(json_kind(&other))),
    }
}

/// Fetch, parse and normalise the database, then replace the store.
///
/// On failure the store is left untouched and `view` shows [`LOAD_FAILED`].
/// The error is returned for callers that want to report it, but it has
/// already been logged and displayed.
pub async fn load<F, V>(source: &F, store: &RecordStore, view: &RefCell<V>) -> Result<usize, LoadError>
where
    F: Fetch,
    V: ResultsView + ?Sized,
{
    let result = source
        .fetch()
        .await
        .and_then(|body| parse_database(&body));

    match result {
        Ok(raw) => {
            let records = normalize_all(&raw);
            let count = records.len();
            store.replace(records);
            tracing::info!(location = %source.location(), records = count, "database loaded");
            Ok(count)
        }
        Err(err) => {
            tracing::error!(location = %source.location(), error = %err, "database load error");
            view.borrow_mut().show_message(LOAD_FAILED);
            Err(err)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
