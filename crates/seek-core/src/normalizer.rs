//! Normalizer: maps untrusted [`RawRecord`] values onto [`Record`].
//!
//! A field is used when it is present and truthy:
//!
//! | JSON value               | Result            |
//! |--------------------------|-------------------|
//! | non-empty string         | the string        |
//! | non-zero number          | its JSON text     |
//! | `true`                   | `"true"`          |
//! | `""`, `0`, `false`, null | absent            |
//! | array, object            | absent            |
//!
//! `description` falls back to `content`; every other absent field becomes
//! empty text. Normalisation never fails.

use crate::types::{RawRecord, Record};
use serde_json::Value;

/// Normalise one raw entry.
pub fn normalize(raw: &RawRecord) -> Record {
    let title = truthy_text(raw.field("title")).unwrap_or_default();
    let description = truthy_text(raw.field("description"))
        .or_else(|| truthy_text(raw.field("content")))
        .unwrap_or_default();
    let url = truthy_text(raw.field("url")).unwrap_or_default();
    Record::new(title, description, url)
}

/// Normalise a whole document, preserving order.
pub fn normalize_all(raw: &[RawRecord]) -> Vec<Record> {
    raw.iter().map(normalize).collect()
}

fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(number_text(n)),
        _ => None,
    }
}

/// Integral floats print without a fractional part (`1e2` is `100`).
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
