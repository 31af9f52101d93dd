#![allow(unused)]
//! Normalizer integration harness.
//!
//! # What this covers
//!
//! - **Document parsing**: the root must be a JSON array; anything else is a
//!   load failure, never a partial store.
//! - **Field fallback**: `description` falls back to `content`; missing
//!   fields become empty text.
//! - **Truthiness**: empty strings, `0`, `false` and `null` count as absent;
//!   non-zero numbers and `true` are kept as their JSON text; arrays and
//!   objects are absent.
//! - **Untrusted elements**: non-object array elements become empty records
//!   and keep their position.
//! - **Insta snapshot**: the normalised form of the untidy corpus is pinned
//!   so unintentional behaviour changes are caught.
//!
//! # Running
//!
//! ```sh
//! cargo test --test normalization_harness
//! # Update snapshots after intentional changes:
//! cargo insta review
//! ```

mod common;
use common::*;
use rstest::rstest;
use seek::{
    loader::{parse_database, LoadError},
    normalizer::{normalize, normalize_all},
    RawRecord, Record,
};
use serde_json::json;

fn normalise(doc: &str) -> Vec<Record> {
    normalize_all(&parse_database(doc.as_bytes()).expect("fixture must parse"))
}

// ---------------------------------------------------------------------------
// Document shape
// ---------------------------------------------------------------------------

#[test]
fn animals_fixture_normalises() {
    pretty_assertions::assert_eq!(normalise(ANIMALS_JSON), animals());
}

#[test]
fn empty_array_is_an_empty_store() {
    assert!(normalise("[]").is_empty());
}

#[rstest]
#[case::object(r#"{"title": "x"}"#)]
#[case::string(r#""database""#)]
#[case::null("null")]
#[case::number("7")]
fn non_array_root_is_rejected(#[case] doc: &str) {
    let err = parse_database(doc.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray(_)), "{err}");
}

#[rstest]
#[case::truncated(r#"[{"title": "Owl""#)]
#[case::trailing_comma(r#"[{"title": "Owl"},]"#)]
#[case::empty("")]
fn malformed_json_is_rejected(#[case] doc: &str) {
    let err = parse_database(doc.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)), "{err}");
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

#[rstest]
#[case::empty_string(json!(""), "")]
#[case::zero(json!(0), "")]
#[case::false_(json!(false), "")]
#[case::null(json!(null), "")]
#[case::array(json!(["a"]), "")]
#[case::object(json!({"a": 1}), "")]
#[case::text(json!("Owl"), "Owl")]
#[case::integer(json!(42), "42")]
#[case::float(json!(1.5), "1.5")]
#[case::true_(json!(true), "true")]
fn title_truthiness(#[case] value: serde_json::Value, #[case] expected: &str) {
    let record = normalize(&RawRecord::new(json!({ "title": value })));
    assert_eq!(record.title(), expected);
}

#[test]
fn falsy_description_falls_back_to_content() {
    let record = normalize(&RawRecord::new(json!({"description": 0, "content": "wading bird"})));
    assert_eq!(record.description(), "wading bird");
}

#[test]
fn content_never_fills_the_title() {
    let record = normalize(&RawRecord::new(json!({"content": "body only"})));
    assert_eq!(record.title(), "");
    assert_eq!(record.description(), "body only");
}

#[test]
fn unknown_keys_are_ignored() {
    let record = normalize(&RawRecord::new(json!({"title": "Owl", "tags": ["bird"], "id": 9})));
    assert_eq!(record, Record::new("Owl", "", ""));
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

#[test]
fn untidy_corpus_snapshot() {
    insta::assert_json_snapshot!(normalise(UNTIDY_JSON), @r#"
    [
      {
        "title": "Heron",
        "description": "wading bird",
        "url": ""
      },
      {
        "title": "",
        "description": "nameless",
        "url": ""
      },
      {
        "title": "42",
        "description": "true",
        "url": ""
      },
      {
        "title": "",
        "description": "",
        "url": "https://n.test"
      },
      {
        "title": "",
        "description": "",
        "url": ""
      },
      {
        "title": "",
        "description": "",
        "url": ""
      },
      {
        "title": "",
        "description": "",
        "url": ""
      }
    ]
    "#);
}
