//! Headless mode: load once, search once, print.
//!
//! [`Report`] is a [`ResultsView`] that records what the renderer wrote so it
//! can be printed as plain text or JSON once the search is done.

use seek_core::{
    loader::{self, Fetch},
    matcher::search,
    render::{render, ResultBlock, ResultsView},
    store::RecordStore,
};
use serde::Serialize;
use std::{cell::RefCell, fmt::Write as _};

/// Output format for headless mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Blank-line separated blocks: title, description, link.
    Text,
    /// A single JSON object with `message` and `results`.
    Json,
}

/// What the results area would show after a headless run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub message: Option<String>,
    pub results: Vec<ResultBlock>,
}

impl ResultsView for Report {
    fn clear(&mut self) {
        self.message = None;
        self.results.clear();
    }

    fn append_block(&mut self, block: ResultBlock) {
        self.results.push(block);
    }

    fn show_message(&mut self, text: &str) {
        self.results.clear();
        self.message = Some(text.to_string());
    }
}

impl Report {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(message) = &self.message {
            let _ = writeln!(out, "{message}");
        }
        for (i, block) in self.results.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", block.heading);
            let _ = writeln!(out, "{}", block.body);
            let _ = writeln!(out, "{}", block.link.text);
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn format(&self, format: Format) -> anyhow::Result<String> {
        Ok(match format {
            Format::Text => self.to_text(),
            Format::Json => self.to_json()? + "\n",
        })
    }
}

/// Outcome of [`run`].
#[derive(Debug)]
pub struct Headless {
    pub report: Report,
    /// `false` when the database could not be loaded.
    pub loaded: bool,
}

/// Load `source` and run a single search for `query`.
///
/// A failed load leaves the report holding the load-failure message and no
/// search is run.
pub async fn run<F: Fetch>(source: &F, query: &str) -> Headless {
    let store = RecordStore::new();
    let view = RefCell::new(Report::default());

    let loaded = loader::load(source, &store, &view).await.is_ok();
    if loaded {
        let records = store.snapshot();
        render(&mut *view.borrow_mut(), &search(&records, query));
    }
    tracing::debug!(query, loaded, "headless run finished");

    Headless {
        report: view.into_inner(),
        loaded,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
