//! Renderer: turns a [`SearchOutcome`] into writes on a [`ResultsView`].
//!
//! Views are capability objects: the TUI results pane, the headless stdout
//! printers and the test recorders all implement [`ResultsView`]. Every render
//! replaces the whole view content.
//!
//! Record text is made terminal-safe with [`literal`] before it reaches a
//! view, so escape sequences inside the database show up as visible text
//! instead of driving the terminal.

use crate::{matcher::SearchOutcome, types::Record};
use serde::Serialize;
use std::borrow::Cow;

pub const PLACEHOLDER: &str = "Type to search...";
pub const NO_RESULTS: &str = "No results found.";
pub const LOAD_FAILED: &str = "Failed to load database.";
pub const NO_URL: &str = "No URL";

/// A result link. Opened links get a fresh browsing context with no opener
/// and no referrer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub text: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl Link {
    pub fn for_url(url: &str) -> Self {
        let (href, text) = if url.is_empty() {
            ("#".to_string(), NO_URL.to_string())
        } else {
            let shown = literal(url).into_owned();
            (url.to_string(), shown)
        };
        Self {
            href,
            text,
            target: "_blank",
            rel: "noopener noreferrer",
        }
    }

    /// `false` for the `No URL` placeholder link.
    pub fn is_navigable(&self) -> bool {
        self.href != "#"
    }
}

/// One rendered match: heading, paragraph and link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultBlock {
    pub heading: String,
    pub body: String,
    pub link: Link,
}

impl From<&Record> for ResultBlock {
    fn from(record: &Record) -> Self {
        Self {
            heading: literal(record.title()).into_owned(),
            body: literal(record.description()).into_owned(),
            link: Link::for_url(record.url()),
        }
    }
}

/// Write target for rendered results.
pub trait ResultsView {
    /// Remove all blocks and any message.
    fn clear(&mut self);

    fn append_block(&mut self, block: ResultBlock);

    /// Replace the whole content with a single line of text.
    fn show_message(&mut self, text: &str);
}

/// Render `outcome` into `view`.
pub fn render<V: ResultsView + ?Sized>(view: &mut V, outcome: &SearchOutcome<'_>) {
    match outcome {
        SearchOutcome::NoQuery => view.show_message(PLACEHOLDER),
        SearchOutcome::Matches(records) if records.is_empty() => view.show_message(NO_RESULTS),
        SearchOutcome::Matches(records) => {
            view.clear();
            for record in records {
                view.append_block(ResultBlock::from(*record));
            }
        }
    }
}

/// Make text safe to print on a terminal.
///
/// Line breaks and tabs become spaces; every other control character is
/// replaced by its escaped form (`ESC` → `\u{1b}`).
pub fn literal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\n' | '\r' | '\t' => out.push(' '),
            c if c.is_control() => out.extend(c.escape_unicode()),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
