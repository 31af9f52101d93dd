//! seek: instant search over a JSON database of titled links.
//!
//! The layers live in workspace crates; this crate re-exports them so that
//! integration tests can import everything from one place, and adds the
//! headless mode used by `seek --query`.
//!
//! # Architecture
//!
//! ```text
//! Source ──► Loader ──► Store ──► Matcher ──► Renderer ──► ResultsView
//!                                    ▲
//!   Surface events ──► Binder ───────┘ (debounced or immediate)
//! ```
//!
//! Everything runs on one thread: the load and debounced searches are local
//! tasks on the same `LocalSet` as the UI.

pub mod headless;

pub use seek_core::{bind, config, debounce, loader, matcher, normalizer, render, store, types};
pub use seek_core::{RawRecord, Record};
pub use seek_sources::{FileSource, HttpSource, Source, SourceError, MAX_REDIRECTS};
