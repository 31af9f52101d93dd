//! seek-core: search pipeline library for seek.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Binder ──► Loader ──► Normalizer ──► RecordStore
//!   │                                      │
//!   └──► Debouncer ──► Matcher ◄───────────┘
//!                         │
//!                         └──► Renderer ──► ResultsView
//! ```
//!
//! Everything runs on one thread. Deferred work (the initial load and the
//! debounced search) is spawned onto a `tokio::task::LocalSet`, so shared
//! state is `Rc`/`RefCell` rather than locks.

pub mod bind;
pub mod config;
pub mod debounce;
pub mod loader;
pub mod matcher;
pub mod normalizer;
pub mod render;
pub mod store;
pub mod types;

pub use types::{RawRecord, Record};
