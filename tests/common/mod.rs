//! Shared test utilities for seek integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Debounce-sensitive helpers are deterministic under
//! `tokio::time::pause()`.

pub mod assertions;
pub mod builders;
pub mod fake_database_api;
pub mod fixtures;
pub mod recorder;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use recorder::*;
