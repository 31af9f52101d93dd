//! Ratatui widgets for the seek TUI.

pub mod help;
pub mod query_bar;
pub mod results;
pub mod search_button;
pub mod status_line;
