//! seek TUI: ratatui application shell.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use seek_core::{config::Config, loader::Fetch};

/// Start the TUI against `source` on a single-threaded runtime.
///
/// Everything runs on one thread inside a [`tokio::task::LocalSet`]: the
/// startup load, debounced searches and the event loop.
pub fn run<F: Fetch + 'static>(config: &Config, source: F) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    let app = App::new(config, source.location(), theme);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, app.run(source))
}
