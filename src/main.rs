use clap::Parser;
use seek::headless::{self, Format};
use seek_core::config::Config;
use seek_sources::Source;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seek", about = "Instant search over a JSON database of titled links")]
struct Cli {
    /// Database location: a path or an http(s):// URL.
    #[arg(long)]
    source: Option<String>,

    /// Base the database location is resolved against (URL or directory).
    #[arg(long)]
    base: Option<String>,

    /// Quiet period before a typed query is searched.
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Run one search without the TUI and print the results.
    #[arg(long)]
    query: Option<String>,

    /// Output format for --query.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write debug logs to the log file (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    #[arg(long, default_value = "/tmp/seek-debug.log")]
    log_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&cli.log_file)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(log_file = %cli.log_file.display(), "seek debug log started");
    }

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        Config::defaults()
    });
    if let Some(location) = cli.source {
        config.source.location = location;
    }
    if let Some(ms) = cli.debounce_ms {
        config.search.debounce_ms = ms;
    }

    let source = Source::resolve_or_invalid(
        &config.source.location,
        cli.base.as_deref(),
        config.source.timeout(),
    );
    tracing::debug!(location = %seek_core::loader::Fetch::location(&source), "source resolved");

    match cli.query {
        Some(query) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let outcome = runtime.block_on(headless::run(&source, &query));
            print!("{}", outcome.report.format(cli.format)?);
            if !outcome.loaded {
                std::process::exit(1);
            }
            Ok(())
        }
        None => seek_tui::run(&config, source),
    }
}
