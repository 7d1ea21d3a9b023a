//! `riftline-tui` — Terminal browser for the Riftline game catalogs.
//!
//! Built on [ratatui](https://ratatui.rs) over the catalog engine in
//! `riftline-core`. Screens are navigable via number keys (1-6): Home,
//! Champions, Modes, Esports, News, and Rankings. Every catalog screen
//! carries a live `/` search and an `f`-cycled facet filter.
//!
//! Logs are written to a file (default `/tmp/riftline-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::screen::ScreenId;

/// Terminal browser for champions, game modes, esports, news, and rankings.
#[derive(Parser, Debug)]
#[command(name = "riftline-tui", version, about)]
struct Cli {
    /// Screen to open on launch (1-6)
    #[arg(short = 'S', long, default_value = "1")]
    screen: u8,

    /// Log file path (defaults to /tmp/riftline-tui.log)
    #[arg(long, default_value = "/tmp/riftline-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("riftline_tui={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("riftline-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let initial = ScreenId::from_number(cli.screen).unwrap_or_default();
    info!(screen = %initial, "starting riftline-tui");

    let mut app = App::new(initial);
    app.run().await?;

    Ok(())
}
