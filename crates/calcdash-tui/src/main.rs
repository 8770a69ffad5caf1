//! `calcdash-tui` — terminal dashboard for the calc demo service.
//!
//! Built on [ratatui](https://ratatui.rs) over the async client in
//! `calcdash-api`. Screens are navigable via Tab or number keys (1-4):
//! Overview, Greet, Fibonacci, and Stats.
//!
//! Logs are written to a file (default `/tmp/calcdash-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app
//! launch.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tracker;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use calcdash_api::{CalcClient, TransportConfig};

use crate::app::App;

/// Terminal dashboard for the calc demo service.
#[derive(Parser, Debug)]
#[command(name = "calcdash-tui", version, about)]
struct Cli {
    /// Service base URL
    #[arg(
        short = 's',
        long,
        default_value = "http://localhost:8080",
        env = "CALCDASH_SERVER"
    )]
    server: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Log file path
    #[arg(long, default_value = "/tmp/calcdash-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. Logging to stdout/stderr would corrupt the
/// TUI output. Returns a guard that must be held for the lifetime of the
/// application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("calcdash_tui={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("calcdash-tui.log"));

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

    info!(server = %cli.server, "starting calcdash-tui");

    let base_url: url::Url = cli
        .server
        .parse()
        .wrap_err_with(|| format!("invalid server URL: {}", cli.server))?;
    let transport = TransportConfig::with_timeout(Duration::from_secs(cli.timeout));
    let client = CalcClient::new(base_url, &transport)?;

    let mut app = App::new(Arc::new(client));
    app.run().await?;

    Ok(())
}
