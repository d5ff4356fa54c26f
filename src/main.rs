//! Recipients - fit a list of recipients into a fixed-width line
//!
//! Shows the list in a bordered container with a "+N" badge for the
//! recipients that did not fit; hovering the badge reveals the full list.
//!
//! Architecture:
//! - Fit: greedy layout over an injected text measure
//! - TUI (ratatui): container, badge, tooltip, width keys
//! - Headless: --print writes the fitted line once (plain or JSON)

use anyhow::Result;
use clap::Parser;
use recipients::cli::{self, Cli};
use recipients::config::Config;
use recipients::logging::{self, LogBuffer, LogSink};
use recipients::tui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands exit early
    if let Some(command) = &cli.command {
        return cli::handle_command(command);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Env > CLI flags > file > defaults
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.apply_env_overrides(|key| std::env::var(key).ok());

    let recipients = cli.collect_recipients()?;

    // The TUI owns the screen, so its logs go to the buffer instead
    let sink = if cli.print {
        LogSink::Stderr
    } else {
        LogSink::Buffer
    };
    let log_buffer = LogBuffer::new();
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init(&config.logging, sink, log_buffer.clone())?;

    tracing::debug!(
        recipients = recipients.len(),
        width = config.display.width,
        measure = config.display.measure.as_str(),
        "configuration loaded"
    );

    if cli.print {
        cli::print_layout(&config, &recipients, cli.json)
    } else {
        tui::run(&config, recipients, log_buffer)
    }
}
