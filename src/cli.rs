//! CLI module - command-line argument parsing and handlers
//!
//! Without a subcommand the recipients given on the command line (or in
//! --file) are shown in the TUI, or printed once with --print.
//!
//! Subcommands for configuration management:
//! - config --show: Display effective configuration
//! - config --path: Show config file path
//! - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use crate::fit::{fit, tooltip_text, LayoutResult};
use crate::measure::MeasureKind;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Show a recipient list in a fixed-width line with a "+N" badge
#[derive(Parser, Debug)]
#[command(name = "recipients")]
#[command(version = VERSION)]
#[command(about = "Fit a recipient list into a fixed-width line", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Recipient display names, in order
    pub recipients: Vec<String>,

    /// Read additional recipients from a file (one per line)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Container width in cells
    #[arg(long)]
    pub width: Option<u16>,

    /// Text measurement: cells or fixed
    #[arg(long, value_parser = ["cells", "fixed"])]
    pub measure: Option<String>,

    /// Per-character advance for --measure fixed
    #[arg(long)]
    pub advance: Option<usize>,

    /// Color theme: auto, dracula, nord, gruvbox
    #[arg(long)]
    pub theme: Option<String>,

    /// Print the fitted line once instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// With --print: emit JSON
    #[arg(long, requires = "print")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply command-line flags on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.display.width = width;
        }
        if let Some(measure) = &self.measure {
            config.display.measure = MeasureKind::from_str(measure);
        }
        if let Some(advance) = self.advance {
            config.display.advance = advance;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }

    /// Positional recipients followed by those read from --file
    pub fn collect_recipients(&self) -> Result<Vec<String>> {
        let mut recipients = self.recipients.clone();
        if let Some(path) = &self.file {
            recipients.extend(read_recipient_file(path)?);
        }
        Ok(recipients)
    }
}

/// Read one recipient per non-blank line
pub fn read_recipient_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipients from {}", path.display()))?;
    Ok(parse_recipient_lines(&contents))
}

/// Trim each line and skip blank ones; order and duplicates are kept
pub fn parse_recipient_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Headless output
// ─────────────────────────────────────────────────────────────────────────────

/// What `--print --json` emits
#[derive(Debug, Serialize)]
pub struct PrintOutput {
    pub width: u16,
    pub layout: LayoutResult,
    pub badge: Option<String>,
    pub tooltip: String,
}

impl PrintOutput {
    pub fn compute(config: &Config, recipients: &[String]) -> Self {
        let measurer = config.display.measurer();
        let available = measurer.cells_to_units(config.display.width);
        let layout = fit(recipients, available, &measurer);
        tracing::debug!(
            available,
            trimmed = layout.trimmed_count,
            "computed headless layout"
        );

        Self {
            width: config.display.width,
            badge: layout.badge_label(),
            layout,
            tooltip: tooltip_text(recipients),
        }
    }

    /// Plain-text rendition: the line plus badge, then the full list when trimmed
    pub fn to_plain(&self) -> String {
        let mut out = self.layout.visible_text.clone();
        if let Some(badge) = &self.badge {
            out.push_str(&format!(" [{}]\n{}", badge, self.tooltip));
        }
        out
    }
}

/// Print the fitted line once (plain or JSON)
pub fn print_layout(config: &Config, recipients: &[String], json: bool) -> Result<()> {
    let output = PrintOutput::compute(config, recipients);
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &output)
            .context("Failed to serialize layout")?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", output.to_plain())?;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Config subcommand
// ─────────────────────────────────────────────────────────────────────────────

/// Handle a subcommand
pub fn handle_command(command: &Commands) -> Result<()> {
    match command {
        Commands::Config { show, reset, path } => {
            if *path {
                handle_config_path()
            } else if *show {
                handle_config_show()
            } else if *reset {
                handle_config_reset()
            } else {
                // No flag provided, show help
                println!("Usage: recipients config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
    }
}

fn config_path() -> Result<PathBuf> {
    match Config::config_path() {
        Some(path) => Ok(path),
        None => bail!("Could not determine config path"),
    }
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "recipients",
            "--width",
            "12",
            "--measure",
            "fixed",
            "--advance",
            "3",
            "--theme",
            "nord",
            "ann",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.display.width, 12);
        assert_eq!(config.display.measure, MeasureKind::Fixed);
        assert_eq!(config.display.advance, 3);
        assert_eq!(config.theme, "nord");
        assert_eq!(cli.recipients, vec!["ann".to_string()]);
    }

    #[test]
    fn json_requires_print() {
        assert!(Cli::try_parse_from(["recipients", "--json", "ann"]).is_err());
        assert!(Cli::try_parse_from(["recipients", "--print", "--json", "ann"]).is_ok());
    }

    #[test]
    fn config_subcommand_parses() {
        let cli = Cli::parse_from(["recipients", "config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, .. })
        ));
    }

    #[test]
    fn recipient_lines_are_trimmed_and_ordered() {
        let parsed = parse_recipient_lines("  bob@x.com \n\nalice@x.com\n bob@x.com\n   \n");
        assert_eq!(parsed, vec!["bob@x.com", "alice@x.com", "bob@x.com"]);
    }

    #[test]
    fn recipients_from_args_then_file() {
        let path = std::env::temp_dir().join(format!(
            "recipients-cli-test-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "carol@x.com\n").unwrap();

        let cli = Cli::parse_from([
            "recipients",
            "--file",
            path.to_str().unwrap(),
            "alice@x.com",
        ]);
        let recipients = cli.collect_recipients().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(recipients, vec!["alice@x.com", "carol@x.com"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let cli = Cli::parse_from(["recipients", "--file", "/nonexistent/recipients.txt"]);
        let err = cli.collect_recipients().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read recipients"));
    }

    #[test]
    fn plain_output_with_badge() {
        let mut config = Config::default();
        config.display.width = 22;
        let recipients: Vec<String> = ["alice@x.com", "bob@x.com", "carol@x.com"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let output = PrintOutput::compute(&config, &recipients);
        assert_eq!(
            output.to_plain(),
            "alice@x.com, bob@x.com, ... [+1]\nalice@x.com, bob@x.com, carol@x.com"
        );
    }

    #[test]
    fn plain_output_without_badge() {
        let config = Config::default();
        let output = PrintOutput::compute(&config, &[]);
        assert_eq!(output.to_plain(), "No recipients");
        assert!(output.badge.is_none());
    }

    #[test]
    fn json_output_shape() {
        let mut config = Config::default();
        config.display.width = 3;
        let recipients = vec!["a-very-long-address@example.com".to_string()];

        let output = PrintOutput::compute(&config, &recipients);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["width"], 3);
        assert_eq!(value["layout"]["visible_text"], "...");
        assert_eq!(value["layout"]["is_first_clipped"], true);
        assert_eq!(value["layout"]["trimmed_count"], 0);
        assert!(value["badge"].is_null());
        assert_eq!(value["tooltip"], "a-very-long-address@example.com");
    }
}
