//! TUI module - Terminal User Interface
//!
//! This module manages the terminal UI using ratatui. It handles:
//! - Terminal initialization and cleanup
//! - Event loop (keyboard and mouse input, timer ticks)
//! - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod memo;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// How long to wait for input before redrawing
const TICK: Duration = Duration::from_millis(200);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - also when the loop itself failed.
pub fn run(config: &Config, recipients: Vec<String>, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, recipients, log_buffer);
    tracing::info!(
        recipients = app.display.recipients().len(),
        width = app.container_width,
        theme = %app.theme.name,
        "TUI started"
    );

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Single-threaded: draw, wait up to one tick for input, apply it, repeat.
/// Every state change happens between two draws, so each frame sees a
/// layout that is already up to date.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(TICK).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
