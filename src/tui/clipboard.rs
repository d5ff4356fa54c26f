//! Clipboard access for copying the recipient list
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The system clipboard is opened fresh on every copy to avoid holding resources.

use anyhow::{Context, Result};

/// Destination for copied text
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    /// Common failure cases: no display server (headless Linux), permission denied.
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}
