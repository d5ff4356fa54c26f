//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# recipients configuration

# Theme: auto, dracula, nord, gruvbox
theme = {theme}

[display]
# Container width in cells
width = {width}
# Text measurement: "cells" (terminal display width) or "fixed"
measure = "{measure}"
# Width of every character when measure = "fixed"
advance = {advance}
# Re-measure the container when the terminal is resized
remeasure_on_resize = {remeasure}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            theme = quoted(&self.theme),
            width = self.display.width,
            measure = self.display.measure.as_str(),
            advance = self.display.advance,
            remeasure = self.display.remeasure_on_resize,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}

/// TOML string literal for `value`, escaped
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
