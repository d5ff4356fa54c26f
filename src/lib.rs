//! Recipients - greedy fitting of a recipient list into a fixed-width line
//!
//! - fit: the layout algorithm (pure, measurement injected)
//! - measure: text measurement strategies
//! - tui: the ratatui widget, its memo, and the demo application
//! - config / logging / theme / cli: ambient plumbing for the binary

pub mod cli;
pub mod config;
pub mod fit;
pub mod logging;
pub mod measure;
pub mod theme;
pub mod tui;
