//! Component trait system for the TUI
//!
//! Components declare their own capabilities through traits instead of the
//! App knowing how to render and route input for each of them.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                    App                      │
//! │  (orchestrator: routes mouse, owns chrome)  │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!              ┌──────────────────┐
//!              │ RecipientsDisplay│  Component + Interactive
//!              └──────────────────┘
//! ```
//!
//! - [`Component`] - render
//! - [`Interactive`] - pointer input

mod component;
mod interactive;

pub use component::{Component, RenderContext};
pub use interactive::{Handled, Interactive};
