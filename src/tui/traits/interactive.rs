//! Interactive trait for components that handle pointer input
//!
//! The App forwards every mouse event to interactive components; each one
//! decides whether the event concerns it.

use super::Component;
use crossterm::event::MouseEvent;

/// Result of handling an input event
///
/// Tells the App whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

/// Trait for components that react to the pointer
///
/// # Event Flow
///
/// ```text
/// MouseEvent (Moved, Down, ...)
///    │
///    ▼
/// App
///    │
///    ▼
/// Component (via Interactive trait)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// App (fallback handlers)
/// ```
pub trait Interactive: Component {
    /// Handle a mouse event
    ///
    /// Returns `Handled::Yes` if the component's state changed because of it.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Handled;

    /// Hint text for the status bar
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
