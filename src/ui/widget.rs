//! Widget trait and event results for dialog fields

use crate::input::InputEvent;

/// Result of handling an event
#[derive(Clone, Debug, PartialEq)]
pub enum EventResult {
    /// Event was handled, stop propagation
    Consumed,
    /// Event was not handled, continue propagation
    Ignored,
    /// Event triggered a named action
    Action(String),
}

/// Common interface for dialog fields.
///
/// Widgets only see keyboard events while focused and report what
/// happened as an `EventResult`; the owning dialog decides what the
/// action means.
pub trait Widget {
    /// Handle an input event
    fn handle_event(&mut self, event: &InputEvent) -> EventResult;

    /// Whether this widget can receive keyboard focus
    fn focusable(&self) -> bool {
        false
    }

    /// Whether this widget currently has focus
    fn has_focus(&self) -> bool {
        false
    }

    /// Set focus state
    fn set_focus(&mut self, _focused: bool) {}
}
