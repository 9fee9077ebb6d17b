//! Button widget - an activatable dialog action

use crate::input::InputEvent;
use crate::ui::widget::{EventResult, Widget};

/// A button that reports its action name when activated.
///
/// Captions live with the owning dialog; the button only knows its action.
#[derive(Clone, Debug)]
pub struct Button {
    /// Whether widget has focus
    focused: bool,
    /// Action name for activation
    action_name: String,
    /// Disabled buttons neither take focus nor fire
    enabled: bool,
}

impl Button {
    pub fn new(action_name: impl Into<String>) -> Self {
        Self {
            focused: false,
            action_name: action_name.into(),
            enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.focused = false;
        }
    }
}

impl Widget for Button {
    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        if self.enabled
            && self.focused
            && matches!(event, InputEvent::Enter | InputEvent::Char(' '))
        {
            return EventResult::Action(self.action_name.clone());
        }
        EventResult::Ignored
    }

    fn focusable(&self) -> bool {
        self.enabled
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused && self.enabled;
    }
}
