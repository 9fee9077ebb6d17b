//! Checkbox widget for dialog fields

use crate::input::InputEvent;
use crate::ui::widget::{EventResult, Widget};

/// A checkbox widget
#[derive(Clone, Debug)]
pub struct Checkbox {
    checked: bool,
    focused: bool,
    action_name: String,
}

impl Checkbox {
    pub fn new(action_name: impl Into<String>) -> Self {
        Self {
            checked: false,
            focused: false,
            action_name: action_name.into(),
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

impl Widget for Checkbox {
    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        if self.focused && matches!(event, InputEvent::Enter | InputEvent::Char(' ')) {
            self.toggle();
            return EventResult::Action(self.action_name.clone());
        }
        EventResult::Ignored
    }

    fn focusable(&self) -> bool {
        true
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }
}
