//! TextField widget - a single-line text input field

use crate::input::InputEvent;
use crate::ui::widget::{EventResult, Widget};

/// A single-line text input widget.
///
/// Cursor and selection positions count characters, not bytes.
#[derive(Clone, Debug)]
pub struct TextField {
    /// Text content
    text: String,
    /// Cursor position (character index)
    cursor_pos: usize,
    /// Selection anchor (if any)
    selection_anchor: Option<usize>,
    /// Whether widget has focus
    focused: bool,
    /// Action prefix for events
    action_prefix: String,
}

impl TextField {
    pub fn new(action_prefix: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            cursor_pos: 0,
            selection_anchor: None,
            focused: false,
            action_prefix: action_prefix.into(),
        }
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and park the cursor at the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor_pos = self.char_count();
        self.selection_anchor = None;
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn set_cursor_pos(&mut self, pos: usize) {
        self.cursor_pos = pos.min(self.char_count());
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of a character index
    fn byte_at(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn char_at(&self, char_idx: usize) -> Option<char> {
        self.text.chars().nth(char_idx)
    }

    /// Get the selected range (if any)
    fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection_anchor
            .filter(|&anchor| anchor != self.cursor_pos)
            .map(|anchor| {
                if anchor < self.cursor_pos {
                    (anchor, self.cursor_pos)
                } else {
                    (self.cursor_pos, anchor)
                }
            })
    }

    /// Get selected text
    pub fn selected_text(&self) -> Option<&str> {
        self.selection_range()
            .map(|(start, end)| &self.text[self.byte_at(start)..self.byte_at(end)])
    }

    /// Delete selected text
    fn delete_selection(&mut self) -> bool {
        if let Some((start, end)) = self.selection_range() {
            let range = self.byte_at(start)..self.byte_at(end);
            self.text.replace_range(range, "");
            self.cursor_pos = start;
            self.selection_anchor = None;
            return true;
        }
        self.selection_anchor = None;
        false
    }

    fn start_selection(&mut self) {
        if self.selection_anchor.is_none() {
            self.selection_anchor = Some(self.cursor_pos);
        }
    }

    pub fn select_all(&mut self) {
        self.selection_anchor = Some(0);
        self.cursor_pos = self.char_count();
    }

    /// Insert text at the cursor, replacing any selection
    pub fn insert_str(&mut self, s: &str) {
        self.delete_selection();
        let at = self.byte_at(self.cursor_pos);
        self.text.insert_str(at, s);
        self.cursor_pos += s.chars().count();
    }

    /// Remove every leading occurrence of `pattern`, keeping the cursor on
    /// the same character. Returns whether anything was removed.
    pub fn trim_leading(&mut self, pattern: &str) -> bool {
        let trimmed = self.text.trim_start_matches(pattern);
        if pattern.is_empty() || trimmed.len() == self.text.len() {
            return false;
        }
        let removed = self.text[..self.text.len() - trimmed.len()].chars().count();
        self.text = trimmed.to_string();
        self.cursor_pos = self.cursor_pos.saturating_sub(removed);
        self.selection_anchor = None;
        true
    }

    fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_at(self.cursor_pos);
            self.text.remove(at);
        }
    }

    fn delete(&mut self) {
        if self.delete_selection() {
            return;
        }
        if self.cursor_pos < self.char_count() {
            let at = self.byte_at(self.cursor_pos);
            self.text.remove(at);
        }
    }

    fn move_to(&mut self, pos: usize, keep_selection: bool) {
        if keep_selection {
            self.start_selection();
        } else {
            self.selection_anchor = None;
        }
        self.cursor_pos = pos.min(self.char_count());
    }

    fn move_left(&mut self, keep_selection: bool) {
        // Collapse a selection to its start
        if !keep_selection {
            if let Some((start, _)) = self.selection_range() {
                self.move_to(start, false);
                return;
            }
        }
        self.move_to(self.cursor_pos.saturating_sub(1), keep_selection);
    }

    fn move_right(&mut self, keep_selection: bool) {
        if !keep_selection {
            if let Some((_, end)) = self.selection_range() {
                self.move_to(end, false);
                return;
            }
        }
        self.move_to(self.cursor_pos + 1, keep_selection);
    }

    fn is_word_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }

    fn move_word_right(&mut self) {
        let len = self.char_count();
        let mut pos = self.cursor_pos;
        while pos < len && self.char_at(pos).is_some_and(Self::is_word_char) {
            pos += 1;
        }
        while pos < len && !self.char_at(pos).is_some_and(Self::is_word_char) {
            pos += 1;
        }
        self.move_to(pos, false);
    }

    fn move_word_left(&mut self) {
        let mut pos = self.cursor_pos;
        while pos > 0 && !self.char_at(pos - 1).is_some_and(Self::is_word_char) {
            pos -= 1;
        }
        while pos > 0 && self.char_at(pos - 1).is_some_and(Self::is_word_char) {
            pos -= 1;
        }
        self.move_to(pos, false);
    }

    fn changed(&self) -> EventResult {
        EventResult::Action(format!("{}_change", self.action_prefix))
    }
}

impl Widget for TextField {
    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        if !self.focused {
            return EventResult::Ignored;
        }

        match event {
            InputEvent::Char(ch) => {
                let mut buf = [0u8; 4];
                self.insert_str(ch.encode_utf8(&mut buf));
                self.changed()
            }
            InputEvent::Paste(text) => {
                // Single-line field
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                self.insert_str(&line);
                self.changed()
            }
            InputEvent::Backspace => {
                self.backspace();
                self.changed()
            }
            InputEvent::Delete => {
                self.delete();
                self.changed()
            }
            InputEvent::CursorLeft => {
                self.move_left(false);
                EventResult::Consumed
            }
            InputEvent::CursorRight => {
                self.move_right(false);
                EventResult::Consumed
            }
            InputEvent::ShiftLeft => {
                self.move_left(true);
                EventResult::Consumed
            }
            InputEvent::ShiftRight => {
                self.move_right(true);
                EventResult::Consumed
            }
            InputEvent::Home => {
                self.move_to(0, false);
                EventResult::Consumed
            }
            InputEvent::End => {
                self.move_to(self.char_count(), false);
                EventResult::Consumed
            }
            InputEvent::ShiftHome => {
                self.move_to(0, true);
                EventResult::Consumed
            }
            InputEvent::ShiftEnd => {
                self.move_to(self.char_count(), true);
                EventResult::Consumed
            }
            InputEvent::CtrlLeft => {
                self.move_word_left();
                EventResult::Consumed
            }
            InputEvent::CtrlRight => {
                self.move_word_right();
                EventResult::Consumed
            }
            InputEvent::CtrlA => {
                self.select_all();
                EventResult::Consumed
            }
            InputEvent::Enter => EventResult::Action(format!("{}_submit", self.action_prefix)),
            _ => EventResult::Ignored,
        }
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
