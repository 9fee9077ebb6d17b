//! Input events and key-script parsing

use thiserror::Error;

/// Processed input events delivered to the dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Regular character input
    Char(char),
    /// Bracketed paste or host-provided text
    Paste(String),
    /// Navigation keys
    CursorLeft,
    CursorRight,
    Home,
    End,
    /// Shift+Navigation for selection
    ShiftLeft,
    ShiftRight,
    ShiftHome,
    ShiftEnd,
    /// Ctrl+Navigation
    CtrlLeft,
    CtrlRight,
    /// Editing keys
    Enter,
    Backspace,
    Delete,
    Tab,
    ShiftTab,
    /// Escape key
    Escape,
    CtrlA, // Select all
    CtrlV, // Paste from clipboard
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyScriptError {
    #[error("unknown key token <{0}> at offset {1}")]
    UnknownToken(String, usize),
    #[error("unterminated key token starting at offset {0}")]
    Unterminated(usize),
}

/// Parse a key script such as `https://a.com<tab>Title<enter>`.
///
/// Plain characters become `Char` events. Named keys go in angle brackets;
/// a literal `<` is written `<lt>`.
pub fn parse_key_script(script: &str) -> Result<Vec<InputEvent>, KeyScriptError> {
    let mut events = Vec::new();
    let mut rest = script;
    let mut offset = 0;

    while let Some(ch) = rest.chars().next() {
        if ch != '<' {
            events.push(InputEvent::Char(ch));
            offset += ch.len_utf8();
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        let end = rest.find('>').ok_or(KeyScriptError::Unterminated(offset))?;
        let token = &rest[1..end];
        let event = named_key(token)
            .ok_or_else(|| KeyScriptError::UnknownToken(token.to_string(), offset))?;
        events.push(event);
        offset += end + 1;
        rest = &rest[end + 1..];
    }

    Ok(events)
}

fn named_key(token: &str) -> Option<InputEvent> {
    let event = match token.to_ascii_lowercase().as_str() {
        "tab" => InputEvent::Tab,
        "s-tab" => InputEvent::ShiftTab,
        "enter" | "cr" => InputEvent::Enter,
        "esc" => InputEvent::Escape,
        "bs" => InputEvent::Backspace,
        "del" => InputEvent::Delete,
        "left" => InputEvent::CursorLeft,
        "right" => InputEvent::CursorRight,
        "home" => InputEvent::Home,
        "end" => InputEvent::End,
        "s-left" => InputEvent::ShiftLeft,
        "s-right" => InputEvent::ShiftRight,
        "s-home" => InputEvent::ShiftHome,
        "s-end" => InputEvent::ShiftEnd,
        "c-left" => InputEvent::CtrlLeft,
        "c-right" => InputEvent::CtrlRight,
        "space" => InputEvent::Char(' '),
        "c-a" => InputEvent::CtrlA,
        "c-v" => InputEvent::CtrlV,
        "lt" => InputEvent::Char('<'),
        _ => return None,
    };
    Some(event)
}
