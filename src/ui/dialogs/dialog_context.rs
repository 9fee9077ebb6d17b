//! Dialog context - the host boundary seen by a dialog.
//!
//! Dialogs do not return values to their caller. They receive a
//! DialogContext carrying the host's seed value and report outcomes by
//! calling back into the host.

use std::rc::Rc;

use serde::Serialize;

use crate::hyperlink::Hyperlink;

/// Callbacks a host editor provides to the hyperlink dialog
pub trait DialogHost {
    /// The dialog was dismissed with no resulting value change
    fn on_close(&mut self);

    /// The dialog resolved to a value: a fresh encoded link, or a
    /// `cancel`-tagged reversion of the last committed one
    fn on_submit(&mut self, value: Hyperlink);
}

/// Context passed to dialogs for open and handle_event.
pub struct DialogContext<'a> {
    /// Seed value supplied by the host, compared by identity
    pub value: Option<&'a Rc<Hyperlink>>,
    pub host: &'a mut dyn DialogHost,
    pub clipboard: Option<&'a mut arboard::Clipboard>,
}

impl<'a> DialogContext<'a> {
    pub fn new(host: &'a mut dyn DialogHost) -> Self {
        Self {
            value: None,
            host,
            clipboard: None,
        }
    }

    pub fn with_value(mut self, value: Option<&'a Rc<Hyperlink>>) -> Self {
        self.value = value;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Option<&'a mut arboard::Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Text currently on the system clipboard, if any
    pub fn clipboard_text(&mut self) -> Option<String> {
        let clipboard = self.clipboard.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::debug!(%err, "clipboard read failed");
                None
            }
        }
    }
}

/// Result from dialog event handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DialogResult {
    /// Dialog is still open, no action needed
    #[default]
    Open,
    /// Dialog closed
    Closed,
}

/// A host callback, as recorded by `RecordingHost`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum HostEvent {
    Close,
    Submit { value: Hyperlink },
}

/// Host that records every callback in order
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded events, leaving the log empty
    pub fn drain(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }
}

impl DialogHost for RecordingHost {
    fn on_close(&mut self) {
        self.events.push(HostEvent::Close);
    }

    fn on_submit(&mut self, value: Hyperlink) {
        self.events.push(HostEvent::Submit { value });
    }
}
