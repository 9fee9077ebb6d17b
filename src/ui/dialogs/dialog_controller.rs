//! Dialog controller trait.
//!
//! The host owns visibility: it opens the dialog, routes events to it while
//! it is open, and learns the outcome through the `DialogHost` in the
//! context.

use crate::input::InputEvent;

use super::{DialogContext, DialogResult};

/// Controller trait that all dialogs implement.
pub trait DialogController {
    /// Open the dialog, reconciling against the host's current value
    fn open(&mut self, ctx: &mut DialogContext);

    /// Check if the dialog is currently open
    fn is_open(&self) -> bool;

    /// Hide the dialog without resolving it. The edit session survives.
    fn close(&mut self);

    /// Handle an input event, reporting outcomes via ctx
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut DialogContext) -> DialogResult;
}
