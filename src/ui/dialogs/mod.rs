//! Dialog components
//!
//! Each dialog is a self-contained struct that owns its state and reports
//! outcomes to the host through its `DialogContext`.

mod dialog_context;
mod dialog_controller;
mod hyperlink_dialog;

pub use dialog_context::{DialogContext, DialogHost, DialogResult, HostEvent, RecordingHost};
pub use dialog_controller::DialogController;
pub use hyperlink_dialog::{DialogLabels, FocusSlot, HyperlinkDialog, SessionState};
