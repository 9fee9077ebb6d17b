//! Headless dialog UI: field widgets and the dialogs built from them

pub mod dialogs;
pub mod widget;
pub mod widgets;

pub use dialogs::{DialogContext, DialogController, DialogHost, DialogResult, HyperlinkDialog};
pub use widget::{EventResult, Widget};
