//! Dialog field widgets
//!
//! - TextField: single-line text input
//! - Checkbox: boolean toggle
//! - Button: named action

mod button;
mod checkbox;
mod textfield;

pub use button::Button;
pub use checkbox::Checkbox;
pub use textfield::TextField;
