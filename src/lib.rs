//! Headless hyperlink dialog for rich-text editors.
//!
//! Captures a link's href, title and "open in new tab" flag. The flag is
//! stored inline as a `:blank:` prefix on the href, since the editor's
//! document format has no field for it.

pub mod banner;
pub mod codec;
pub mod hyperlink;
pub mod input;
pub mod store;
pub mod ui;

pub use codec::{decode_for_display, encode_for_storage, opens_in_new_tab, SENTINEL};
pub use hyperlink::{Hyperlink, LinkField, TARGET_BLANK};
pub use store::{is_valid, LinkValueStore, Reconciled};
