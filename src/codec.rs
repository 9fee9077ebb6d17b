//! `:blank:` href encoding.
//!
//! The document format has no field for link targets, so "open in a new
//! tab" rides along as a prefix on the href. The prefix never reaches a
//! visible field and is never doubled.

use std::borrow::Cow;

use crate::hyperlink::Hyperlink;

/// Prefix marking an href that opens in a new browsing context
pub const SENTINEL: &str = ":blank:";

/// Href as shown in the input field. Strips at most one leading sentinel.
pub fn decode_for_display(href: &str) -> &str {
    href.strip_prefix(SENTINEL).unwrap_or(href)
}

/// Whether a stored href asks for a new browsing context
pub fn opens_in_new_tab(href: &str) -> bool {
    href.starts_with(SENTINEL)
}

/// Bring `href` in line with `target`.
///
/// Idempotent: after one pass the sentinel is present iff the target is set.
/// Demotion strips every leading sentinel so a doubled prefix cannot
/// survive a second pass.
pub fn encode_for_storage(value: &Hyperlink) -> Hyperlink {
    match encode_href(&value.href, value.has_target()) {
        Cow::Borrowed(_) => value.clone(),
        Cow::Owned(href) => Hyperlink {
            href,
            ..value.clone()
        },
    }
}

fn encode_href(href: &str, new_tab: bool) -> Cow<'_, str> {
    match (new_tab, opens_in_new_tab(href)) {
        // target cleared but the marker is still there
        (false, true) => Cow::Owned(href.trim_start_matches(SENTINEL).to_string()),
        (true, false) => Cow::Owned(format!("{SENTINEL}{href}")),
        _ => Cow::Borrowed(href),
    }
}
