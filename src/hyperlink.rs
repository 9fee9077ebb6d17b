//! Hyperlink value object shared with the host editor

use serde::{Deserialize, Serialize};

/// Target value meaning "open in a new browsing context"
pub const TARGET_BLANK: &str = "_blank";

/// A hyperlink as stored by the editor.
///
/// `href` holds the encoded form and may carry the `:blank:` prefix.
/// `cancel` is only set on the reversion emitted when editing an
/// existing link is abandoned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub target: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cancel: bool,
}

impl Hyperlink {
    pub fn new(href: impl Into<String>, title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: title.into(),
            target: target.into(),
            cancel: false,
        }
    }

    /// The empty `{href, title, target}` triple
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether the target asks for a new tab
    pub fn has_target(&self) -> bool {
        !self.target.is_empty()
    }

    /// Copy of this value tagged as an abandoned edit
    pub fn cancelled(&self) -> Self {
        Self {
            cancel: true,
            ..self.clone()
        }
    }

    /// Copy with exactly one field replaced
    pub fn with_field(&self, field: LinkField, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        let text = text.into();
        match field {
            LinkField::Href => next.href = text,
            LinkField::Title => next.title = text,
            LinkField::Target => next.target = text,
        }
        next
    }
}

/// Editable fields of a hyperlink
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkField {
    Href,
    Title,
    Target,
}

impl LinkField {
    pub fn name(self) -> &'static str {
        match self {
            LinkField::Href => "href",
            LinkField::Title => "title",
            LinkField::Target => "target",
        }
    }
}
