//! Edited/committed hyperlink state for one dialog session.
//!
//! Values pushed by the host are `Rc<Hyperlink>` and compared by identity,
//! not by content: pushing an equal but freshly allocated value counts as
//! new data and is adopted.

use std::rc::Rc;

use crate::codec::SENTINEL;
use crate::hyperlink::{Hyperlink, LinkField, TARGET_BLANK};

/// Outcome of a reconcile step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciled {
    /// The external value was new and is now current and committed
    Adopted,
    /// Nothing to adopt
    Unchanged,
}

/// Holds the value being edited and the last value accepted from the host
#[derive(Debug)]
pub struct LinkValueStore {
    current: Rc<Hyperlink>,
    /// `None` until the host supplies a value; distinguishes a fresh dialog
    /// from one re-opened over an existing link.
    committed: Option<Rc<Hyperlink>>,
    /// Value installed by the last adopt or reset
    baseline: Rc<Hyperlink>,
}

impl Default for LinkValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkValueStore {
    pub fn new() -> Self {
        let blank = Rc::new(Hyperlink::blank());
        Self {
            current: Rc::clone(&blank),
            committed: None,
            baseline: blank,
        }
    }

    pub fn current(&self) -> &Hyperlink {
        &self.current
    }

    pub fn committed(&self) -> Option<&Hyperlink> {
        self.committed.as_deref()
    }

    /// Adopt `external` if it is not the value last seen
    pub fn reconcile(&mut self, external: Option<&Rc<Hyperlink>>) -> Reconciled {
        let Some(external) = external else {
            return Reconciled::Unchanged;
        };
        if self
            .committed
            .as_ref()
            .is_some_and(|seen| Rc::ptr_eq(seen, external))
        {
            return Reconciled::Unchanged;
        }
        tracing::debug!(href = %external.href, "adopting external hyperlink");
        self.current = Rc::clone(external);
        self.committed = Some(Rc::clone(external));
        self.baseline = Rc::clone(external);
        Reconciled::Adopted
    }

    /// Replace one field of the latest current value
    pub fn apply_edit(&mut self, field: LinkField, text: impl Into<String>) {
        let text = text.into();
        tracing::trace!(field = field.name(), len = text.len(), "field edit");
        self.current = Rc::new(self.current.with_field(field, text));
    }

    /// Flip the target between `""` and `"_blank"`, leaving href as typed
    pub fn toggle_new_tab(&mut self) {
        let target = if self.current.has_target() { "" } else { TARGET_BLANK };
        self.apply_edit(LinkField::Target, target);
    }

    /// Back to a blank, uncommitted session
    pub fn reset(&mut self) {
        let blank = Rc::new(Hyperlink::blank());
        self.current = Rc::clone(&blank);
        self.committed = None;
        self.baseline = blank;
    }

    /// No edit since the last adopt or reset
    pub fn is_pristine(&self) -> bool {
        Rc::ptr_eq(&self.current, &self.baseline)
    }

    pub fn is_current_valid(&self) -> bool {
        is_valid(&self.current)
    }
}

/// A hyperlink can be submitted once its displayed href is non-empty.
///
/// An href made only of `:blank:` prefixes shows as empty and is rejected.
pub fn is_valid(value: &Hyperlink) -> bool {
    !value.href.trim_start_matches(SENTINEL).is_empty()
}
