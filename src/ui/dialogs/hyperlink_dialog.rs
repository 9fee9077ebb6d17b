//! Hyperlink dialog.
//!
//! Captures href, title and the "open in new tab" flag. The href field
//! never shows the `:blank:` sentinel: seeded values are shown stripped,
//! and a sentinel typed or pasted at the start of the field is dropped
//! before it is stored. The stored href is re-encoded exactly once, on
//! confirm.
//!
//! Every entry point reconciles against the host's value first, so a new
//! value pushed while the dialog is open replaces whatever was being
//! edited.

use serde::Serialize;

use crate::codec::{encode_for_storage, SENTINEL};
use crate::hyperlink::{Hyperlink, LinkField, TARGET_BLANK};
use crate::input::InputEvent;
use crate::store::{LinkValueStore, Reconciled};
use crate::ui::widget::{EventResult, Widget};
use crate::ui::widgets::{Button, Checkbox, TextField};

use super::{DialogContext, DialogController, DialogResult};

/// Captions shown by the hyperlink dialog
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogLabels {
    pub title: String,
    pub href_label: String,
    pub href_helper: String,
    pub title_label: String,
    pub title_helper: String,
    pub new_tab_label: String,
    pub new_tab_helper: String,
    pub clear: String,
    pub confirm: String,
}

impl Default for DialogLabels {
    fn default() -> Self {
        Self {
            title: "Hyperlink".to_string(),
            href_label: "Web Address".to_string(),
            href_helper: "Example: https://www.storefront.com/black-friday".to_string(),
            title_label: "Title".to_string(),
            title_helper: "Example: Black Friday Sale".to_string(),
            new_tab_label: "Opens in new tab?".to_string(),
            new_tab_helper: "Mark this box as checked if you'd like this CTA to open a new tab \
                             in the user's browser. Good for off site links."
                .to_string(),
            clear: "Clear".to_string(),
            confirm: "Confirm".to_string(),
        }
    }
}

/// Focusable slots, in Tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusSlot {
    Href,
    Title,
    NewTab,
    Clear,
    Confirm,
}

const FOCUS_ORDER: [FocusSlot; 5] = [
    FocusSlot::Href,
    FocusSlot::Title,
    FocusSlot::NewTab,
    FocusSlot::Clear,
    FocusSlot::Confirm,
];

/// Where the edit session stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    /// Open with no edits since the last adopt or reset
    Pristine,
    Dirty,
}

pub struct HyperlinkDialog {
    open: bool,
    labels: DialogLabels,
    store: LinkValueStore,
    href_field: TextField,
    title_field: TextField,
    new_tab: Checkbox,
    clear_button: Button,
    confirm_button: Button,
    focus: FocusSlot,
}

impl Default for HyperlinkDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl HyperlinkDialog {
    pub fn new() -> Self {
        Self::with_labels(DialogLabels::default())
    }

    pub fn with_labels(labels: DialogLabels) -> Self {
        let mut dialog = Self {
            open: false,
            href_field: TextField::new("href"),
            title_field: TextField::new("title"),
            new_tab: Checkbox::new("new_tab"),
            clear_button: Button::new("clear"),
            confirm_button: Button::new("confirm"),
            labels,
            store: LinkValueStore::new(),
            focus: FocusSlot::Href,
        };
        dialog.refresh_enablement();
        dialog
    }

    pub fn labels(&self) -> &DialogLabels {
        &self.labels
    }

    /// The value being edited (href still in stored form)
    pub fn value(&self) -> &Hyperlink {
        self.store.current()
    }

    /// Last value accepted from the host, if any
    pub fn committed(&self) -> Option<&Hyperlink> {
        self.store.committed()
    }

    /// Href as the user sees it
    pub fn display_href(&self) -> &str {
        self.href_field.text()
    }

    pub fn display_title(&self) -> &str {
        self.title_field.text()
    }

    pub fn new_tab_checked(&self) -> bool {
        self.new_tab.checked()
    }

    pub fn focus(&self) -> FocusSlot {
        self.focus
    }

    pub fn session_state(&self) -> SessionState {
        if !self.open {
            SessionState::Closed
        } else if self.store.is_pristine() {
            SessionState::Pristine
        } else {
            SessionState::Dirty
        }
    }

    /// Whether Confirm is enabled
    pub fn can_confirm(&self) -> bool {
        self.store.is_current_valid()
    }

    /// Replace one field, as if the user had typed it
    pub fn edit_field(&mut self, field: LinkField, text: &str, ctx: &mut DialogContext) {
        if !self.open {
            return;
        }
        self.sync(ctx);
        match field {
            LinkField::Href => {
                self.show_href(text);
                let typed = self.href_field.text().to_string();
                self.store.apply_edit(field, typed);
            }
            LinkField::Title => {
                self.title_field.set_text(text);
                self.store.apply_edit(field, text);
            }
            LinkField::Target => {
                self.new_tab.set_checked(text == TARGET_BLANK);
                self.store.apply_edit(field, text);
            }
        }
        self.refresh_enablement();
    }

    /// Flip "open in new tab"
    pub fn toggle_new_tab(&mut self, ctx: &mut DialogContext) {
        if !self.open {
            return;
        }
        self.sync(ctx);
        self.apply_new_tab_toggle();
    }

    /// Reset everything and close without emitting a value
    pub fn clear(&mut self, ctx: &mut DialogContext) -> DialogResult {
        if !self.open {
            return DialogResult::Closed;
        }
        self.sync(ctx);
        self.do_clear(ctx)
    }

    /// Abandon editing. If a value was committed it is handed back tagged
    /// with `cancel`, otherwise the host just hears `on_close`.
    pub fn cancel(&mut self, ctx: &mut DialogContext) -> DialogResult {
        if !self.open {
            return DialogResult::Closed;
        }
        self.sync(ctx);
        self.do_cancel(ctx)
    }

    /// Encode and submit the current value. A no-op while the href is
    /// empty.
    pub fn confirm(&mut self, ctx: &mut DialogContext) -> DialogResult {
        if !self.open {
            return DialogResult::Closed;
        }
        self.sync(ctx);
        self.do_confirm(ctx)
    }

    fn sync(&mut self, ctx: &DialogContext) {
        if self.store.reconcile(ctx.value) == Reconciled::Adopted {
            self.load_fields();
        }
        self.refresh_enablement();
    }

    /// Push store values into the field widgets
    fn load_fields(&mut self) {
        let current = self.store.current().clone();
        self.show_href(&current.href);
        self.title_field.set_text(current.title);
        self.new_tab.set_checked(current.target == TARGET_BLANK);
    }

    fn show_href(&mut self, href: &str) {
        self.href_field.set_text(href);
        self.href_field.trim_leading(SENTINEL);
    }

    fn refresh_enablement(&mut self) {
        let valid = self.store.is_current_valid();
        self.confirm_button.set_enabled(valid);
        if !valid && self.focus == FocusSlot::Confirm {
            self.set_focus_slot(FocusSlot::Href);
        }
    }

    fn apply_new_tab_toggle(&mut self) {
        self.store.toggle_new_tab();
        self.new_tab
            .set_checked(self.store.current().target == TARGET_BLANK);
        self.refresh_enablement();
    }

    fn widget_mut(&mut self, slot: FocusSlot) -> &mut dyn Widget {
        match slot {
            FocusSlot::Href => &mut self.href_field,
            FocusSlot::Title => &mut self.title_field,
            FocusSlot::NewTab => &mut self.new_tab,
            FocusSlot::Clear => &mut self.clear_button,
            FocusSlot::Confirm => &mut self.confirm_button,
        }
    }

    fn set_focus_slot(&mut self, slot: FocusSlot) {
        for s in FOCUS_ORDER {
            self.widget_mut(s).set_focus(s == slot);
        }
        self.focus = slot;
    }

    /// Move focus to the next focusable slot, wrapping around
    fn cycle_focus(&mut self, forward: bool) {
        let len = FOCUS_ORDER.len();
        let start = FOCUS_ORDER
            .iter()
            .position(|&s| s == self.focus)
            .unwrap_or(0);
        for step in 1..len {
            let idx = if forward {
                (start + step) % len
            } else {
                (start + len - step) % len
            };
            let slot = FOCUS_ORDER[idx];
            if self.widget_mut(slot).focusable() {
                self.set_focus_slot(slot);
                return;
            }
        }
    }

    /// End the session: blank state, fields emptied, dialog hidden
    fn finish(&mut self) {
        self.store.reset();
        self.load_fields();
        self.refresh_enablement();
        self.set_focus_slot(FocusSlot::Href);
        self.open = false;
    }

    fn do_clear(&mut self, ctx: &mut DialogContext) -> DialogResult {
        tracing::debug!("hyperlink dialog cleared");
        self.finish();
        ctx.host.on_close();
        DialogResult::Closed
    }

    fn do_cancel(&mut self, ctx: &mut DialogContext) -> DialogResult {
        let committed = self.store.committed().cloned();
        self.finish();
        match committed {
            Some(previous) => {
                tracing::debug!(href = %previous.href, "hyperlink edit cancelled, reverting");
                ctx.host.on_submit(previous.cancelled());
            }
            None => {
                tracing::debug!("hyperlink dialog dismissed");
                ctx.host.on_close();
            }
        }
        DialogResult::Closed
    }

    fn do_confirm(&mut self, ctx: &mut DialogContext) -> DialogResult {
        if !self.store.is_current_valid() {
            tracing::debug!("confirm rejected: href is empty");
            return DialogResult::Open;
        }
        let encoded = encode_for_storage(self.store.current());
        tracing::debug!(href = %encoded.href, target = %encoded.target, "hyperlink submitted");
        self.finish();
        ctx.host.on_submit(encoded);
        DialogResult::Closed
    }

    fn paste_event(&self, ctx: &mut DialogContext) -> Option<InputEvent> {
        if !matches!(self.focus, FocusSlot::Href | FocusSlot::Title) {
            return None;
        }
        ctx.clipboard_text().map(InputEvent::Paste)
    }
}

impl DialogController for HyperlinkDialog {
    fn open(&mut self, ctx: &mut DialogContext) {
        self.open = true;
        self.sync(ctx);
        self.set_focus_slot(FocusSlot::Href);
        tracing::debug!(state = ?self.session_state(), "hyperlink dialog opened");
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut DialogContext) -> DialogResult {
        if !self.open {
            return DialogResult::Closed;
        }
        self.sync(ctx);

        let pasted;
        let event = match event {
            InputEvent::Escape => return self.do_cancel(ctx),
            InputEvent::Tab => {
                self.cycle_focus(true);
                return DialogResult::Open;
            }
            InputEvent::ShiftTab => {
                self.cycle_focus(false);
                return DialogResult::Open;
            }
            InputEvent::CtrlV => match self.paste_event(ctx) {
                Some(ev) => {
                    pasted = ev;
                    &pasted
                }
                None => return DialogResult::Open,
            },
            other => other,
        };

        let result = self.widget_mut(self.focus).handle_event(event);
        if let EventResult::Action(action) = result {
            match action.as_str() {
                "href_change" => {
                    if self.href_field.trim_leading(SENTINEL) {
                        tracing::debug!("dropped sentinel typed into href field");
                    }
                    let text = self.href_field.text().to_string();
                    self.store.apply_edit(LinkField::Href, text);
                }
                "title_change" => {
                    let text = self.title_field.text().to_string();
                    self.store.apply_edit(LinkField::Title, text);
                }
                "new_tab" => self.apply_new_tab_toggle(),
                "href_submit" | "title_submit" | "confirm" => return self.do_confirm(ctx),
                "clear" => return self.do_clear(ctx),
                _ => {}
            }
        }
        self.refresh_enablement();
        DialogResult::Open
    }
}
