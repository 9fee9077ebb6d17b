//! End-to-end dialog flows as seen by a host editor.

use std::rc::Rc;

use link_dialog::input::{parse_key_script, InputEvent};
use link_dialog::ui::dialogs::{
    DialogContext, DialogController, DialogResult, HostEvent, HyperlinkDialog, RecordingHost,
};
use link_dialog::{Hyperlink, LinkField, SENTINEL, TARGET_BLANK};
use pretty_assertions::assert_eq;

fn replay(dialog: &mut HyperlinkDialog, ctx: &mut DialogContext, script: &str) -> DialogResult {
    let mut result = DialogResult::Open;
    for event in parse_key_script(script).unwrap() {
        result = dialog.handle_event(&event, ctx);
    }
    result
}

fn submitted(value: Hyperlink) -> HostEvent {
    HostEvent::Submit { value }
}

#[test]
fn test_new_link_is_submitted_plain() {
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host);
        dialog.open(&mut ctx);
        let result = replay(&mut dialog, &mut ctx, "https://example.com<enter>");
        assert_eq!(result, DialogResult::Closed);
    }
    assert_eq!(
        host.events,
        vec![submitted(Hyperlink::new("https://example.com", "", ""))]
    );
    assert!(!dialog.is_open());
}

#[test]
fn test_checking_new_tab_prefixes_sentinel() {
    let seed = Rc::new(Hyperlink::new("https://a.com", "A", ""));
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host).with_value(Some(&seed));
        dialog.open(&mut ctx);
        dialog.toggle_new_tab(&mut ctx);
        assert_eq!(dialog.confirm(&mut ctx), DialogResult::Closed);
    }
    assert_eq!(
        host.events,
        vec![submitted(Hyperlink::new(":blank:https://a.com", "A", TARGET_BLANK))]
    );
}

#[test]
fn test_checking_new_tab_by_keyboard() {
    let seed = Rc::new(Hyperlink::new("https://a.com", "A", ""));
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host).with_value(Some(&seed));
        dialog.open(&mut ctx);
        // href -> title -> checkbox, toggle, -> clear -> confirm
        replay(&mut dialog, &mut ctx, "<tab><tab><space><tab><tab><enter>");
    }
    assert_eq!(
        host.events,
        vec![submitted(Hyperlink::new(":blank:https://a.com", "A", TARGET_BLANK))]
    );
}

#[test]
fn test_cancel_with_committed_value_reverts() {
    let seed = Rc::new(Hyperlink::new(":blank:https://a.com", "A", TARGET_BLANK));
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host).with_value(Some(&seed));
        dialog.open(&mut ctx);
        replay(&mut dialog, &mut ctx, "<bs><bs><bs>");
        assert_eq!(dialog.handle_event(&InputEvent::Escape, &mut ctx), DialogResult::Closed);
    }
    let mut expected = Hyperlink::new(":blank:https://a.com", "A", TARGET_BLANK);
    expected.cancel = true;
    assert_eq!(host.events, vec![submitted(expected)]);
}

#[test]
fn test_cancel_fresh_dialog_only_closes() {
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host);
        dialog.open(&mut ctx);
        assert_eq!(dialog.cancel(&mut ctx), DialogResult::Closed);
    }
    assert_eq!(host.events, vec![HostEvent::Close]);
}

#[test]
fn test_cancel_after_typing_in_fresh_dialog_only_closes() {
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host);
        dialog.open(&mut ctx);
        replay(&mut dialog, &mut ctx, "https://a.com<esc>");
    }
    assert_eq!(host.events, vec![HostEvent::Close]);
}

#[test]
fn test_clear_always_closes_and_blanks() {
    let seed = Rc::new(Hyperlink::new("https://a.com", "A", ""));
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host).with_value(Some(&seed));
        dialog.open(&mut ctx);
        assert_eq!(dialog.clear(&mut ctx), DialogResult::Closed);
    }
    assert_eq!(host.events, vec![HostEvent::Close]);
    assert_eq!(dialog.value(), &Hyperlink::blank());
    assert!(dialog.committed().is_none());
    assert_eq!(dialog.display_href(), "");
    assert_eq!(dialog.display_title(), "");
    assert!(!dialog.new_tab_checked());
}

#[test]
fn test_unchecking_new_tab_strips_sentinel() {
    let seed = Rc::new(Hyperlink::new(":blank:https://a.com", "", TARGET_BLANK));
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host).with_value(Some(&seed));
        dialog.open(&mut ctx);
        dialog.toggle_new_tab(&mut ctx);
        dialog.confirm(&mut ctx);
    }
    assert_eq!(host.events, vec![submitted(Hyperlink::new("https://a.com", "", ""))]);
}

#[test]
fn test_editing_sentinel_href_keeps_single_prefix() {
    let seed = Rc::new(Hyperlink::new(":blank:https://a.com", "", TARGET_BLANK));
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host).with_value(Some(&seed));
        dialog.open(&mut ctx);
        replay(&mut dialog, &mut ctx, "/sale<enter>");
    }
    assert_eq!(
        host.events,
        vec![submitted(Hyperlink::new(":blank:https://a.com/sale", "", TARGET_BLANK))]
    );
}

#[test]
fn test_confirm_disabled_until_href_present() {
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host);
        dialog.open(&mut ctx);
        dialog.edit_field(LinkField::Title, "Only a title", &mut ctx);
        assert!(!dialog.can_confirm());
        assert_eq!(dialog.confirm(&mut ctx), DialogResult::Open);

        dialog.edit_field(LinkField::Href, "https://a.com", &mut ctx);
        assert!(dialog.can_confirm());
        dialog.edit_field(LinkField::Href, "", &mut ctx);
        assert!(!dialog.can_confirm());
        assert_eq!(dialog.confirm(&mut ctx), DialogResult::Open);
    }
    assert!(host.events.is_empty());
    assert!(dialog.is_open());
}

#[test]
fn test_reopen_with_same_value_after_submit_adopts_again() {
    let seed = Rc::new(Hyperlink::new("https://a.com", "A", ""));
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();

    let mut ctx = DialogContext::new(&mut host).with_value(Some(&seed));
    dialog.open(&mut ctx);
    replay(&mut dialog, &mut ctx, "x<enter>");
    assert!(!dialog.is_open());

    dialog.open(&mut ctx);
    assert_eq!(dialog.display_href(), "https://a.com");
    assert_eq!(dialog.cancel(&mut ctx), DialogResult::Closed);

    assert_eq!(
        host.drain(),
        vec![
            submitted(Hyperlink::new("https://a.comx", "A", "")),
            submitted(Hyperlink::new("https://a.com", "A", "").cancelled()),
        ]
    );
}

#[test]
fn test_pasted_sentinel_never_reaches_field_or_value() {
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host);
        dialog.open(&mut ctx);
        dialog.handle_event(&InputEvent::Paste(":blank:https://a.com".to_string()), &mut ctx);
        assert_eq!(dialog.display_href(), "https://a.com");
        assert_eq!(dialog.value().href, "https://a.com");
        assert!(!dialog.display_href().contains(SENTINEL));
        assert!(!dialog.new_tab_checked());
        assert_eq!(dialog.confirm(&mut ctx), DialogResult::Closed);
    }
    assert_eq!(host.events, vec![submitted(Hyperlink::new("https://a.com", "", ""))]);
}

#[test]
fn test_typed_sentinel_never_reaches_field_or_value() {
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host);
        dialog.open(&mut ctx);
        for event in parse_key_script(":blank:https://a.com").unwrap() {
            dialog.handle_event(&event, &mut ctx);
            assert!(!dialog.display_href().starts_with(SENTINEL));
            assert!(!dialog.value().href.starts_with(SENTINEL));
        }
        assert_eq!(dialog.display_href(), "https://a.com");
        assert_eq!(replay(&mut dialog, &mut ctx, "<enter>"), DialogResult::Closed);
    }
    assert_eq!(host.events, vec![submitted(Hyperlink::new("https://a.com", "", ""))]);
}

#[test]
fn test_pasted_sentinel_with_new_tab_gets_single_prefix() {
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host);
        dialog.open(&mut ctx);
        dialog.handle_event(&InputEvent::Paste(":blank::blank:https://a.com".to_string()), &mut ctx);
        dialog.toggle_new_tab(&mut ctx);
        assert_eq!(dialog.display_href(), "https://a.com");
        dialog.confirm(&mut ctx);
    }
    assert_eq!(
        host.events,
        vec![submitted(Hyperlink::new(":blank:https://a.com", "", TARGET_BLANK))]
    );
}

#[test]
fn test_sentinel_href_without_target_displays_bare_and_demotes() {
    let seed = Rc::new(Hyperlink::new(":blank:https://a.com", "A", ""));
    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host).with_value(Some(&seed));
        dialog.open(&mut ctx);
        assert_eq!(dialog.display_href(), "https://a.com");
        assert!(!dialog.new_tab_checked());
        assert_eq!(dialog.confirm(&mut ctx), DialogResult::Closed);
    }
    assert_eq!(host.events, vec![submitted(Hyperlink::new("https://a.com", "A", ""))]);
}
