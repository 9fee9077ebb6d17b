//! link-dialog CLI
//!
//! Replays key scripts against the hyperlink dialog and exposes the
//! `:blank:` encoding for shell use.

use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use link_dialog::input::parse_key_script;
use link_dialog::ui::dialogs::{
    DialogContext, DialogController, DialogResult, HyperlinkDialog, RecordingHost,
};
use link_dialog::{decode_for_display, encode_for_storage, opens_in_new_tab, Hyperlink, TARGET_BLANK};

#[derive(Debug, Parser)]
#[command(name = "link-dialog", version, about = "Headless hyperlink dialog")]
struct Cli {
    /// Log transitions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the dialog, feed it keys and print host callbacks as JSON lines
    Replay {
        /// Seed value as JSON, e.g. '{"href":"https://a.com","title":"A"}'
        #[arg(long)]
        value: Option<String>,
        /// Key script, e.g. 'https://a.com<tab>Title<enter>'
        #[arg(long, default_value = "")]
        keys: String,
        /// Do not touch the system clipboard for <c-v>
        #[arg(long)]
        no_clipboard: bool,
    },
    /// Print the stored form of a hyperlink
    Encode {
        #[arg(long)]
        href: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        new_tab: bool,
    },
    /// Print the display form of a stored href
    Decode { href: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

/// What a still-open dialog shows, captions included
fn open_state(dialog: &HyperlinkDialog) -> serde_json::Value {
    serde_json::json!({
        "event": "open",
        "labels": dialog.labels(),
        "href": dialog.display_href(),
        "title": dialog.display_title(),
        "newTab": dialog.new_tab_checked(),
        "canConfirm": dialog.can_confirm(),
    })
}

fn replay(value: Option<&str>, keys: &str, no_clipboard: bool) -> Result<()> {
    let seed = value
        .map(|json| serde_json::from_str::<Hyperlink>(json).context("parsing --value"))
        .transpose()?
        .map(Rc::new);
    let events = parse_key_script(keys).context("parsing --keys")?;

    let mut clipboard = if no_clipboard {
        None
    } else {
        arboard::Clipboard::new()
            .map_err(|err| tracing::debug!(%err, "clipboard unavailable"))
            .ok()
    };

    let mut host = RecordingHost::new();
    let mut dialog = HyperlinkDialog::new();
    {
        let mut ctx = DialogContext::new(&mut host)
            .with_value(seed.as_ref())
            .with_clipboard(clipboard.as_mut());
        dialog.open(&mut ctx);
        for event in &events {
            if dialog.handle_event(event, &mut ctx) == DialogResult::Closed {
                break;
            }
        }
    }

    for event in host.drain() {
        println!("{}", serde_json::to_string(&event)?);
    }
    if dialog.is_open() {
        println!("{}", open_state(&dialog));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Replay {
            value,
            keys,
            no_clipboard,
        } => replay(value.as_deref(), &keys, no_clipboard)?,
        Command::Encode {
            href,
            title,
            new_tab,
        } => {
            let target = if new_tab { TARGET_BLANK } else { "" };
            let encoded = encode_for_storage(&Hyperlink::new(href, title, target));
            println!("{}", serde_json::to_string(&encoded)?);
        }
        Command::Decode { href } => {
            let decoded = serde_json::json!({
                "href": decode_for_display(&href),
                "newTab": opens_in_new_tab(&href),
            });
            println!("{decoded}");
        }
    }
    Ok(())
}
