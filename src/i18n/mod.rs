//! User-visible strings.
//!
//! All copy goes through a message-key catalog so the view never hardcodes
//! text. Help-text templates can embed `<tag>…</tag>` fragments; the view
//! decides how each tag renders (hyperlink, code span), keeping the catalog
//! free of layout concerns.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

static CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Shared form chrome
        ("save", "Save Changes"),
        ("saving", "Saving…"),
        ("retry", "Retry"),
        ("settings-load-failed", "Failed to load notification settings"),
        ("window-title", "Notification Preferences"),
        // Discord form
        (
            "discord-settings-saved",
            "Discord notification settings saved successfully!",
        ),
        (
            "discord-settings-failed",
            "Discord notification settings failed to save.",
        ),
        ("enable-discord", "Enable Mentions"),
        ("discord-id", "User ID"),
        (
            "discord-id-tip",
            "The <link>ID number</link> for your user account",
        ),
        ("validation-discord-id", "You must provide a valid user ID"),
        // Telegram form
        (
            "telegram-settings-saved",
            "Telegram notification settings saved successfully!",
        ),
        (
            "telegram-settings-failed",
            "Telegram notification settings failed to save.",
        ),
        ("enable-telegram", "Enable Notifications"),
        ("telegram-chat-id", "Chat ID"),
        (
            "telegram-chat-id-tip",
            "Add <bot>@get_id_bot</bot> to the chat",
        ),
        (
            "telegram-chat-id-tip-long",
            "<start>Start a chat</start>, add <bot>@get_id_bot</bot>, and issue the <code>/my_id</code> command",
        ),
        ("send-silently", "Send Silently"),
        ("send-silently-description", "Send notifications with no sound"),
        (
            "validation-telegram-chat-id",
            "You must provide a valid chat ID",
        ),
    ])
});

/// Look up a message by key. Unknown keys fall back to the key itself so a
/// missing entry is visible rather than fatal.
pub fn text(key: &'static str) -> &'static str {
    match CATALOG.get(key).copied() {
        Some(message) => message,
        None => {
            warn!("[pingarr:i18n] Missing message key: {}", key);
            key
        }
    }
}

/// One piece of a tagged template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// `<tag>content</tag>`; the view maps the tag name to a fragment
    Tagged { tag: &'a str, content: &'a str },
}

/// Split a template into plain-text and tagged segments.
///
/// Tags do not nest. Anything that does not form a complete
/// `<tag>…</tag>` pair stays literal text.
pub fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = template;
    let mut search_from = 0;

    loop {
        let Some(open) = rest[search_from..].find('<').map(|i| search_from + i) else {
            break;
        };

        let parsed = parse_open_tag(&rest[open..]).and_then(|(tag, after_open)| {
            let close = format!("</{tag}>");
            after_open
                .find(&close)
                .map(|len| (tag, &after_open[..len], &after_open[len + close.len()..]))
        });

        match parsed {
            Some((tag, content, after_close)) => {
                if open > 0 {
                    out.push(Segment::Text(&rest[..open]));
                }
                out.push(Segment::Tagged { tag, content });
                rest = after_close;
                search_from = 0;
            }
            // Stray '<'; keep scanning past it
            None => search_from = open + 1,
        }
    }

    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}

/// Parse `<name>` at the start of the input; returns the tag name and the
/// remainder after the `>`
fn parse_open_tag(input: &str) -> Option<(&str, &str)> {
    let inner = input.strip_prefix('<')?;
    let end = inner.find('>')?;
    let tag = &inner[..end];
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((tag, &inner[end + 1..]))
}
