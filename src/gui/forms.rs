//! Form views for the notification settings tabs.
//!
//! Pure rendering over the form controllers: field rows, inline validation
//! errors, help tips with embedded links, and the save action. Submission
//! logic lives in the controllers.

use std::sync::mpsc::Sender;

use egui::{Align, Button, Layout, RichText, TextEdit, TextStyle, Ui};

use crate::api::SyncRequest;
use crate::form::{validate_discord_id, validate_telegram_chat_id, DiscordForm, TelegramForm};
use crate::i18n::{self, Segment};

use super::app::{ACCENT_RED, TEXT_MUTED};

const FIELD_WIDTH: f32 = 280.0;

const DISCORD_ID_HELP_URL: &str =
    "https://support.discord.com/hc/en-us/articles/206346498-Where-can-I-find-my-User-Server-Message-ID-";
const GET_ID_BOT_URL: &str = "https://telegram.me/get_id_bot";

/// How a `<tag>` in a help-text template renders
enum TagFragment {
    Link(String),
    Code,
}

/// Discord notification settings form
pub fn discord_form(
    ui: &mut Ui,
    form: &mut DiscordForm,
    user_id: u64,
    tx: &Sender<SyncRequest>,
) {
    ui.checkbox(&mut form.enable_discord, i18n::text("enable-discord"));
    ui.add_space(10.0);

    ui.label(RichText::new(i18n::text("discord-id")).color(TEXT_MUTED));
    render_tip(
        ui,
        i18n::text("discord-id-tip"),
        &[("link", TagFragment::Link(DISCORD_ID_HELP_URL.to_string()))],
    );

    let response = ui.add(
        TextEdit::singleline(&mut form.discord_id)
            .font(TextStyle::Monospace)
            .desired_width(FIELD_WIDTH),
    );
    if response.changed() {
        form.discord_id_touched = true;
        form.error = validate_discord_id(&form.discord_id);
    }
    render_field_error(ui, form.visible_error().map(|e| e.message_key()));

    ui.add_space(14.0);
    if save_button(ui, form.is_submitting()) {
        form.submit(user_id, tx);
    }
}

/// Telegram notification settings form
pub fn telegram_form(
    ui: &mut Ui,
    form: &mut TelegramForm,
    user_id: u64,
    bot_username: Option<&str>,
    tx: &Sender<SyncRequest>,
) {
    // The checkbox reflects membership in the shared agent set, not a
    // plain boolean field
    let mut enabled = form.telegram_enabled();
    if ui
        .checkbox(&mut enabled, i18n::text("enable-telegram"))
        .changed()
    {
        form.toggle_telegram();
        if form.chat_id_touched {
            form.error = validate_telegram_chat_id(&form.telegram_chat_id, form.telegram_enabled());
        }
    }
    ui.add_space(10.0);

    ui.label(RichText::new(i18n::text("telegram-chat-id")).color(TEXT_MUTED));
    match bot_username {
        Some(username) => render_tip(
            ui,
            i18n::text("telegram-chat-id-tip-long"),
            &[
                (
                    "start",
                    TagFragment::Link(format!("https://telegram.me/{username}")),
                ),
                ("bot", TagFragment::Link(GET_ID_BOT_URL.to_string())),
                ("code", TagFragment::Code),
            ],
        ),
        None => render_tip(
            ui,
            i18n::text("telegram-chat-id-tip"),
            &[("bot", TagFragment::Link(GET_ID_BOT_URL.to_string()))],
        ),
    }

    let response = ui.add(
        TextEdit::singleline(&mut form.telegram_chat_id)
            .font(TextStyle::Monospace)
            .desired_width(FIELD_WIDTH),
    );
    if response.changed() {
        form.chat_id_touched = true;
        form.error = validate_telegram_chat_id(&form.telegram_chat_id, form.telegram_enabled());
    }
    render_field_error(ui, form.visible_error().map(|e| e.message_key()));

    ui.add_space(10.0);
    ui.checkbox(
        &mut form.telegram_send_silently,
        i18n::text("send-silently"),
    );
    ui.label(
        RichText::new(i18n::text("send-silently-description"))
            .color(TEXT_MUTED)
            .small(),
    );

    ui.add_space(14.0);
    if save_button(ui, form.is_submitting()) {
        form.submit(user_id, tx);
    }
}

/// Banner shown above the form when a refetch failed; returns true when
/// the user asked to retry
pub fn error_banner(ui: &mut Ui, message: &str) -> bool {
    let mut retry = false;
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(i18n::text("settings-load-failed"))
                .color(ACCENT_RED)
                .small(),
        );
        ui.label(RichText::new(message).color(TEXT_MUTED).small());
        retry = ui.small_button(i18n::text("retry")).clicked();
    });
    retry
}

/// Right-aligned save button, disabled while a write is in flight;
/// returns true on click
fn save_button(ui: &mut Ui, submitting: bool) -> bool {
    let label = if submitting {
        i18n::text("saving")
    } else {
        i18n::text("save")
    };

    let mut clicked = false;
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        clicked = ui
            .add_enabled(!submitting, Button::new(label))
            .clicked();
    });
    clicked
}

/// Inline validation error under the field it belongs to
fn render_field_error(ui: &mut Ui, message_key: Option<&'static str>) {
    if let Some(key) = message_key {
        ui.label(RichText::new(i18n::text(key)).color(ACCENT_RED).small());
    }
}

/// Render a help-text template, mapping each `<tag>` to its fragment
fn render_tip(ui: &mut Ui, template: &str, tags: &[(&str, TagFragment)]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        for segment in i18n::segments(template) {
            match segment {
                Segment::Text(text) => {
                    ui.label(RichText::new(text).color(TEXT_MUTED).small());
                }
                Segment::Tagged { tag, content } => {
                    match tags.iter().find(|(name, _)| *name == tag).map(|(_, f)| f) {
                        Some(TagFragment::Link(url)) => {
                            ui.hyperlink_to(RichText::new(content).small(), url);
                        }
                        Some(TagFragment::Code) => {
                            ui.label(
                                RichText::new(content)
                                    .color(TEXT_MUTED)
                                    .small()
                                    .monospace(),
                            );
                        }
                        // Unmapped tags degrade to plain text
                        None => {
                            ui.label(RichText::new(content).color(TEXT_MUTED).small());
                        }
                    }
                }
            }
        }
    });
    ui.add_space(4.0);
}
