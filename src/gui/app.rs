//! Main GUI application using egui
//!
//! Two tabs, one per notification channel:
//! - Discord: mention toggle + user ID
//! - Telegram: channel toggle (agent set), chat ID, silent delivery
//!
//! The app never talks HTTP itself; it sends `SyncRequest`s to the worker
//! and drains `SyncEvent`s at the top of every frame.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use eframe::egui::{self, Color32, RichText};
use tracing::info;

use crate::api::{FormKind, SyncEvent, SyncRequest};
use crate::config::Config;
use crate::domain::{NotificationSettings, PublicServerSettings};
use crate::form::{DiscordForm, TelegramForm};
use crate::i18n;

use super::forms;
use super::toast::{ToastKind, ToastQueue};

// ═══════════════════════════════════════════════════════════════════════════
// THEME: "Slate" - muted dark panel look
// ═══════════════════════════════════════════════════════════════════════════

/// Window background
pub(super) const BG_PRIMARY: Color32 = Color32::from_rgb(24, 26, 31);
/// Panel and toast background
pub(super) const BG_SECONDARY: Color32 = Color32::from_rgb(32, 35, 42);

/// Primary text
pub(super) const TEXT_PRIMARY: Color32 = Color32::from_rgb(225, 228, 235);
/// Secondary text (labels, tips)
pub(super) const TEXT_MUTED: Color32 = Color32::from_rgb(140, 146, 160);

/// Accent colors
pub(super) const ACCENT_GREEN: Color32 = Color32::from_rgb(95, 210, 130);
pub(super) const ACCENT_RED: Color32 = Color32::from_rgb(240, 95, 95);

/// Which form is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Discord,
    Telegram,
}

/// Main application state
pub struct PingarrApp {
    /// Requests to the sync worker
    request_tx: Sender<SyncRequest>,
    /// Events from the sync worker
    event_rx: Receiver<SyncEvent>,
    /// Resolved user id; settings reads wait on this
    user_id: Option<u64>,
    /// Server-wide read-only settings (help-text selection, window title)
    public: PublicServerSettings,
    /// Last fetched settings snapshot
    snapshot: Option<NotificationSettings>,
    /// Most recent load failure, if any
    load_error: Option<String>,
    discord: DiscordForm,
    telegram: TelegramForm,
    toasts: ToastQueue,
    tab: Tab,
}

impl PingarrApp {
    pub fn new(
        config: &Config,
        request_tx: Sender<SyncRequest>,
        event_rx: Receiver<SyncEvent>,
    ) -> Self {
        // Kick off the initial reads. The settings fetch is keyed by the
        // user id, so it waits until the identity is known.
        match config.server.user_id {
            Some(user_id) => {
                let _ = request_tx.send(SyncRequest::FetchSettings { user_id });
            }
            None => {
                let _ = request_tx.send(SyncRequest::ResolveIdentity);
            }
        }
        let _ = request_tx.send(SyncRequest::FetchPublicSettings);

        Self {
            request_tx,
            event_rx,
            user_id: config.server.user_id,
            public: PublicServerSettings::default(),
            snapshot: None,
            load_error: None,
            discord: DiscordForm::default(),
            telegram: TelegramForm::default(),
            toasts: ToastQueue::default(),
            tab: Tab::Discord,
        }
    }

    /// Apply all pending sync events
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                SyncEvent::IdentityResolved(user) => {
                    info!("[pingarr:gui] Managing settings for user #{}", user.id);
                    self.user_id = Some(user.id);
                    let _ = self.request_tx.send(SyncRequest::FetchSettings {
                        user_id: user.id,
                    });
                }
                SyncEvent::IdentityFailed(message) => {
                    self.load_error = Some(message);
                }
                SyncEvent::PublicSettings(public) => {
                    self.public = public;
                }
                SyncEvent::Snapshot(snapshot) => {
                    // Server truth replaces local field state wholesale
                    self.load_error = None;
                    self.discord.reset(&snapshot);
                    self.telegram.reset(&snapshot);
                    self.snapshot = Some(snapshot);
                }
                SyncEvent::FetchFailed(message) => {
                    self.load_error = Some(message);
                }
                SyncEvent::SubmitFinished { form, result } => {
                    self.on_submit_finished(form, result);
                }
            }
        }
    }

    fn on_submit_finished(&mut self, form: FormKind, result: Result<(), String>) {
        let (saved_key, failed_key) = match form {
            FormKind::Discord => ("discord-settings-saved", "discord-settings-failed"),
            FormKind::Telegram => ("telegram-settings-saved", "telegram-settings-failed"),
        };

        match result {
            Ok(()) => self.toasts.push(ToastKind::Success, i18n::text(saved_key)),
            Err(message) => {
                info!("[pingarr:gui] Save failed: {}", message);
                self.toasts.push(ToastKind::Error, i18n::text(failed_key));
            }
        }

        // Reconcile with server truth regardless of outcome
        if let Some(user_id) = self.user_id {
            match form {
                FormKind::Discord => self.discord.finish_submit(user_id, &self.request_tx),
                FormKind::Telegram => self.telegram.finish_submit(user_id, &self.request_tx),
            }
        }
    }

    fn render_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::Discord, "Discord");
            ui.selectable_value(&mut self.tab, Tab::Telegram, "Telegram");
        });
        ui.separator();
    }

    fn render_loading(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.spinner();
        });
    }

    /// Load failures get an explicit, retryable panel instead of an empty
    /// form
    fn render_load_error(&mut self, ui: &mut egui::Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(
                RichText::new(i18n::text("settings-load-failed"))
                    .color(ACCENT_RED)
                    .size(15.0),
            );
            ui.add_space(4.0);
            ui.label(RichText::new(message).color(TEXT_MUTED).small());
            ui.add_space(12.0);
            if ui.button(i18n::text("retry")).clicked() {
                self.retry_load();
            }
        });
    }

    fn retry_load(&mut self) {
        self.load_error = None;
        match self.user_id {
            Some(user_id) => {
                let _ = self.request_tx.send(SyncRequest::FetchSettings { user_id });
            }
            None => {
                let _ = self.request_tx.send(SyncRequest::ResolveIdentity);
            }
        }
    }

    fn render_forms(&mut self, ui: &mut egui::Ui) {
        let Some(user_id) = self.user_id else {
            return;
        };

        // A failed refetch keeps the last snapshot on screen with a banner
        if let Some(message) = self.load_error.clone() {
            if forms::error_banner(ui, &message) {
                self.retry_load();
            }
            ui.add_space(8.0);
        }

        match self.tab {
            Tab::Discord => {
                forms::discord_form(ui, &mut self.discord, user_id, &self.request_tx);
            }
            Tab::Telegram => {
                forms::telegram_form(
                    ui,
                    &mut self.telegram,
                    user_id,
                    self.public.telegram_bot_username.as_deref(),
                    &self.request_tx,
                );
            }
        }
    }
}

impl eframe::App for PingarrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(TEXT_PRIMARY);

                if let Some(title) = &self.public.application_title {
                    ui.label(RichText::new(title).color(TEXT_MUTED).small());
                }
                ui.heading(i18n::text("window-title"));
                ui.add_space(8.0);

                self.render_tabs(ui);
                ui.add_space(8.0);

                if self.snapshot.is_some() {
                    self.render_forms(ui);
                } else if let Some(message) = self.load_error.clone() {
                    self.render_load_error(ui, &message);
                } else {
                    // Initial fetch outstanding: no data and no error yet
                    self.render_loading(ui);
                }
            });

        self.toasts.render(ctx);

        // Background fetches and submits finish without user input; keep
        // polling the event channel at a coarse interval
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
