//! Discord notification settings form controller.

use std::sync::mpsc::Sender;

use crate::api::SyncRequest;
use crate::domain::{DiscordSettingsUpdate, NotificationSettings};

use super::validation::{validate_discord_id, FieldError};

/// State behind the Discord preferences form.
///
/// Field values are initialized from the last snapshot and replaced
/// wholesale whenever a new snapshot arrives. Validation runs on submit;
/// a failing submit shows inline errors and issues no network request.
#[derive(Debug, Default)]
pub struct DiscordForm {
    pub enable_discord: bool,
    pub discord_id: String,
    /// Set once the user has edited the ID field, gating inline errors
    pub discord_id_touched: bool,
    pub error: Option<FieldError>,
    submitting: bool,
}

impl DiscordForm {
    pub fn from_snapshot(snapshot: &NotificationSettings) -> Self {
        Self {
            enable_discord: snapshot.enable_discord,
            discord_id: snapshot.discord_id.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Replace field state from a fresh snapshot, clearing edits and errors
    pub fn reset(&mut self, snapshot: &NotificationSettings) {
        let submitting = self.submitting;
        *self = Self::from_snapshot(snapshot);
        self.submitting = submitting;
    }

    /// Whether a write is in flight (submit button disabled)
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The inline error to display, if the field has been touched
    pub fn visible_error(&self) -> Option<FieldError> {
        self.error.filter(|_| self.discord_id_touched)
    }

    /// Validate and, on pass, queue the write. Returns false when
    /// validation failed (no request was issued).
    pub fn submit(&mut self, user_id: u64, tx: &Sender<SyncRequest>) -> bool {
        self.discord_id_touched = true;
        self.error = validate_discord_id(&self.discord_id);
        if self.error.is_some() {
            return false;
        }

        self.submitting = true;
        let update = DiscordSettingsUpdate {
            enable_discord: self.enable_discord,
            discord_id: (!self.discord_id.is_empty()).then(|| self.discord_id.clone()),
        };
        let _ = tx.send(SyncRequest::SubmitDiscord { user_id, update });
        true
    }

    /// Mark the in-flight submit finished and queue the reconciling
    /// refetch. Called for success and failure alike.
    pub fn finish_submit(&mut self, user_id: u64, tx: &Sender<SyncRequest>) {
        self.submitting = false;
        let _ = tx.send(SyncRequest::FetchSettings { user_id });
    }
}
