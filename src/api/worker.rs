//! Background sync worker.
//!
//! Owns all HTTP traffic for the GUI: the app sends `SyncRequest`s over an
//! mpsc channel and drains `SyncEvent`s each frame. Requests are processed
//! one at a time; there is no cancellation, so when a newer read supersedes
//! an older one the last-resolved snapshot wins when applied to view state.

use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use super::ApiClient;
use crate::domain::{DiscordSettingsUpdate, TelegramSettingsUpdate};

/// Which settings form a submit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Discord,
    Telegram,
}

/// Work for the sync thread
#[derive(Debug, Clone)]
pub enum SyncRequest {
    /// Resolve the current user id via `/api/v1/auth/me`
    ResolveIdentity,
    /// Fetch server-wide public settings (help-text selection)
    FetchPublicSettings,
    /// Read the notification settings snapshot
    FetchSettings { user_id: u64 },
    /// Write the Discord form's field subset
    SubmitDiscord {
        user_id: u64,
        update: DiscordSettingsUpdate,
    },
    /// Write the Telegram form's field subset
    SubmitTelegram {
        user_id: u64,
        update: TelegramSettingsUpdate,
    },
}

/// Message to send back to the GUI
#[derive(Debug, Clone)]
pub enum SyncEvent {
    IdentityResolved(crate::domain::CurrentUser),
    IdentityFailed(String),
    PublicSettings(crate::domain::PublicServerSettings),
    /// Fresh snapshot; replaces the displayed settings wholesale
    Snapshot(crate::domain::NotificationSettings),
    FetchFailed(String),
    /// A submit attempt completed (success or failure); the app follows
    /// up with exactly one refetch either way
    SubmitFinished {
        form: FormKind,
        result: Result<(), String>,
    },
}

/// Start the sync worker in a background thread.
///
/// The thread exits when the request channel closes (GUI shut down) or
/// when an event can no longer be delivered.
pub fn start_sync_worker(client: ApiClient, rx: Receiver<SyncRequest>, tx: Sender<SyncEvent>) {
    thread::spawn(move || sync_loop(client, rx, tx));
}

fn sync_loop(client: ApiClient, rx: Receiver<SyncRequest>, tx: Sender<SyncEvent>) {
    while let Ok(request) = rx.recv() {
        debug!("[pingarr:sync] {:?}", request);

        let event = match request {
            SyncRequest::ResolveIdentity => match client.current_user() {
                Ok(user) => Some(SyncEvent::IdentityResolved(user)),
                Err(e) => Some(SyncEvent::IdentityFailed(e.to_string())),
            },
            SyncRequest::FetchPublicSettings => match client.public_settings() {
                Ok(settings) => Some(SyncEvent::PublicSettings(settings)),
                Err(e) => {
                    // Non-fatal: the Telegram form falls back to the short
                    // chat-id tip without the bot username
                    warn!("[pingarr:sync] Failed to fetch public settings: {}", e);
                    None
                }
            },
            SyncRequest::FetchSettings { user_id } => {
                match client.notification_settings(user_id) {
                    Ok(snapshot) => Some(SyncEvent::Snapshot(snapshot)),
                    Err(e) => Some(SyncEvent::FetchFailed(e.to_string())),
                }
            }
            SyncRequest::SubmitDiscord { user_id, update } => Some(SyncEvent::SubmitFinished {
                form: FormKind::Discord,
                result: client
                    .update_discord_settings(user_id, &update)
                    .map_err(|e| e.to_string()),
            }),
            SyncRequest::SubmitTelegram { user_id, update } => Some(SyncEvent::SubmitFinished {
                form: FormKind::Telegram,
                result: client
                    .update_telegram_settings(user_id, &update)
                    .map_err(|e| e.to_string()),
            }),
        };

        if let Some(event) = event {
            if tx.send(event).is_err() {
                break;
            }
        }
    }

    debug!("[pingarr:sync] Worker stopped");
}
