//! HTTP client for the media request server's REST API.
//!
//! All calls are synchronous and run on the sync worker thread (or inline
//! in CLI commands), never on the GUI thread.

mod worker;

pub use worker::{start_sync_worker, FormKind, SyncEvent, SyncRequest};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{
    CurrentUser, DiscordSettingsUpdate, NotificationSettings, PublicServerSettings,
    TelegramSettingsUpdate,
};

/// Error talking to the server.
///
/// The forms do not distinguish failure causes in visible behavior (any
/// rejected write yields the same failure toast), but the CLI prints the
/// specific cause.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {status}")]
    Status { status: u16 },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => ApiError::Status { status },
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// Client for one server, authenticated with an API key
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// `GET /api/v1/auth/me` – resolve the user driving the settings paths
    pub fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get_json("/api/v1/auth/me")
    }

    /// `GET /api/v1/settings/public` – server-wide read-only settings
    pub fn public_settings(&self) -> Result<PublicServerSettings, ApiError> {
        self.get_json("/api/v1/settings/public")
    }

    /// `GET /api/v1/user/{id}/settings/notifications`
    pub fn notification_settings(&self, user_id: u64) -> Result<NotificationSettings, ApiError> {
        self.get_json(&format!("/api/v1/user/{user_id}/settings/notifications"))
    }

    /// `POST /api/v1/user/{id}/settings/notifications` with the Discord
    /// form's field subset; the server merges unrelated fields
    pub fn update_discord_settings(
        &self,
        user_id: u64,
        update: &DiscordSettingsUpdate,
    ) -> Result<(), ApiError> {
        self.post_json(
            &format!("/api/v1/user/{user_id}/settings/notifications"),
            update,
        )
    }

    /// `POST /api/v1/user/{id}/settings/notifications` with the Telegram
    /// form's field subset
    pub fn update_telegram_settings(
        &self,
        user_id: u64,
        update: &TelegramSettingsUpdate,
    ) -> Result<(), ApiError> {
        self.post_json(
            &format!("/api/v1/user/{user_id}/settings/notifications"),
            update,
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = ureq::get(&self.url(path))
            .set("X-Api-Key", &self.api_key)
            .set("Accept", "application/json")
            .call()?;

        response
            .into_json::<T>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(), ApiError> {
        ureq::post(&self.url(path))
            .set("X-Api-Key", &self.api_key)
            .set("Accept", "application/json")
            .send_json(body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:5055/", "key");
        assert_eq!(
            client.url("/api/v1/auth/me"),
            "http://localhost:5055/api/v1/auth/me"
        );
    }
}
