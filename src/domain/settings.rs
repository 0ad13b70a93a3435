//! Wire types for the per-user notification settings resource.
//!
//! The server is the sole source of truth. `NotificationSettings` is the
//! read-only snapshot fetched from it; the `*Update` structs are the
//! per-form write payloads. The server merges a posted subset into the
//! stored record, so each form only sends the fields it owns.

use serde::{Deserialize, Serialize};

use super::AgentSet;

/// Snapshot of a user's notification settings as returned by
/// `GET /api/v1/user/{id}/settings/notifications`.
///
/// The resource carries more fields than the Discord/Telegram forms touch;
/// unknown fields are ignored on decode and a snapshot is always replaced
/// wholesale by the next fetch, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub enable_email: bool,
    pub enable_discord: bool,
    pub discord_id: Option<String>,
    /// One bit per enabled agent; absent on accounts that never saved
    /// channel preferences
    pub notification_agents: Option<u32>,
    pub telegram_chat_id: Option<String>,
    pub telegram_send_silently: bool,
}

impl NotificationSettings {
    /// The enabled-agent set, falling back to the email baseline when the
    /// server has no stored value
    pub fn agent_set(&self) -> AgentSet {
        self.notification_agents
            .map(AgentSet::from_bits)
            .unwrap_or_default()
    }
}

/// Write payload owned by the Discord form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordSettingsUpdate {
    pub enable_discord: bool,
    pub discord_id: Option<String>,
}

/// Write payload owned by the Telegram form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramSettingsUpdate {
    pub notification_agents: AgentSet,
    pub telegram_chat_id: Option<String>,
    pub telegram_send_silently: bool,
}

/// Current user as returned by `GET /api/v1/auth/me`.
///
/// Only the numeric id drives the settings read/write paths; the display
/// name is informational.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: u64,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Server-wide public settings (`GET /api/v1/settings/public`).
///
/// Read-only configuration the forms consume: the Telegram bot username
/// selects which chat-id help text is shown.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicServerSettings {
    pub application_title: Option<String>,
    pub telegram_bot_username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationAgent;

    #[test]
    fn test_snapshot_decodes_camel_case() {
        let json = r#"{
            "enableEmail": true,
            "enableDiscord": true,
            "discordId": "123456789012345678",
            "notificationAgents": 5,
            "telegramChatId": "-100200300",
            "telegramSendSilently": true,
            "pgpKey": null
        }"#;

        let snapshot: NotificationSettings = serde_json::from_str(json).unwrap();
        assert!(snapshot.enable_discord);
        assert_eq!(
            snapshot.discord_id.as_deref(),
            Some("123456789012345678")
        );
        assert_eq!(snapshot.notification_agents, Some(5));
        assert!(snapshot.agent_set().contains(NotificationAgent::Telegram));
        assert!(snapshot.telegram_send_silently);
    }

    #[test]
    fn test_snapshot_missing_agents_falls_back_to_email() {
        let snapshot: NotificationSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.notification_agents, None);
        assert_eq!(snapshot.agent_set(), AgentSet::default());
    }

    #[test]
    fn test_discord_update_serializes_subset_only() {
        let update = DiscordSettingsUpdate {
            enable_discord: true,
            discord_id: Some("123456789012345678".to_string()),
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "enableDiscord": true,
                "discordId": "123456789012345678",
            })
        );
    }

    #[test]
    fn test_telegram_update_carries_agent_bits() {
        let mut agents = AgentSet::default();
        agents.insert(NotificationAgent::Telegram);

        let update = TelegramSettingsUpdate {
            notification_agents: agents,
            telegram_chat_id: Some("-12345".to_string()),
            telegram_send_silently: false,
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "notificationAgents": 5,
                "telegramChatId": "-12345",
                "telegramSendSilently": false,
            })
        );
    }
}
