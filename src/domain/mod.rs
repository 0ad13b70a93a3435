//! Core domain types for pingarr

mod agent;
mod settings;

pub use agent::{AgentSet, NotificationAgent};
pub use settings::{
    CurrentUser, DiscordSettingsUpdate, NotificationSettings, PublicServerSettings,
    TelegramSettingsUpdate,
};
