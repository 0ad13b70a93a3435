//! Field validation rules.
//!
//! Pure functions with no UI or network binding: the controllers call them
//! on submit, the view maps the returned kinds to localized messages.

use once_cell::sync::Lazy;
use regex::Regex;

/// Discord user IDs are 17-18 digit snowflakes
static DISCORD_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{17,18}$").unwrap());

/// Telegram chat IDs are integers, negative for group chats
static TELEGRAM_CHAT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());

/// A field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Discord user ID is present but not a valid snowflake
    InvalidDiscordId,
    /// Telegram chat ID is present but not an integer
    InvalidTelegramChatId,
    /// Telegram notifications are enabled but no chat ID was given
    MissingTelegramChatId,
}

impl FieldError {
    /// Message catalog key for the inline error text
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::InvalidDiscordId => "validation-discord-id",
            FieldError::InvalidTelegramChatId | FieldError::MissingTelegramChatId => {
                "validation-telegram-chat-id"
            }
        }
    }
}

/// Validate the Discord user ID field.
///
/// Absence is valid (the field is nullable); a malformed non-empty value
/// is not.
pub fn validate_discord_id(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    if DISCORD_ID.is_match(value) {
        None
    } else {
        Some(FieldError::InvalidDiscordId)
    }
}

/// Validate the Telegram chat ID field.
///
/// The field is required exactly when Telegram notifications are enabled;
/// when present it must be an integer either way.
pub fn validate_telegram_chat_id(value: &str, telegram_enabled: bool) -> Option<FieldError> {
    if value.is_empty() {
        return telegram_enabled.then_some(FieldError::MissingTelegramChatId);
    }
    if TELEGRAM_CHAT_ID.is_match(value) {
        None
    } else {
        Some(FieldError::InvalidTelegramChatId)
    }
}
