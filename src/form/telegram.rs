//! Telegram notification settings form controller.
//!
//! Enabling Telegram is not a plain boolean field: the server stores one
//! shared agent set per user, so the checkbox toggles membership in a
//! locally-tracked `AgentSet` and the set's wire value is what gets
//! submitted alongside the chat-id fields.

use std::sync::mpsc::Sender;

use crate::api::SyncRequest;
use crate::domain::{AgentSet, NotificationAgent, NotificationSettings, TelegramSettingsUpdate};

use super::validation::{validate_telegram_chat_id, FieldError};

/// State behind the Telegram preferences form
#[derive(Debug, Default)]
pub struct TelegramForm {
    /// Enabled-agent set, initialized from the snapshot (email baseline
    /// when the server has no stored value)
    pub agents: AgentSet,
    pub telegram_chat_id: String,
    pub telegram_send_silently: bool,
    pub chat_id_touched: bool,
    pub error: Option<FieldError>,
    submitting: bool,
}

impl TelegramForm {
    pub fn from_snapshot(snapshot: &NotificationSettings) -> Self {
        Self {
            agents: snapshot.agent_set(),
            telegram_chat_id: snapshot.telegram_chat_id.clone().unwrap_or_default(),
            telegram_send_silently: snapshot.telegram_send_silently,
            ..Self::default()
        }
    }

    /// Replace field state from a fresh snapshot, clearing edits and errors
    pub fn reset(&mut self, snapshot: &NotificationSettings) {
        let submitting = self.submitting;
        *self = Self::from_snapshot(snapshot);
        self.submitting = submitting;
    }

    /// Whether Telegram delivery is currently enabled in the tracked set
    pub fn telegram_enabled(&self) -> bool {
        self.agents.contains(NotificationAgent::Telegram)
    }

    /// Flip Telegram membership in the tracked set
    pub fn toggle_telegram(&mut self) {
        self.agents.toggle(NotificationAgent::Telegram);
    }

    /// Whether a write is in flight (submit button disabled)
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The inline error to display, if the field has been touched
    pub fn visible_error(&self) -> Option<FieldError> {
        self.error.filter(|_| self.chat_id_touched)
    }

    /// Validate and, on pass, queue the write. Returns false when
    /// validation failed (no request was issued).
    pub fn submit(&mut self, user_id: u64, tx: &Sender<SyncRequest>) -> bool {
        self.chat_id_touched = true;
        self.error = validate_telegram_chat_id(&self.telegram_chat_id, self.telegram_enabled());
        if self.error.is_some() {
            return false;
        }

        self.submitting = true;
        let update = TelegramSettingsUpdate {
            notification_agents: self.agents,
            telegram_chat_id: (!self.telegram_chat_id.is_empty())
                .then(|| self.telegram_chat_id.clone()),
            telegram_send_silently: self.telegram_send_silently,
        };
        let _ = tx.send(SyncRequest::SubmitTelegram { user_id, update });
        true
    }

    /// Mark the in-flight submit finished and queue the reconciling
    /// refetch. Called for success and failure alike.
    pub fn finish_submit(&mut self, user_id: u64, tx: &Sender<SyncRequest>) {
        self.submitting = false;
        let _ = tx.send(SyncRequest::FetchSettings { user_id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn snapshot(agents: Option<u32>, chat_id: Option<&str>) -> NotificationSettings {
        NotificationSettings {
            notification_agents: agents,
            telegram_chat_id: chat_id.map(String::from),
            ..NotificationSettings::default()
        }
    }

    #[test]
    fn test_agents_default_to_email_baseline() {
        let form = TelegramForm::from_snapshot(&snapshot(None, None));
        assert!(form.agents.contains(NotificationAgent::Email));
        assert!(!form.telegram_enabled());
    }

    #[test]
    fn test_toggle_twice_restores_mask() {
        let mut form = TelegramForm::from_snapshot(&snapshot(Some(1), None));
        let before = form.agents;

        form.toggle_telegram();
        assert!(form.telegram_enabled());
        assert_eq!(
            form.agents.bits(),
            NotificationAgent::Email.bit() | NotificationAgent::Telegram.bit()
        );

        form.toggle_telegram();
        assert_eq!(form.agents, before);
    }

    #[test]
    fn test_enabled_with_blank_chat_id_blocks_submit() {
        // Snapshot {notificationAgents: 1}, user enables Telegram and
        // leaves the chat ID blank
        let (tx, rx) = mpsc::channel();
        let mut form = TelegramForm::from_snapshot(&snapshot(Some(1), None));
        form.toggle_telegram();

        assert!(!form.submit(9, &tx));
        assert_eq!(
            form.visible_error(),
            Some(FieldError::MissingTelegramChatId)
        );
        assert!(rx.try_recv().is_err(), "no request may be issued");
    }

    #[test]
    fn test_valid_submit_carries_computed_mask_then_refetches_once() {
        let (tx, rx) = mpsc::channel();
        let mut form = TelegramForm::from_snapshot(&snapshot(Some(1), None));
        form.toggle_telegram();
        form.telegram_chat_id = "-100200300".to_string();
        form.telegram_send_silently = true;

        assert!(form.submit(9, &tx));
        assert!(form.is_submitting());

        match rx.try_recv().unwrap() {
            SyncRequest::SubmitTelegram { user_id, update } => {
                assert_eq!(user_id, 9);
                assert_eq!(
                    update.notification_agents.bits(),
                    NotificationAgent::Email.bit() | NotificationAgent::Telegram.bit()
                );
                assert_eq!(update.telegram_chat_id.as_deref(), Some("-100200300"));
                assert!(update.telegram_send_silently);
            }
            other => panic!("unexpected request: {other:?}"),
        }

        form.finish_submit(9, &tx);
        assert!(!form.is_submitting());
        assert!(matches!(
            rx.try_recv().unwrap(),
            SyncRequest::FetchSettings { user_id: 9 }
        ));
        assert!(rx.try_recv().is_err(), "exactly one refetch");
    }

    #[test]
    fn test_disabled_with_blank_chat_id_passes() {
        let (tx, rx) = mpsc::channel();
        let mut form = TelegramForm::from_snapshot(&snapshot(Some(1), None));

        assert!(form.submit(4, &tx));
        match rx.try_recv().unwrap() {
            SyncRequest::SubmitTelegram { update, .. } => {
                assert_eq!(update.telegram_chat_id, None);
                assert!(!update
                    .notification_agents
                    .contains(NotificationAgent::Telegram));
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }
}
