//! Notification agent (delivery channel) types.
//!
//! The server encodes a user's enabled channels as an integer with one bit
//! per agent. `AgentSet` keeps the set semantics explicit on the client so
//! toggling a channel can never double-count or underflow the encoding.

use serde::{Deserialize, Serialize};

/// A notification delivery channel supported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationAgent {
    Email,
    Discord,
    Telegram,
    Slack,
    Pushbullet,
    Pushover,
    Webhook,
}

impl NotificationAgent {
    /// All agents, in wire-bit order
    pub const ALL: [NotificationAgent; 7] = [
        NotificationAgent::Email,
        NotificationAgent::Discord,
        NotificationAgent::Telegram,
        NotificationAgent::Slack,
        NotificationAgent::Pushbullet,
        NotificationAgent::Pushover,
        NotificationAgent::Webhook,
    ];

    /// The agent's bit in the `notificationAgents` wire encoding
    pub fn bit(&self) -> u32 {
        match self {
            NotificationAgent::Email => 1 << 0,
            NotificationAgent::Discord => 1 << 1,
            NotificationAgent::Telegram => 1 << 2,
            NotificationAgent::Slack => 1 << 3,
            NotificationAgent::Pushbullet => 1 << 4,
            NotificationAgent::Pushover => 1 << 5,
            NotificationAgent::Webhook => 1 << 6,
        }
    }

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationAgent::Email => "email",
            NotificationAgent::Discord => "discord",
            NotificationAgent::Telegram => "telegram",
            NotificationAgent::Slack => "slack",
            NotificationAgent::Pushbullet => "pushbullet",
            NotificationAgent::Pushover => "pushover",
            NotificationAgent::Webhook => "webhook",
        }
    }
}

impl std::fmt::Display for NotificationAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of enabled notification agents for a user.
///
/// Enabling an agent twice is a no-op, disabling an agent that is not a
/// member is a no-op, and `toggle` flips membership only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentSet {
    bits: u32,
}

impl AgentSet {
    /// Empty set (no channels enabled)
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Decode the set from its wire integer.
    ///
    /// Bits that do not correspond to a known agent are dropped, so a
    /// round-trip through `AgentSet` never preserves unknown channels.
    pub fn from_bits(bits: u32) -> Self {
        let known: u32 = NotificationAgent::ALL.iter().map(|a| a.bit()).sum();
        Self { bits: bits & known }
    }

    /// The wire integer for `notificationAgents`
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Whether the given agent is enabled
    pub fn contains(&self, agent: NotificationAgent) -> bool {
        self.bits & agent.bit() != 0
    }

    /// Enable an agent (no-op if already enabled)
    pub fn insert(&mut self, agent: NotificationAgent) {
        self.bits |= agent.bit();
    }

    /// Disable an agent (no-op if not enabled)
    pub fn remove(&mut self, agent: NotificationAgent) {
        self.bits &= !agent.bit();
    }

    /// Flip the agent's membership
    pub fn toggle(&mut self, agent: NotificationAgent) {
        if self.contains(agent) {
            self.remove(agent);
        } else {
            self.insert(agent);
        }
    }

    /// Enabled agents, in wire-bit order
    pub fn iter(&self) -> impl Iterator<Item = NotificationAgent> + '_ {
        NotificationAgent::ALL
            .into_iter()
            .filter(|agent| self.contains(*agent))
    }
}

impl Default for AgentSet {
    /// Baseline: email notifications enabled
    fn default() -> Self {
        let mut set = Self::empty();
        set.insert(NotificationAgent::Email);
        set
    }
}
