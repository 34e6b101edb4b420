use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    overlay::{ConfigDomain, ConfigOverlay},
    report::{OverlayReport, ValueKind},
};

const MESSAGES_SECTION: &str = "messages";

static NOTIFICATIONS: ConfigOverlay<Notifications> = ConfigOverlay::new();

/// Returns the process-wide notifications registry.
pub fn notifications() -> &'static ConfigOverlay<Notifications> {
    &NOTIFICATIONS
}

/// Notification texts shown after like/dislike actions.
pub struct Notifications;

impl ConfigDomain for Notifications {
    const NAME: &'static str = "notifications";
    type Resolved = NotificationsConfig;
    type Override = NotificationsOverride;

    fn defaults() -> NotificationsConfig {
        NotificationsConfig::default()
    }

    fn apply_value(
        resolved: &mut NotificationsConfig,
        overrides: &Value,
        report: &mut OverlayReport,
    ) {
        let Value::Object(sections) = overrides else {
            report.invalid_type("$", ValueKind::Object, overrides);
            return;
        };

        for (section, value) in sections {
            match section.as_str() {
                MESSAGES_SECTION => apply_messages(&mut resolved.messages, value, report),
                other => report.unknown_key(other),
            }
        }
    }

    fn apply_override(resolved: &mut NotificationsConfig, overrides: &NotificationsOverride) {
        let Some(messages) = &overrides.messages else {
            return;
        };
        for key in MessageKey::ALL {
            if let Some(text) = messages.get(key) {
                *resolved.messages.slot_mut(key) = text.to_string();
            }
        }
    }
}

fn apply_messages(messages: &mut NotificationMessages, value: &Value, report: &mut OverlayReport) {
    let Value::Object(entries) = value else {
        report.invalid_type(MESSAGES_SECTION, ValueKind::Object, value);
        return;
    };

    for (name, entry) in entries {
        let path = format!("{MESSAGES_SECTION}.{name}");
        let Ok(key) = name.parse::<MessageKey>() else {
            report.unknown_key(path);
            continue;
        };
        match entry {
            Value::String(text) => *messages.slot_mut(key) = text.clone(),
            other => report.invalid_type(path, ValueKind::String, other),
        }
    }
}

/// Declared notification message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AddToLiked,
    RemoveFromLiked,
    AddToDisliked,
    RemoveFromDisliked,
}

impl MessageKey {
    pub const ALL: [MessageKey; 4] = [
        Self::AddToLiked,
        Self::RemoveFromLiked,
        Self::AddToDisliked,
        Self::RemoveFromDisliked,
    ];

    /// Returns the key as it appears in override documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddToLiked => "addToLiked",
            Self::RemoveFromLiked => "removeFromLiked",
            Self::AddToDisliked => "addToDisliked",
            Self::RemoveFromDisliked => "removeFromDisliked",
        }
    }

    pub fn default_text(self) -> &'static str {
        match self {
            Self::AddToLiked => "Added to your liked videos",
            Self::RemoveFromLiked => "Removed from your liked videos",
            Self::AddToDisliked => "Added to your disliked videos",
            Self::RemoveFromDisliked => "Removed from your disliked videos",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notification message key: {0}")]
pub struct UnknownMessageKey(pub String);

impl FromStr for MessageKey {
    type Err = UnknownMessageKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| UnknownMessageKey(value.to_string()))
    }
}

/// Resolved notifications configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    pub messages: NotificationMessages,
}

/// Message texts keyed by [`MessageKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMessages {
    pub add_to_liked: String,
    pub remove_from_liked: String,
    pub add_to_disliked: String,
    pub remove_from_disliked: String,
}

impl NotificationMessages {
    pub fn get(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::AddToLiked => &self.add_to_liked,
            MessageKey::RemoveFromLiked => &self.remove_from_liked,
            MessageKey::AddToDisliked => &self.add_to_disliked,
            MessageKey::RemoveFromDisliked => &self.remove_from_disliked,
        }
    }

    fn slot_mut(&mut self, key: MessageKey) -> &mut String {
        match key {
            MessageKey::AddToLiked => &mut self.add_to_liked,
            MessageKey::RemoveFromLiked => &mut self.remove_from_liked,
            MessageKey::AddToDisliked => &mut self.add_to_disliked,
            MessageKey::RemoveFromDisliked => &mut self.remove_from_disliked,
        }
    }
}

impl Default for NotificationMessages {
    fn default() -> Self {
        Self {
            add_to_liked: MessageKey::AddToLiked.default_text().to_string(),
            remove_from_liked: MessageKey::RemoveFromLiked.default_text().to_string(),
            add_to_disliked: MessageKey::AddToDisliked.default_text().to_string(),
            remove_from_disliked: MessageKey::RemoveFromDisliked.default_text().to_string(),
        }
    }
}

/// Typed partial override for the notifications domain.
///
/// Unknown fields are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<MessagesOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_to_liked: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_from_liked: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_to_disliked: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_from_disliked: Option<String>,
}

impl MessagesOverride {
    pub fn get(&self, key: MessageKey) -> Option<&str> {
        match key {
            MessageKey::AddToLiked => self.add_to_liked.as_deref(),
            MessageKey::RemoveFromLiked => self.remove_from_liked.as_deref(),
            MessageKey::AddToDisliked => self.add_to_disliked.as_deref(),
            MessageKey::RemoveFromDisliked => self.remove_from_disliked.as_deref(),
        }
    }
}
