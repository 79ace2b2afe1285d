//! # Form and Notification Settings
//!
//! Tunables for the form and its notification, deserialized from the
//! application's configuration file. Every field has a default so a partial
//! (or missing) config section is fine.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::notification::DEFAULT_AUTO_HIDE;

/// Rewrite applied to every value written into the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputTransform {
    /// Keep values exactly as typed
    #[default]
    None,
    /// Uppercase every value, passwords included
    Uppercase,
}

impl InputTransform {
    pub fn apply(&self, value: String) -> String {
        match self {
            InputTransform::None => value,
            InputTransform::Uppercase => value.to_uppercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    pub input_transform: InputTransform,
    /// Notification text shown after a successful signup
    pub success_message: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            input_transform: InputTransform::None,
            success_message: "Signup complete".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub auto_hide_ms: u64,
}

impl NotificationSettings {
    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            auto_hide_ms: DEFAULT_AUTO_HIDE.as_millis() as u64,
        }
    }
}
