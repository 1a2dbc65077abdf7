//! Organization settings and the simulated save flow.
//!
//! DESIGN
//! ======
//! Settings are edited field by field in memory and only written to
//! `lms_settings` on an explicit save or reset. The save latency and the
//! status badge lifetime are simulated with timers in the settings panel; the
//! storage write itself is the synchronous [`SettingsState::commit_save`].

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::storage::{self, KeyValueStore};

/// Simulated network latency before a save is written.
pub const SAVE_DELAY: Duration = Duration::from_millis(500);
/// How long the saved/error badge stays up before the button resets.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_millis(3000);

pub const DEFAULT_BRAND_COLOR: &str = "#3b6dff";
pub const DEFAULT_CONCURRENT_USERS: u32 = 5000;
/// Browser-side `min` on the concurrent user input. Not enforced on stored values.
pub const CONCURRENT_USERS_MIN: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningPolicy {
    #[default]
    #[serde(rename = "Self-paced with soft deadlines")]
    SelfPaced,
    #[serde(rename = "Strict deadlines with manager approval")]
    StrictDeadlines,
    #[serde(rename = "Compliance-first (mandatory for all users)")]
    ComplianceFirst,
}

impl LearningPolicy {
    pub const ALL: [Self; 3] = [Self::SelfPaced, Self::StrictDeadlines, Self::ComplianceFirst];

    pub fn label(self) -> &'static str {
        match self {
            Self::SelfPaced => "Self-paced with soft deadlines",
            Self::StrictDeadlines => "Strict deadlines with manager approval",
            Self::ComplianceFirst => "Compliance-first (mandatory for all users)",
        }
    }

    /// Inverse of [`LearningPolicy::label`], used for `<select>` values.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// Organization-wide branding and policy settings, persisted under `lms_settings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSettings {
    pub org_name: String,
    pub brand_color: String,
    pub learning_policy: LearningPolicy,
    pub concurrent_users: u32,
    #[serde(rename = "jwtSSO")]
    pub jwt_sso: bool,
    pub strong_passwords: bool,
}

impl Default for OrganizationSettings {
    fn default() -> Self {
        Self {
            org_name: String::new(),
            brand_color: DEFAULT_BRAND_COLOR.to_owned(),
            learning_policy: LearningPolicy::default(),
            concurrent_users: DEFAULT_CONCURRENT_USERS,
            jwt_sso: true,
            strong_passwords: true,
        }
    }
}

/// Coerce the concurrent-user input to a count.
///
/// Takes the leading integer of the input (after whitespace and an optional
/// sign). Non-numeric input gives `0`; negatives clamp to `0` and values past
/// `u32::MAX` saturate.
pub fn parse_concurrent_users(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(digits.len());
    let digits = &digits[..end];
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Save button state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Error,
}

impl SaveStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Save settings",
            Self::Saving => "Saving...",
            Self::Saved => "✓ Saved!",
            Self::Error => "✗ Error",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SettingsState {
    pub settings: OrganizationSettings,
    pub status: SaveStatus,
}

impl SettingsState {
    /// State restored from `store`, falling back to defaults.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        Self { settings: storage::load_settings(store), status: SaveStatus::Idle }
    }

    /// Whether the save control is usable for a user with `can_edit`.
    pub fn can_save(&self, can_edit: bool) -> bool {
        can_edit && self.status != SaveStatus::Saving
    }

    /// Enter the `Saving` state. Returns `false` if a save is already running.
    pub fn begin_save(&mut self) -> bool {
        if self.status == SaveStatus::Saving {
            return false;
        }
        self.status = SaveStatus::Saving;
        true
    }

    /// Write the current settings wholesale and record the outcome.
    pub fn commit_save(&mut self, store: &impl KeyValueStore) -> SaveStatus {
        self.status = match storage::save_settings(store, &self.settings) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                log::error!("settings save failed: {e}");
                SaveStatus::Error
            }
        };
        self.status
    }

    /// Drop the saved/error badge.
    pub fn clear_status(&mut self) {
        if self.status != SaveStatus::Saving {
            self.status = SaveStatus::Idle;
        }
    }

    /// Restore defaults and persist them immediately.
    pub fn reset(&mut self, store: &impl KeyValueStore) {
        self.settings = OrganizationSettings::default();
        if let Err(e) = storage::save_settings(store, &self.settings) {
            log::error!("settings reset could not be persisted: {e}");
        }
    }
}
