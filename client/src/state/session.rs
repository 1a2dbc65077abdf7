//! Signed-in session and login modal state.
//!
//! DESIGN
//! ======
//! The session is trusted purely client-side: it is written verbatim to
//! `lms_auth` on login and restored verbatim on load, with no expiry or
//! signature. Every transition takes the store explicitly so tests can run
//! against `MemoryStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use super::credentials;
use crate::util::storage::{self, KeyValueStore};

/// Console roles, serialized as their display names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    #[serde(rename = "Admin / HR")]
    AdminHr,
    #[serde(rename = "Trainer")]
    Trainer,
    #[serde(rename = "Learner")]
    Learner,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::SuperAdmin, Self::AdminHr, Self::Trainer, Self::Learner];

    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::AdminHr => "Admin / HR",
            Self::Trainer => "Trainer",
            Self::Learner => "Learner",
        }
    }

    /// Label used in the demo credential hints.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::AdminHr => "Admin",
            other => other.label(),
        }
    }

    /// Whether this role may change organization settings.
    pub fn can_edit_settings(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::AdminHr)
    }
}

/// The signed-in user as persisted under `lms_auth`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
    pub name: String,
}

/// Draft contents of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub login_open: bool,
    pub login_error: Option<String>,
    pub form: LoginForm,
}

impl SessionState {
    /// State restored from `store`, signed in if a valid session was saved.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        Self { session: storage::load_session(store), ..Self::default() }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Only Super Admin and Admin / HR sessions unlock the settings form.
    pub fn can_edit_settings(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.role.can_edit_settings())
    }

    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
        self.login_error = None;
    }

    /// Submit the current form draft.
    ///
    /// On success the session is stored, the modal closes, and the draft is
    /// cleared. On failure the fixed error message is set and the modal stays
    /// open. Returns whether the login succeeded.
    pub fn login(&mut self, store: &impl KeyValueStore) -> bool {
        self.login_error = None;
        match credentials::authenticate(&self.form.email, &self.form.password) {
            Ok(session) => {
                if let Err(e) = storage::save_session(store, &session) {
                    log::warn!("failed to persist session: {e}");
                }
                self.session = Some(session);
                self.login_open = false;
                self.form = LoginForm::default();
                true
            }
            Err(e) => {
                self.login_error = Some(e.to_string());
                false
            }
        }
    }

    pub fn logout(&mut self, store: &impl KeyValueStore) {
        self.session = None;
        if let Err(e) = storage::clear_session(store) {
            log::warn!("failed to clear session: {e}");
        }
    }
}
