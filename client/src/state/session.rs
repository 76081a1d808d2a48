//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by the root component as `RwSignal<SessionState>`. It is
//! restored from `localStorage` after mount, read by every auth-aware view,
//! and cleared by the logout flow.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::{DEFAULT_AVATAR_URL, PROFILE_STORAGE_KEY, TOKEN_STORAGE_KEY};
use crate::net::api::ApiError;
use crate::net::types::Profile;
use crate::util::storage;

/// Bearer token plus the profile of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub profile: Option<Profile>,
}

/// What the caller must do after a logout attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutEffect {
    RedirectToLogin,
    Unchanged,
}

impl SessionState {
    /// Rebuild the session from persisted storage.
    pub fn restore() -> Self {
        Self::from_parts(stored_token(), storage::load_json(PROFILE_STORAGE_KEY))
    }

    fn from_parts(token: Option<String>, profile: Option<Profile>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { token, profile }
    }

    /// Token and profile are both present.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some() && self.profile.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.admin)
    }

    /// Avatar for the navbar, falling back to the default asset.
    pub fn avatar_url(&self) -> String {
        self.profile
            .as_ref()
            .and_then(|p| p.avatar_url.as_deref())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_AVATAR_URL)
            .to_owned()
    }

    /// Apply the result of `GET /users/logout`.
    ///
    /// Only a success clears the token and profile (memory and storage) and
    /// asks for the login redirect. Any failure leaves the session as it was.
    pub fn apply_logout(&mut self, outcome: &Result<(), ApiError>) -> LogoutEffect {
        if outcome.is_err() {
            return LogoutEffect::Unchanged;
        }
        storage::remove(TOKEN_STORAGE_KEY);
        storage::remove(PROFILE_STORAGE_KEY);
        self.token = None;
        self.profile = None;
        LogoutEffect::RedirectToLogin
    }
}

/// Bearer token as currently persisted, read at request time.
pub fn stored_token() -> Option<String> {
    storage::load_string(TOKEN_STORAGE_KEY).filter(|t| !t.trim().is_empty())
}
