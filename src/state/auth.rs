//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. Pages read the signed-in
//! identity from here instead of a global store. The sign-in flow lives outside
//! this crate; it writes the session to `localStorage` and this crate only
//! reads it back on startup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;
use crate::util::storage;

pub const SESSION_STORAGE_KEY: &str = "bcard_session";

/// Authentication state holding the signed-in user, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    /// Seed auth state from the persisted session, if any.
    pub fn restore() -> Self {
        Self { user: storage::load_json(SESSION_STORAGE_KEY) }
    }

    pub fn can_create_cards(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::can_create_cards)
    }
}
