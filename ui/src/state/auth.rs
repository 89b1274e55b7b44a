//! Stored sign-in state reflected in the home page header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication happens elsewhere; it leaves `authToken` and `user` in
//! `localStorage`. This page only reads them, and clears them on logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;

use crate::util::storage::{KeyValueStore, load_json};

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";
pub const LOGIN_URL: &str = "../login.html";

/// Stored user record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoredUser {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

impl StoredUser {
    /// Name, or the local part of the email when no name is set.
    pub fn short_name(&self) -> &str {
        match self.name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => name,
            None => self.email.split('@').next().unwrap_or(&self.email),
        }
    }

    /// Name, or the full email when no name is set.
    pub fn full_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.email)
    }
}

/// Authentication state for the current browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<StoredUser>,
}

impl AuthState {
    /// Read token and user; either missing (or a malformed user) means
    /// logged out.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        if store.get(TOKEN_KEY).is_none_or(|t| t.is_empty()) {
            return Self::default();
        }
        Self { user: load_json(store, USER_KEY) }
    }

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Header button label.
    pub fn button_label(&self) -> String {
        match &self.user {
            Some(user) => format!("Hi, {}", user.short_name()),
            None => "Sign In".to_owned(),
        }
    }

    /// Confirmation prompt shown before logout.
    pub fn logout_prompt(&self) -> Option<String> {
        self.user.as_ref().map(|user| {
            format!(
                "Logged in as: {}\n\nClick OK to logout or Cancel to stay logged in.",
                user.full_name()
            )
        })
    }

    /// Clear both stored keys.
    pub fn logout<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.user = None;
    }
}
