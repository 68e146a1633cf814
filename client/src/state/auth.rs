//! Identity-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navbar and hero to choose between the sign-up redirect and
//! local navigation, and to render profile fallbacks.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state tracking the signed-in user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

impl AuthState {
    /// Initial state before the session has been resolved.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn resolved(user: Option<UserProfile>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn name(&self) -> Option<&str> {
        non_empty(self.user.as_ref().and_then(|u| u.name.as_ref()))
    }

    /// Name used in the navbar greeting: given name, then full name.
    #[must_use]
    pub fn greeting_name(&self) -> String {
        non_empty(self.user.as_ref().and_then(|u| u.given_name.as_ref()))
            .or_else(|| self.name())
            .unwrap_or("You")
            .to_owned()
    }

    /// Upper-cased first letter of the name for the avatar placeholder.
    #[must_use]
    pub fn avatar_initial(&self) -> String {
        self.name()
            .and_then(|name| name.trim().chars().next())
            .unwrap_or('U')
            .to_uppercase()
            .collect()
    }

    /// Tooltip for the profile button.
    #[must_use]
    pub fn profile_title(&self) -> String {
        self.name().unwrap_or("Profile").to_owned()
    }

    #[must_use]
    pub fn picture(&self) -> Option<String> {
        non_empty(self.user.as_ref().and_then(|u| u.picture.as_ref())).map(str::to_owned)
    }
}
