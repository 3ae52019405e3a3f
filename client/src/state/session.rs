//! Session model for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navigation guard and by identity-aware views (navbar,
//! dashboard greeting, profile). Written only through
//! `state::provider::SessionProvider`.
//!
//! DESIGN
//! ======
//! A tagged variant rather than a flag plus an optional user, so a user
//! record can never linger after sign-out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Whether, and as whom, someone is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionView {
    #[default]
    Unauthenticated,
    Authenticated(User),
}

impl SessionView {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated => None,
        }
    }

    /// Replace the current session (if any) with `user`.
    pub fn establish(&mut self, user: User) {
        *self = Self::Authenticated(user);
    }

    /// Drop the current session and its user record.
    pub fn end(&mut self) {
        *self = Self::Unauthenticated;
    }
}
