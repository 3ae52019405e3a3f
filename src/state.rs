//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Both stores are `Arc`-backed, so cloning the state is cheap and every
//! clone observes the same accounts and sessions.

use crate::config::Config;
use crate::services::account::AccountStore;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountStore,
    pub sessions: SessionStore,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            accounts: AccountStore::new(),
            sessions: SessionStore::new(config.session_ttl),
            cookie_secure: config.cookie_secure,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use argon2::Params;

    use super::*;

    /// Create a test `AppState` with cheap password hashing and a one-hour TTL.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState {
            accounts: AccountStore::with_params(Params::new(1024, 1, 1, None).expect("valid argon2 params")),
            sessions: SessionStore::new(time::Duration::hours(1)),
            cookie_secure: false,
        }
    }
}
