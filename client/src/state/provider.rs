//! Session State Provider: the single writer of the current session.
//!
//! ARCHITECTURE
//! ============
//! `App` creates one provider and places it in context; components obtain it
//! with [`SessionProvider::expect`]. The underlying signal is private, so the
//! only way to change the session is through the methods below. Reads are
//! reactive: any view that calls [`SessionProvider::get_session`] re-renders
//! when the session changes.
//!
//! The auth collaborator is passed to each async operation rather than
//! stored, which keeps the provider `Copy` and lets tests inject a fake.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;

use crate::net::auth::{AuthCollaborator, AuthError};
use crate::net::types::User;
use crate::state::session::SessionView;

#[derive(Clone, Copy, Debug)]
pub struct SessionProvider {
    session: RwSignal<SessionView>,
    /// Set once the start-up session check has resolved.
    ready: RwSignal<bool>,
}

impl Default for SessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider {
    /// Empty (unauthenticated, not yet restored) provider.
    #[must_use]
    pub fn new() -> Self {
        Self { session: RwSignal::new(SessionView::Unauthenticated), ready: RwSignal::new(false) }
    }

    /// Create a provider and place it in the current reactive context.
    pub fn provide() -> Self {
        let provider = Self::new();
        provide_context(provider);
        provider
    }

    /// Fetch the provider placed in context by `App`.
    ///
    /// # Panics
    ///
    /// Panics if called outside the component tree rooted at `App`.
    #[must_use]
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Current session, tracked by the surrounding reactive scope.
    #[must_use]
    pub fn get_session(self) -> SessionView {
        self.session.get()
    }

    /// Current session without subscribing to changes.
    #[must_use]
    pub fn get_session_untracked(self) -> SessionView {
        self.session.get_untracked()
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self.session.with(SessionView::is_authenticated)
    }

    /// Signed-in user, tracked.
    #[must_use]
    pub fn user(self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        self.ready.get()
    }

    pub fn establish_session(self, user: User) {
        log::debug!("session established for {}", user.id);
        self.session.update(|s| s.establish(user));
    }

    pub fn end_session(self) {
        self.session.update(SessionView::end);
    }

    /// Sign in through the collaborator. The session is established only on
    /// success; failures leave it untouched.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for a rejected pair,
    /// [`AuthError::Unexpected`] for anything else.
    pub async fn sign_in<C: AuthCollaborator>(self, auth: &C, email: &str, password: &str) -> Result<User, AuthError> {
        let result = auth.sign_in(email, password).await;
        self.settle(result, "sign-in")
    }

    /// Create an account through the collaborator and sign it in.
    ///
    /// # Errors
    ///
    /// [`AuthError::RegistrationRejected`] when the collaborator refuses the
    /// account, [`AuthError::Unexpected`] for anything else.
    pub async fn sign_up<C: AuthCollaborator>(
        self,
        auth: &C,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let result = auth.sign_up(name, email, password).await;
        self.settle(result, "sign-up")
    }

    fn settle(self, result: Result<User, AuthError>, action: &str) -> Result<User, AuthError> {
        match result {
            Ok(user) => {
                self.establish_session(user.clone());
                Ok(user)
            }
            Err(err @ AuthError::Unexpected(_)) => {
                log::error!("{action} failed: {err}");
                Err(err)
            }
            Err(err) => {
                log::debug!("{action} rejected: {err}");
                Err(err)
            }
        }
    }

    /// End the session locally and at the collaborator. The local session
    /// ends even when the collaborator call fails.
    pub async fn sign_out<C: AuthCollaborator>(self, auth: &C) {
        if let Err(err) = auth.sign_out().await {
            log::warn!("sign-out failed at host: {err}");
        }
        self.end_session();
    }

    /// Start-up session check. An existing host session is adopted; a missing
    /// session or a failed check leaves the user signed out. Marks the
    /// provider ready in every case.
    pub async fn restore<C: AuthCollaborator>(self, auth: &C) {
        match auth.current_user().await {
            Ok(Some(user)) => self.establish_session(user),
            Ok(None) => self.end_session(),
            Err(err) => {
                log::warn!("session check failed: {err}");
                self.end_session();
            }
        }
        self.ready.set(true);
    }
}
