//! Contract with the external authentication collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session provider reaches credential checks and account creation only
//! through [`AuthCollaborator`]. The browser build plugs in
//! `net::api::HttpAuthCollaborator`; tests plug in an in-memory fake.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a variant of one `Result`, so call sites match
//! exhaustively instead of pairing a boolean with a thrown error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::types::User;

/// Failure kinds recognized at the auth boundary. All are recoverable by
/// retrying the form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The collaborator rejected the submitted email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The collaborator refused to create the account (duplicate email,
    /// rejected input).
    #[error("registration rejected")]
    RegistrationRejected,
    /// Transport, server or decoding failure.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl AuthError {
    /// Inline message shown by the sign-in and registration forms.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid email or password",
            Self::RegistrationRejected => "Registration failed. Please try again.",
            Self::Unexpected(_) => "An error occurred. Please try again.",
        }
    }
}

/// External capability performing credential verification and account
/// creation.
#[allow(async_fn_in_trait)]
pub trait AuthCollaborator {
    /// Verify an email/password pair and open a host session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create an account and open a host session for it.
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;

    /// Retrieve the profile for the host session, if one exists.
    async fn current_user(&self) -> Result<Option<User>, AuthError>;

    /// Close the host session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}
