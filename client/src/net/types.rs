//! Shared DTOs for the client/host auth boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the host's JSON so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated learner as returned by `/api/auth/*`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Account creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
