//! HTTP implementation of the auth collaborator.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`; the host session
//! travels in an `HttpOnly` cookie the browser attaches on its own.
//! Native builds (tests, tooling): every call resolves to
//! [`AuthError::Unexpected`] or "no session".
//!
//! ERROR HANDLING
//! ==============
//! Status codes are classified into [`AuthError`] variants by small pure
//! helpers so the mapping is testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::auth::{AuthCollaborator, AuthError};
use super::types::User;
#[cfg(feature = "csr")]
use super::types::{SignInRequest, SignUpRequest};

#[cfg(any(test, feature = "csr"))]
pub(crate) const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "csr"))]
pub(crate) const REGISTER_ENDPOINT: &str = "/api/auth/register";
#[cfg(any(test, feature = "csr"))]
pub(crate) const ME_ENDPOINT: &str = "/api/auth/me";
#[cfg(any(test, feature = "csr"))]
pub(crate) const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(not(feature = "csr"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

#[cfg(any(test, feature = "csr"))]
pub(crate) fn classify_sign_in_status(status: u16) -> AuthError {
    match status {
        401 | 422 => AuthError::InvalidCredentials,
        _ => AuthError::Unexpected(format!("sign-in failed: {status}")),
    }
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn classify_sign_up_status(status: u16) -> AuthError {
    match status {
        409 | 422 => AuthError::RegistrationRejected,
        _ => AuthError::Unexpected(format!("registration failed: {status}")),
    }
}

/// `None` means "no session", which is not a failure.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn classify_session_status(status: u16) -> Option<AuthError> {
    match status {
        401 => None,
        _ => Some(AuthError::Unexpected(format!("session check failed: {status}"))),
    }
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn sign_out_failed(status: u16) -> AuthError {
    AuthError::Unexpected(format!("sign-out failed: {status}"))
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> AuthError {
    AuthError::Unexpected(err.to_string())
}

/// Auth collaborator backed by the host's `/api/auth/*` endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthCollaborator;

impl AuthCollaborator for HttpAuthCollaborator {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
                .json(&SignInRequest { email, password })
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(classify_sign_in_status(resp.status()));
            }
            resp.json::<User>().await.map_err(transport)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(AuthError::Unexpected(NOT_IN_BROWSER.to_owned()))
        }
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
                .json(&SignUpRequest { name, email, password })
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(classify_sign_up_status(resp.status()));
            }
            resp.json::<User>().await.map_err(transport)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, email, password);
            Err(AuthError::Unexpected(NOT_IN_BROWSER.to_owned()))
        }
    }

    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(ME_ENDPOINT)
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return match classify_session_status(resp.status()) {
                    None => Ok(None),
                    Some(err) => Err(err),
                };
            }
            resp.json::<User>().await.map(Some).map_err(transport)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(sign_out_failed(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(AuthError::Unexpected(NOT_IN_BROWSER.to_owned()))
        }
    }
}
