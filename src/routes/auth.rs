//! Auth routes: sign-in, registration, session lookup, sign-out.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::account::{AccountError, SessionUser};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// Map an account failure onto the status the client classifies.
pub(crate) fn account_error_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AccountError::EmailTaken => StatusCode::CONFLICT,
        AccountError::InvalidEmail | AccountError::InvalidName | AccountError::WeakPassword => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AccountError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn account_error_response(err: AccountError) -> Response {
    let status = account_error_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "account operation failed");
    } else {
        tracing::debug!(error = %err, "account request rejected");
    }
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let account_id = app_state.sessions.validate(token).await.ok_or(StatusCode::UNAUTHORIZED)?;
        // The account may be gone even though the token survived.
        let user = app_state.accounts.get(account_id).await.ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SignInBody {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

/// `POST /api/auth/login`: check credentials, set cookie, return the user.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignInBody>) -> Response {
    let user = match state.accounts.verify(&body.email, &body.password).await {
        Ok(user) => user,
        Err(err) => return account_error_response(err),
    };

    let token = state.sessions.create(user.id).await;
    tracing::info!(user_id = %user.id, "signed in");
    let jar = jar.add(session_cookie(token, state.cookie_secure));
    (jar, Json(user)).into_response()
}

/// `POST /api/auth/register`: create the account and sign it in.
pub async fn register(State(state): State<AppState>, jar: CookieJar, Json(body): Json<RegisterBody>) -> Response {
    let user = match state.accounts.register(&body.name, &body.email, &body.password).await {
        Ok(user) => user,
        Err(err) => return account_error_response(err),
    };

    let token = state.sessions.create(user.id).await;
    tracing::info!(user_id = %user.id, "registered");
    let jar = jar.add(session_cookie(token, state.cookie_secure));
    (StatusCode::CREATED, jar, Json(user)).into_response()
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session (if any), clear cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value) {
        state.sessions.delete(token).await;
    }
    let jar = jar.add(cleared_session_cookie(state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
