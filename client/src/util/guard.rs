//! Navigation guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected_route` calls [`GuardState::evaluate`] on every
//! render of a protected destination; the helpers here keep the attempted
//! path so sign-in can send the user back to it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionView;

/// Sign-in entry point.
pub const LOGIN_PATH: &str = "/login";
/// Landing route after sign-in when no usable return path exists.
pub const DEFAULT_LANDING: &str = "/dashboard";

const NEXT_PARAM: &str = "next";

/// Per-navigation guard state. Every attempt starts `Unchecked` and resolves
/// to one of the two terminal states within the same render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Unchecked,
    /// Session present; the destination renders unchanged.
    Authorized,
    /// No session; a redirect to sign-in is issued instead.
    Redirected,
}

impl GuardState {
    /// Resolve a navigation attempt against the current session.
    #[must_use]
    pub fn evaluate(session: &SessionView) -> Self {
        match session {
            SessionView::Authenticated(_) => Self::Authorized,
            SessionView::Unauthenticated => Self::Redirected,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Unchecked)
    }
}

/// Sign-in URL that remembers `attempted` as the return destination.
#[must_use]
pub fn login_redirect_path(attempted: &str) -> String {
    let attempted = attempted.trim();
    if attempted.is_empty() || attempted == "/" || attempted.starts_with(LOGIN_PATH) {
        return LOGIN_PATH.to_owned();
    }
    format!("{LOGIN_PATH}?{NEXT_PARAM}={}", encode_query_value(attempted))
}

/// Where to go after sign-in. Only same-origin absolute paths are honored.
#[must_use]
pub fn safe_return_path(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => DEFAULT_LANDING.to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.contains("://")
        && !path.starts_with(LOGIN_PATH)
}

/// Percent-encode the characters that would break out of a query value.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            '+' => out.push_str("%2B"),
            ' ' => out.push_str("%20"),
            _ => out.push(ch),
        }
    }
    out
}
