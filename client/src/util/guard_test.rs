use super::*;
use crate::net::types::User;

fn signed_in() -> SessionView {
    SessionView::Authenticated(User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@x.com".to_owned(),
        created_at: 0,
    })
}

// =============================================================
// GuardState
// =============================================================

#[test]
fn initial_state_is_unchecked() {
    assert_eq!(GuardState::default(), GuardState::Unchecked);
    assert!(!GuardState::Unchecked.is_terminal());
}

#[test]
fn unauthenticated_session_redirects() {
    let state = GuardState::evaluate(&SessionView::Unauthenticated);
    assert_eq!(state, GuardState::Redirected);
    assert!(state.is_terminal());
}

#[test]
fn authenticated_session_is_authorized() {
    let state = GuardState::evaluate(&signed_in());
    assert_eq!(state, GuardState::Authorized);
    assert!(state.is_terminal());
}

#[test]
fn evaluation_is_idempotent_for_unchanged_session() {
    for session in [SessionView::Unauthenticated, signed_in()] {
        assert_eq!(GuardState::evaluate(&session), GuardState::evaluate(&session));
    }
}

#[test]
fn ending_the_session_flips_the_next_evaluation() {
    let mut session = signed_in();
    assert_eq!(GuardState::evaluate(&session), GuardState::Authorized);
    session.end();
    assert_eq!(GuardState::evaluate(&session), GuardState::Redirected);
}

// =============================================================
// login_redirect_path
// =============================================================

#[test]
fn redirect_remembers_attempted_destination() {
    assert_eq!(login_redirect_path("/dashboard"), "/login?next=/dashboard");
    assert_eq!(login_redirect_path("/courses/1"), "/login?next=/courses/1");
}

#[test]
fn redirect_encodes_query_breaking_characters() {
    assert_eq!(
        login_redirect_path("/courses?level=Beginner&x=1"),
        "/login?next=/courses%3Flevel%3DBeginner%26x%3D1"
    );
}

#[test]
fn redirect_omits_next_for_root_and_login() {
    assert_eq!(login_redirect_path("/"), "/login");
    assert_eq!(login_redirect_path(""), "/login");
    assert_eq!(login_redirect_path("/login"), "/login");
}

// =============================================================
// safe_return_path
// =============================================================

#[test]
fn return_path_accepts_local_paths() {
    assert_eq!(safe_return_path(Some("/profile")), "/profile");
    assert_eq!(safe_return_path(Some("/courses/2")), "/courses/2");
}

#[test]
fn return_path_defaults_to_dashboard() {
    assert_eq!(safe_return_path(None), DEFAULT_LANDING);
    assert_eq!(safe_return_path(Some("")), DEFAULT_LANDING);
}

#[test]
fn return_path_rejects_external_targets() {
    for next in ["https://evil.example", "//evil.example", "/\\evil.example", "dashboard", "/x?u=http://a"] {
        assert_eq!(safe_return_path(Some(next)), DEFAULT_LANDING, "{next}");
    }
}

#[test]
fn return_path_rejects_login_loop() {
    assert_eq!(safe_return_path(Some("/login")), DEFAULT_LANDING);
}
