use std::cell::Cell;

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
// guard_render
// =============================================================

#[test]
fn authorized_session_builds_children() {
    let built = Cell::new(0);
    let outcome = guard_render(&signed_in(), "/dashboard", || {
        built.set(built.get() + 1);
        "dashboard"
    });
    assert_eq!(outcome, Guarded::Render("dashboard"));
    assert_eq!(built.get(), 1);
}

#[test]
fn unauthenticated_session_never_builds_children() {
    let built = Cell::new(false);
    let outcome = guard_render(&SessionView::Unauthenticated, "/dashboard", || built.set(true));
    assert_eq!(outcome, Guarded::Redirect("/login?next=/dashboard".to_owned()));
    assert!(!built.get());
}

#[test]
fn redirect_keeps_attempted_query_string() {
    let attempted = attempted_path("/courses", "?level=Beginner");
    let outcome = guard_render(&SessionView::Unauthenticated, &attempted, || ());
    assert_eq!(outcome, Guarded::Redirect("/login?next=/courses%3Flevel%3DBeginner".to_owned()));
}

// =============================================================
// attempted_path
// =============================================================

#[test]
fn attempted_path_without_query_is_pathname() {
    assert_eq!(attempted_path("/profile", ""), "/profile");
    assert_eq!(attempted_path("/profile", "?"), "/profile");
}

#[test]
fn attempted_path_appends_query_with_or_without_leading_mark() {
    assert_eq!(attempted_path("/courses", "level=Advanced"), "/courses?level=Advanced");
    assert_eq!(attempted_path("/courses", "?level=Advanced"), "/courses?level=Advanced");
}
