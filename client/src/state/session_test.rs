use super::*;

fn ada() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@x.com".to_owned(),
        created_at: 1_700_000_000_000,
    }
}

// =============================================================
// SessionView defaults
// =============================================================

#[test]
fn default_session_is_unauthenticated_without_user() {
    let session = SessionView::default();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn establish_stores_user_and_authenticates() {
    let mut session = SessionView::default();
    session.establish(ada());
    assert!(session.is_authenticated());
    let user = session.user().unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "ada@x.com");
}

#[test]
fn establish_replaces_previous_user() {
    let mut session = SessionView::Authenticated(ada());
    let grace = User { id: "u2".to_owned(), name: "Grace".to_owned(), email: "grace@x.com".to_owned(), created_at: 0 };
    session.establish(grace.clone());
    assert_eq!(session.user(), Some(&grace));
}

#[test]
fn end_clears_user() {
    let mut session = SessionView::Authenticated(ada());
    session.end();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn end_on_unauthenticated_is_noop() {
    let mut session = SessionView::Unauthenticated;
    session.end();
    assert_eq!(session, SessionView::Unauthenticated);
}

// =============================================================
// Invariant: user present iff authenticated
// =============================================================

#[test]
fn user_presence_tracks_authentication() {
    let mut session = SessionView::default();
    let steps: [fn(&mut SessionView); 4] = [
        |s| s.establish(ada()),
        SessionView::end,
        |s| s.establish(ada()),
        |s| s.establish(ada()),
    ];
    for step in steps {
        step(&mut session);
        assert_eq!(session.is_authenticated(), session.user().is_some());
        if let Some(user) = session.user() {
            assert!(!user.id.is_empty());
        }
    }
}
