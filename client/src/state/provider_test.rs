use std::cell::Cell;

use futures::executor::block_on;

use super::*;

/// In-memory collaborator: one known account, optional forced transport
/// failure, and a host session flag.
struct FakeAuth {
    fail_transport: bool,
    host_session: Cell<bool>,
    calls: Cell<usize>,
}

impl FakeAuth {
    fn new() -> Self {
        Self { fail_transport: false, host_session: Cell::new(false), calls: Cell::new(0) }
    }

    fn broken() -> Self {
        Self { fail_transport: true, ..Self::new() }
    }

    fn with_host_session() -> Self {
        let auth = Self::new();
        auth.host_session.set(true);
        auth
    }
}

fn account(name: &str, email: &str) -> User {
    User { id: format!("id-{email}"), name: name.to_owned(), email: email.to_owned(), created_at: 1_700_000_000_000 }
}

impl AuthCollaborator for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail_transport {
            return Err(AuthError::Unexpected("network down".to_owned()));
        }
        if email == "user@example.com" && password == "correct" {
            self.host_session.set(true);
            Ok(account("Example User", email))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn sign_up(&self, name: &str, email: &str, _password: &str) -> Result<User, AuthError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail_transport {
            return Err(AuthError::Unexpected("network down".to_owned()));
        }
        if email == "taken@example.com" {
            return Err(AuthError::RegistrationRejected);
        }
        self.host_session.set(true);
        Ok(account(name, email))
    }

    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        if self.fail_transport {
            return Err(AuthError::Unexpected("network down".to_owned()));
        }
        Ok(self.host_session.get().then(|| account("Example User", "user@example.com")))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if self.fail_transport {
            return Err(AuthError::Unexpected("network down".to_owned()));
        }
        self.host_session.set(false);
        Ok(())
    }
}

// =============================================================
// Direct mutators
// =============================================================

#[test]
fn new_provider_is_unauthenticated_and_not_ready() {
    let provider = SessionProvider::new();
    assert_eq!(provider.get_session_untracked(), SessionView::Unauthenticated);
    assert!(!provider.ready.get_untracked());
}

#[test]
fn establish_then_end_session() {
    let provider = SessionProvider::new();
    provider.establish_session(account("Ada", "ada@x.com"));
    let session = provider.get_session_untracked();
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.email.as_str()), Some("ada@x.com"));

    provider.end_session();
    let session = provider.get_session_untracked();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn copies_share_one_session() {
    let provider = SessionProvider::new();
    let copy = provider;
    copy.establish_session(account("Ada", "ada@x.com"));
    assert!(provider.get_session_untracked().is_authenticated());
}

// =============================================================
// sign_in
// =============================================================

#[test]
fn sign_in_success_establishes_session() {
    let provider = SessionProvider::new();
    let auth = FakeAuth::new();
    let user = block_on(provider.sign_in(&auth, "user@example.com", "correct")).unwrap();
    assert_eq!(user.email, "user@example.com");

    let session = provider.get_session_untracked();
    assert!(session.is_authenticated());
    assert_eq!(session.user().unwrap().email, "user@example.com");
}

#[test]
fn sign_in_wrong_password_leaves_session_unchanged() {
    let provider = SessionProvider::new();
    let auth = FakeAuth::new();
    let result = block_on(provider.sign_in(&auth, "user@example.com", "wrong"));
    assert_eq!(result, Err(AuthError::InvalidCredentials));
    assert_eq!(provider.get_session_untracked(), SessionView::Unauthenticated);
}

#[test]
fn sign_in_wrong_password_keeps_existing_session() {
    let provider = SessionProvider::new();
    let existing = account("Ada", "ada@x.com");
    provider.establish_session(existing.clone());
    let auth = FakeAuth::new();
    let _ = block_on(provider.sign_in(&auth, "user@example.com", "wrong"));
    assert_eq!(provider.get_session_untracked(), SessionView::Authenticated(existing));
}

#[test]
fn sign_in_transport_failure_is_distinct_from_rejection() {
    let provider = SessionProvider::new();
    let auth = FakeAuth::broken();
    let result = block_on(provider.sign_in(&auth, "user@example.com", "correct"));
    assert!(matches!(result, Err(AuthError::Unexpected(_))));
    assert_ne!(result, Err(AuthError::InvalidCredentials));
    assert!(!provider.get_session_untracked().is_authenticated());
}

// =============================================================
// sign_up
// =============================================================

#[test]
fn sign_up_success_establishes_new_account_session() {
    let provider = SessionProvider::new();
    let auth = FakeAuth::new();
    let user = block_on(provider.sign_up(&auth, "Ada Lovelace", "ada@x.com", "Secret1!")).unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(provider.get_session_untracked().user(), Some(&user));
    assert_eq!(auth.calls.get(), 1);
}

#[test]
fn sign_up_rejected_leaves_session_unchanged() {
    let provider = SessionProvider::new();
    let auth = FakeAuth::new();
    let result = block_on(provider.sign_up(&auth, "Ada", "taken@example.com", "Secret1!"));
    assert_eq!(result, Err(AuthError::RegistrationRejected));
    assert!(!provider.get_session_untracked().is_authenticated());
}

#[test]
fn sign_up_transport_failure_is_unexpected() {
    let provider = SessionProvider::new();
    let auth = FakeAuth::broken();
    let result = block_on(provider.sign_up(&auth, "Ada", "ada@x.com", "Secret1!"));
    assert!(matches!(result, Err(AuthError::Unexpected(_))));
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_ends_local_and_host_session() {
    let provider = SessionProvider::new();
    let auth = FakeAuth::new();
    block_on(provider.sign_in(&auth, "user@example.com", "correct")).unwrap();
    block_on(provider.sign_out(&auth));
    assert!(!provider.get_session_untracked().is_authenticated());
    assert!(!auth.host_session.get());
}

#[test]
fn sign_out_ends_local_session_even_if_host_fails() {
    let provider = SessionProvider::new();
    provider.establish_session(account("Ada", "ada@x.com"));
    block_on(provider.sign_out(&FakeAuth::broken()));
    assert!(!provider.get_session_untracked().is_authenticated());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_adopts_existing_host_session() {
    let provider = SessionProvider::new();
    block_on(provider.restore(&FakeAuth::with_host_session()));
    assert!(provider.get_session_untracked().is_authenticated());
    assert!(provider.ready.get_untracked());
}

#[test]
fn restore_without_host_session_stays_signed_out() {
    let provider = SessionProvider::new();
    block_on(provider.restore(&FakeAuth::new()));
    assert!(!provider.get_session_untracked().is_authenticated());
    assert!(provider.ready.get_untracked());
}

#[test]
fn restore_failure_resets_session_and_marks_ready() {
    let provider = SessionProvider::new();
    provider.establish_session(account("Ada", "ada@x.com"));
    block_on(provider.restore(&FakeAuth::broken()));
    assert!(!provider.get_session_untracked().is_authenticated());
    assert!(provider.ready.get_untracked());
}

// =============================================================
// Guard reactivity
// =============================================================

#[test]
fn guard_decision_follows_provider_session_changes() {
    use crate::util::guard::GuardState;

    let owner = Owner::new();
    owner.with(|| {
        let provider = SessionProvider::new();
        let decision = Memo::new(move |_| GuardState::evaluate(&provider.get_session()));
        assert_eq!(decision.get_untracked(), GuardState::Redirected);

        provider.establish_session(account("Ada", "ada@x.com"));
        assert_eq!(decision.get_untracked(), GuardState::Authorized);

        provider.end_session();
        assert_eq!(decision.get_untracked(), GuardState::Redirected);
    });
}
