//! Navigation guard wrapper for session-restricted routes.
//!
//! ARCHITECTURE
//! ============
//! The guard decision itself lives in [`GuardState::evaluate`]; this
//! component only turns it into a render. The closure below reads the
//! session reactively, so a sign-out while a protected page is open
//! re-evaluates the guard and redirects.
//!
//! The children are invoked only on the authorized branch. A redirected
//! navigation never builds the destination's view.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::provider::SessionProvider;
use crate::state::session::SessionView;
use crate::util::guard::{GuardState, login_redirect_path};

/// Result of guarding one render.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Guarded<V> {
    Render(V),
    /// Sign-in URL to redirect to.
    Redirect(String),
}

/// Path plus query string of the attempted URL. `search` may or may not
/// carry its leading `?`.
pub(crate) fn attempted_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// Build the destination with `children` when the session allows it;
/// otherwise return the sign-in redirect without calling `children`.
pub(crate) fn guard_render<V>(session: &SessionView, attempted: &str, children: impl FnOnce() -> V) -> Guarded<V> {
    match GuardState::evaluate(session) {
        GuardState::Authorized => Guarded::Render(children()),
        GuardState::Redirected | GuardState::Unchecked => Guarded::Redirect(login_redirect_path(attempted)),
    }
}

/// Render `children` when a session exists, otherwise redirect to sign-in
/// carrying the attempted path.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = SessionProvider::expect();
    let location = use_location();

    move || {
        let attempted = attempted_path(&location.pathname.get_untracked(), &location.search.get_untracked());
        match guard_render(&session.get_session(), &attempted, || children()) {
            Guarded::Render(view) => view.into_any(),
            Guarded::Redirect(target) => {
                log::debug!("guard redirect to {target}");
                view! { <Redirect path=target/> }.into_any()
            }
        }
    }
}
