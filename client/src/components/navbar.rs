//! Top navigation bar.
//!
//! Shows the protected links and the account menu when a session exists,
//! and sign-in / register links otherwise. The theme toggle is always there.

use leptos::prelude::*;

use crate::state::provider::SessionProvider;
use crate::state::ui::UiState;
use crate::util::display::{avatar_initial, first_name};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = SessionProvider::expect();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_sign_out = move |_| {
        ui.update(UiState::close_menu);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            session.sign_out(&crate::net::api::HttpAuthCollaborator).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::util::guard::LOGIN_PATH);
            }
        });
    };

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let close_menu = move |_| ui.update(UiState::close_menu);

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">
                    "LearnSync"
                </a>

                <Show
                    when=move || session.is_authenticated()
                    fallback=move || {
                        view! {
                            <nav class="navbar__links">
                                <a class="navbar__link" href="/login">
                                    "Sign in"
                                </a>
                                <a class="navbar__link navbar__link--primary" href="/register">
                                    "Register"
                                </a>
                            </nav>
                        }
                    }
                >
                    <nav class="navbar__links" class:navbar__links--open=move || ui.get().menu_open>
                        <a class="navbar__link" href="/dashboard" on:click=close_menu>
                            "Dashboard"
                        </a>
                        <a class="navbar__link" href="/courses" on:click=close_menu>
                            "Courses"
                        </a>
                        <a class="navbar__link" href="/profile" on:click=close_menu>
                            "Profile"
                        </a>
                    </nav>
                    <div class="navbar__account">
                        <span class="navbar__avatar">
                            {move || avatar_initial(session.user().as_ref().map(|u| u.email.as_str()))}
                        </span>
                        <span class="navbar__user">{move || first_name(session.user().as_ref())}</span>
                        <button class="btn navbar__sign-out" on:click=on_sign_out>
                            "Sign out"
                        </button>
                    </div>
                </Show>

                <button class="btn navbar__theme" on:click=on_toggle_theme title="Toggle dark mode">
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <Show when=move || session.is_authenticated()>
                    <button
                        class="btn navbar__menu"
                        on:click=move |_| ui.update(UiState::toggle_menu)
                        title="Menu"
                    >
                        "☰"
                    </button>
                </Show>
            </div>
        </header>
    }
}
