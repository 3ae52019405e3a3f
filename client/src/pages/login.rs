//! Sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. On success the session provider establishes the session and
//! the page navigates to the `next` destination the guard recorded, or to the
//! dashboard when there is none.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

use crate::state::form::SubmitState;
#[cfg(feature = "csr")]
use crate::state::provider::SessionProvider;
use crate::util::guard::safe_return_path;
use crate::util::validation::validate_login_input;

fn submit_label(pending: bool) -> &'static str {
    if pending { "Signing in..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let session = SessionProvider::expect();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get_untracked().is_pending() {
            return;
        }
        let input = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };
        if !form.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let destination = safe_return_path(query.get_untracked().get("next").as_deref());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = session
                    .sign_in(&crate::net::api::HttpAuthCollaborator, &input.email, &input.password)
                    .await;
                match result {
                    Ok(_) => {
                        form.update(SubmitState::succeed);
                        navigate(&destination, NavigateOptions::default());
                    }
                    Err(err) => form.update(|f| f.fail(&err)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (input, destination);
        }
    };

    view! {
        <div class="auth-page">
            <aside class="auth-page__intro">
                <h1>"Welcome to LearnSync"</h1>
                <p>"The AI-powered adaptive learning platform that personalizes your educational journey."</p>
                <ul class="auth-page__features">
                    <li>"Personalized Learning"</li>
                    <li>"Smart Assessments"</li>
                    <li>"Progress Tracking"</li>
                    <li>"Expert Content"</li>
                </ul>
            </aside>
            <div class="auth-card">
                <h2>"Welcome Back"</h2>
                <p class="auth-card__subtitle">"Sign in to continue your learning journey"</p>
                <Show when=move || form.with(|f| f.error().is_some())>
                    <p class="auth-card__error" role="alert">
                        {move || form.with(|f| f.error().unwrap_or_default())}
                    </p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-form__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || form.with(SubmitState::is_pending)
                    >
                        {move || submit_label(form.with(SubmitState::is_pending))}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
