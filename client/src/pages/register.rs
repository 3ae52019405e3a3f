//! Account registration page.
//!
//! Public route. A successful registration signs the new account in and
//! lands on the dashboard.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::state::form::SubmitState;
#[cfg(feature = "csr")]
use crate::state::provider::SessionProvider;
use crate::util::validation::validate_registration_input;

fn submit_label(pending: bool) -> &'static str {
    if pending { "Creating account..." } else { "Create account" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let session = SessionProvider::expect();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let accepted_terms = RwSignal::new(false);
    let form = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get_untracked().is_pending() {
            return;
        }
        let validated = validate_registration_input(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
            accepted_terms.get_untracked(),
        );
        let input = match validated {
            Ok(input) => input,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };
        if !form.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = session
                    .sign_up(&crate::net::api::HttpAuthCollaborator, &input.name, &input.email, &input.password)
                    .await;
                match result {
                    Ok(_) => {
                        form.update(SubmitState::succeed);
                        navigate(crate::util::guard::DEFAULT_LANDING, NavigateOptions::default());
                    }
                    Err(err) => form.update(|f| f.fail(&err)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = input;
        }
    };

    view! {
        <div class="auth-page auth-page--register">
            <div class="auth-card">
                <h2>"Create Account"</h2>
                <p class="auth-card__subtitle">"Join LearnSync and start your learning journey"</p>
                <Show when=move || form.with(|f| f.error().is_some())>
                    <p class="auth-card__error" role="alert">
                        {move || form.with(|f| f.error().unwrap_or_default())}
                    </p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || accepted_terms.get()
                            on:change=move |ev| accepted_terms.set(event_target_checked(&ev))
                        />
                        "I agree to the Terms of Service and Privacy Policy"
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
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
            <aside class="auth-page__intro">
                <h1>"Start Learning Today"</h1>
                <p>"Personalized courses and smart assessments that adapt to you."</p>
            </aside>
        </div>
    }
}
