//! Profile page for the signed-in learner.

use leptos::prelude::*;

use crate::state::provider::SessionProvider;
use crate::util::display::{avatar_initial, email_label, member_since_label};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = SessionProvider::expect();
    let email = move || session.user().map(|u| u.email);

    view! {
        <div class="profile-page">
            <div class="profile-page__card">
                <h1>"Profile"</h1>
                <div class="profile-page__avatar">
                    <span>{move || avatar_initial(email().as_deref())}</span>
                </div>
                <dl class="profile-page__fields">
                    <div class="profile-page__field">
                        <dt>"Name"</dt>
                        <dd>{move || session.user().map(|u| u.name).unwrap_or_default()}</dd>
                    </div>
                    <div class="profile-page__field">
                        <dt>"Email"</dt>
                        <dd>{move || email_label(email().as_deref())}</dd>
                    </div>
                    <div class="profile-page__field">
                        <dt>"Member Since"</dt>
                        <dd>{move || member_since_label(session.user().map(|u| u.created_at))}</dd>
                    </div>
                </dl>
            </div>
        </div>
    }
}
