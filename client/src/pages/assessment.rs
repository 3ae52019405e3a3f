//! Assessment placeholder.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn AssessmentPage() -> impl IntoView {
    let params = use_params_map();
    let assessment_id = move || params.with(|p| p.get("assessment_id")).unwrap_or_default();

    view! {
        <div class="assessment-page">
            <h1>"Assessment"</h1>
            <div class="assessment-page__card">
                <p>{move || format!("Assessment ID: {}", assessment_id())}</p>
                <p>"Assessment content coming soon..."</p>
            </div>
        </div>
    }
}
