//! Course library with a level filter.

use leptos::prelude::*;

use crate::catalog::{Level, filter_by_level};
use crate::components::course_card::CourseCard;

const ALL_LEVELS: &str = "All Levels";

#[component]
pub fn CoursesPage() -> impl IntoView {
    let level = RwSignal::new(None::<Level>);

    view! {
        <div class="courses-page">
            <header class="courses-page__header">
                <div>
                    <h1>"Course Library"</h1>
                    <p>"Explore our collection of expert-led courses"</p>
                </div>
                <select
                    class="courses-page__filter"
                    on:change=move |ev| level.set(Level::parse(&event_target_value(&ev)))
                >
                    <option value=ALL_LEVELS>{ALL_LEVELS}</option>
                    {Level::ALL
                        .into_iter()
                        .map(|l| view! { <option value=l.label()>{l.label()}</option> })
                        .collect_view()}
                </select>
            </header>
            <div class="courses-page__grid">
                {move || {
                    let courses = filter_by_level(level.get());
                    if courses.is_empty() {
                        view! { <p class="courses-page__empty">"No courses at this level yet."</p> }.into_any()
                    } else {
                        courses
                            .into_iter()
                            .map(|course| view! { <CourseCard course=course/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
