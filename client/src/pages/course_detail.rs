//! Course detail page with chapters and enrollment.
//!
//! Unknown ids (and courses without detail material) render a
//! "Course Not Found" panel. Enrolling shows a pending state for a moment and
//! then lands on the dashboard.

#[cfg(test)]
#[path = "course_detail_test.rs"]
mod course_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::catalog::{Chapter, Course, CourseDetail, course_with_detail};
use crate::util::display::{format_count, format_price};
use crate::util::guard::DEFAULT_LANDING;

#[cfg(feature = "csr")]
const ENROLL_DELAY_MS: u32 = 1_500;

fn enroll_label(pending: bool) -> &'static str {
    if pending { "Enrolling..." } else { "Enroll Now" }
}

fn chapter_summary(chapter: &Chapter) -> String {
    let lessons = chapter.lessons.len();
    let noun = if lessons == 1 { "lesson" } else { "lessons" };
    format!("{lessons} {noun} • {}", chapter.duration)
}

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let enrolling = RwSignal::new(false);
    let enrolled = RwSignal::new(false);

    Effect::new(move || {
        if enrolled.get() {
            navigate(DEFAULT_LANDING, NavigateOptions::default());
        }
    });

    let course_id = move || params.with(|p| p.get("course_id")).unwrap_or_default();

    move || match course_with_detail(&course_id()) {
        Some((course, detail)) => detail_view(course, detail, enrolling, enrolled).into_any(),
        None => not_found_view().into_any(),
    }
}

fn not_found_view() -> impl IntoView {
    view! {
        <div class="course-detail course-detail--missing">
            <h1>"Course Not Found"</h1>
            <a class="btn btn--primary" href="/courses">
                "Back to Courses"
            </a>
        </div>
    }
}

fn detail_view(
    course: &'static Course,
    detail: &'static CourseDetail,
    enrolling: RwSignal<bool>,
    enrolled: RwSignal<bool>,
) -> impl IntoView {
    let on_enroll = move |_| {
        if enrolling.get_untracked() {
            return;
        }
        enrolling.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ENROLL_DELAY_MS).await;
            enrolling.set(false);
            enrolled.set(true);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = enrolled;
        }
    };

    view! {
        <div class="course-detail">
            <article class="course-detail__main">
                <img class="course-detail__hero" src=course.image alt=course.title/>
                <h1>{course.title}</h1>
                <div class="course-detail__meta">
                    <span>{format!("★ {:.1} ({} reviews)", course.rating, detail.reviews)}</span>
                    <span>{format!("{} students", format_count(course.students))}</span>
                    <span>{course.duration}</span>
                    <span class="course-detail__level">{course.level.label()}</span>
                </div>

                <section>
                    <h2>"About This Course"</h2>
                    <p>{detail.long_description}</p>
                </section>

                <section>
                    <h2>"Prerequisites"</h2>
                    <ul class="course-detail__prerequisites">
                        {detail.prerequisites.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                    </ul>
                </section>

                <section>
                    <h2>"Course Content"</h2>
                    {detail.chapters.iter().map(chapter_view).collect_view()}
                </section>
            </article>

            <aside class="course-detail__aside">
                <div class="course-detail__purchase">
                    <span class="course-detail__price">{format_price(course.price_cents)}</span>
                    <button
                        class="btn btn--primary"
                        on:click=on_enroll
                        disabled=move || enrolling.get()
                    >
                        {move || enroll_label(enrolling.get())}
                    </button>
                    <ul class="course-detail__perks">
                        <li>"Full lifetime access"</li>
                        <li>"Certificate of completion"</li>
                        <li>{format!("{} lessons", detail.lesson_count())}</li>
                    </ul>
                </div>
                <div class="course-detail__instructor">
                    <h3>"Instructor"</h3>
                    <img src=detail.instructor_image alt=course.instructor/>
                    <div>
                        <h4>{course.instructor}</h4>
                        <p>{detail.instructor_title}</p>
                    </div>
                </div>
            </aside>
        </div>
    }
}

fn chapter_view(chapter: &'static Chapter) -> impl IntoView {
    view! {
        <div class="chapter">
            <div class="chapter__head">
                <h3>{chapter.title}</h3>
                <p>{chapter_summary(chapter)}</p>
            </div>
            <ul class="chapter__lessons">
                {chapter.lessons.iter().map(|lesson| view! { <li>{*lesson}</li> }).collect_view()}
            </ul>
        </div>
    }
}
