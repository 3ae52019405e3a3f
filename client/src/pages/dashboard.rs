//! Learner dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected landing route after sign-in. Everything below the greeting is
//! static sample data from `catalog`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::catalog::{
    AssessmentStatus, CourseProgress, IN_PROGRESS, RECOMMENDED, Recommendation, STATS, Stat, UPCOMING_ASSESSMENTS,
    UpcomingAssessment,
};
use crate::state::provider::SessionProvider;
use crate::util::display::{due_date_label, first_name};

fn progress_style(progress: u8) -> String {
    format!("width: {}%", progress.min(100))
}

fn status_class(status: AssessmentStatus) -> &'static str {
    match status {
        AssessmentStatus::Upcoming => "status-pill status-pill--upcoming",
        AssessmentStatus::Pending => "status-pill status-pill--pending",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = SessionProvider::expect();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome back, {}!", first_name(session.user().as_ref()))}</h1>
                <p>"Track your progress, continue learning, and explore new courses."</p>
            </header>

            <section class="dashboard-page__stats">
                {STATS.iter().map(stat_card).collect_view()}
            </section>

            <section class="dashboard-page__section">
                <div class="dashboard-page__section-head">
                    <h2>"Continue Learning"</h2>
                    <a href="/courses">"View all courses"</a>
                </div>
                <div class="dashboard-page__grid">
                    {IN_PROGRESS.iter().map(progress_card).collect_view()}
                </div>
            </section>

            <section class="dashboard-page__section">
                <div class="dashboard-page__section-head">
                    <h2>"Upcoming Assessments"</h2>
                </div>
                <table class="assessment-table">
                    <thead>
                        <tr>
                            <th>"Assessment"</th>
                            <th>"Course"</th>
                            <th>"Due Date"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{UPCOMING_ASSESSMENTS.iter().map(assessment_row).collect_view()}</tbody>
                </table>
            </section>

            <section class="dashboard-page__section">
                <div class="dashboard-page__section-head">
                    <h2>"Recommended for You"</h2>
                    <a href="/courses">"View all"</a>
                </div>
                <div class="dashboard-page__grid">
                    {RECOMMENDED.iter().map(recommendation_card).collect_view()}
                </div>
            </section>
        </div>
    }
}

fn stat_card(stat: &'static Stat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{stat.value}</span>
            <span class="stat-card__label">{stat.label}</span>
        </div>
    }
}

fn progress_card(course: &'static CourseProgress) -> impl IntoView {
    view! {
        <a class="progress-card" href=format!("/courses/{}", course.id)>
            <img class="progress-card__image" src=course.image alt=course.title/>
            <div class="progress-card__body">
                <h3>{course.title}</h3>
                <div class="progress-card__meta">
                    <span>"Progress"</span>
                    <span>{format!("{}%", course.progress)}</span>
                </div>
                <div class="progress-bar">
                    <div class="progress-bar__fill" style=progress_style(course.progress)></div>
                </div>
            </div>
        </a>
    }
}

fn assessment_row(assessment: &'static UpcomingAssessment) -> impl IntoView {
    view! {
        <tr>
            <td>{assessment.title}</td>
            <td>{assessment.course}</td>
            <td>{due_date_label(assessment.due_date)}</td>
            <td>
                <span class=status_class(assessment.status)>{assessment.status.label()}</span>
            </td>
            <td>
                <a class="btn btn--outline" href=format!("/assessment/{}", assessment.id)>
                    "Start"
                </a>
            </td>
        </tr>
    }
}

fn recommendation_card(course: &'static Recommendation) -> impl IntoView {
    view! {
        <div class="recommendation-card">
            <div class="recommendation-card__media">
                <img src=course.image alt=course.title/>
                <span class="recommendation-card__category">{course.category}</span>
            </div>
            <div class="recommendation-card__body">
                <h3>{course.title}</h3>
                <span class="recommendation-card__rating">{format!("★ {:.1}", course.rating)}</span>
            </div>
        </div>
    }
}
