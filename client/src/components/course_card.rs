//! Card for one course in the library grid.

use leptos::prelude::*;

use crate::catalog::Course;
use crate::util::display::{format_count, format_price};

#[component]
pub fn CourseCard(course: &'static Course) -> impl IntoView {
    let href = format!("/courses/{}", course.id);

    view! {
        <a class="course-card" href=href>
            <div class="course-card__media">
                <img class="course-card__image" src=course.image alt=course.title/>
                <span class="course-card__level">{course.level.label()}</span>
            </div>
            <div class="course-card__body">
                <h3 class="course-card__title">{course.title}</h3>
                <p class="course-card__description">{course.description}</p>
                <p class="course-card__instructor">{course.instructor}</p>
                <div class="course-card__meta">
                    <span class="course-card__rating">{format!("★ {:.1}", course.rating)}</span>
                    <span class="course-card__students">
                        {format!("{} students", format_count(course.students))}
                    </span>
                    <span class="course-card__duration">{course.duration}</span>
                </div>
                <span class="course-card__price">{format_price(course.price_cents)}</span>
            </div>
        </a>
    }
}
