//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the single [`SessionProvider`] and kicks off the start-up
//! session check. Routes render only once that check has settled, so the
//! guard never judges a navigation against a session that is still being
//! restored.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, protected_route::ProtectedRoute};
use crate::pages::{
    assessment::AssessmentPage, course_detail::CourseDetailPage, courses::CoursesPage, dashboard::DashboardPage,
    login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::provider::SessionProvider;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::guard::LOGIN_PATH;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionProvider::provide();

    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);
    provide_context(RwSignal::new(UiState::with_dark_mode(dark)));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        session.restore(&crate::net::api::HttpAuthCollaborator).await;
    });

    view! {
        <Title text="LearnSync"/>

        <Router>
            <div class="app">
                <Navbar/>
                <main class="app__main">
                    <Show
                        when=move || session.is_ready()
                        fallback=|| view! { <p class="app__loading">"Loading..."</p> }
                    >
                        <Routes fallback=|| view! { <NotFoundPage/> }>
                            <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                            <Route path=StaticSegment("login") view=LoginPage/>
                            <Route path=StaticSegment("register") view=RegisterPage/>
                            <Route
                                path=StaticSegment("dashboard")
                                view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                            />
                            <Route
                                path=StaticSegment("courses")
                                view=|| view! { <ProtectedRoute><CoursesPage/></ProtectedRoute> }
                            />
                            <Route
                                path=(StaticSegment("courses"), ParamSegment("course_id"))
                                view=|| view! { <ProtectedRoute><CourseDetailPage/></ProtectedRoute> }
                            />
                            <Route
                                path=(StaticSegment("assessment"), ParamSegment("assessment_id"))
                                view=|| view! { <ProtectedRoute><AssessmentPage/></ProtectedRoute> }
                            />
                            <Route
                                path=StaticSegment("profile")
                                view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                            />
                        </Routes>
                    </Show>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
