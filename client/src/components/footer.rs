//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="footer__logo">"LearnSync"</span>
                    <p class="footer__tagline">
                        "Adaptive learning that keeps pace with you."
                    </p>
                </div>
                <nav class="footer__links">
                    <a href="/courses">"Courses"</a>
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/profile">"Profile"</a>
                </nav>
                <p class="footer__copyright">"© 2025 LearnSync. All rights reserved."</p>
            </div>
        </footer>
    }
}
