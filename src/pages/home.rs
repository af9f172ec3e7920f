//! Public landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <Navbar/>
            <section class="home-page__hero">
                <h1>"InternLink"</h1>
                <p>"Where students find internships and recruiters find engineers."</p>
                <div class="home-page__cta">
                    <a class="btn btn--primary" href="/internships">
                        "Browse Internships"
                    </a>
                    <Show when=move || !session.get().is_authenticated()>
                        <a class="btn" href="/register">
                            "Create an Account"
                        </a>
                    </Show>
                </div>
            </section>
            <section class="home-page__columns">
                <div>
                    <h2>"For Students"</h2>
                    <p>"Apply in one click, bookmark roles for later, and track every application's status in one place."</p>
                </div>
                <div>
                    <h2>"For Companies"</h2>
                    <p>"Post openings, review applicants, and move them through accept or reject without leaving the page."</p>
                </div>
                <div>
                    <h2>"How It Works"</h2>
                    <p>"Register with a role, sign in, and the workspace adapts: students browse and apply, recruiters post and review."</p>
                </div>
            </section>
        </div>
    }
}
