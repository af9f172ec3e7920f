//! Top navigation bar with role-conditioned links.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session;
use crate::state::session::SessionState;

/// Site-wide navbar. Public visitors see browse/login/register; signed-in
/// accounts see their role's workspace links plus profile and logout.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let display_name = move || {
        session
            .get()
            .identity()
            .map(|identity| identity.display_name().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session::logout(session);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    let dark = RwSignal::new(crate::util::dark_mode::read_preference());
    Effect::new(move || crate::util::dark_mode::apply(dark.get()));
    let on_theme = move |_| {
        let next = !dark.get_untracked();
        crate::util::dark_mode::save_preference(next);
        dark.set(next);
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "InternLink"
            </a>

            <nav class="navbar__links">
                <a href="/internships">"Internships"</a>
                <Show when=move || session.get().role() == Some(Role::Student)>
                    <a href="/applications">"My Applications"</a>
                    <a href="/bookmarks">"Bookmarks"</a>
                </Show>
                <Show when=move || session.get().role() == Some(Role::Recruiter)>
                    <a href="/internships/mine">"My Postings"</a>
                    <a href="/internships/create">"Post Internship"</a>
                </Show>
                <Show when=move || session.get().is_authenticated()>
                    <a href="/activity">"My Activity"</a>
                </Show>
            </nav>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__theme"
                on:click=on_theme
                title=move || if dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
            >
                {move || if dark.get() { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || session.get().is_authenticated()
                fallback=move || {
                    view! {
                        <nav class="navbar__auth">
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        </nav>
                    }
                }
            >
                <nav class="navbar__auth">
                    <a class="navbar__self" href="/profile">
                        {display_name}
                    </a>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
