//! Recruiter view of their own postings.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::Internship;
use crate::state::session::SessionState;

#[component]
pub fn MyInternshipsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let internships = RwSignal::new(Vec::<Internship>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        if !session.get().is_authenticated() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_internships().await {
                Ok(rows) => internships.set(rows),
                Err(err) => {
                    if err.is_unauthenticated() {
                        crate::state::session::demote(session);
                    }
                    error.set(err.to_string());
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="list-page">
            <Navbar/>
            <h1>"My Postings"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading postings..."</p> }
            >
                <Show
                    when=move || !internships.get().is_empty()
                    fallback=move || {
                        view! {
                            <p>
                                "Nothing posted yet. "
                                <a href="/internships/create">"Post your first internship"</a>
                            </p>
                        }
                    }
                >
                    <div class="list-page__rows">
                        {move || {
                            internships
                                .get()
                                .into_iter()
                                .map(|internship| {
                                    let view_href = format!("/internships/{}", internship.id);
                                    let edit_href = format!("/internships/{}/edit", internship.id);
                                    let applicants_href =
                                        format!("/internships/{}/applicants", internship.id);
                                    let status = format!("{:?}", internship.status).to_lowercase();
                                    view! {
                                        <div class="list-row">
                                            <div class="list-row__body">
                                                <a class="list-row__title" href=view_href>
                                                    {internship.title.clone()}
                                                </a>
                                                <p class="list-row__meta">
                                                    {format!("{} • {}", internship.location, status)}
                                                </p>
                                                <p class="list-row__meta">
                                                    {format!("Posted {}", internship.posted_on)}
                                                </p>
                                            </div>
                                            <nav class="list-row__actions">
                                                <a class="btn" href=edit_href>"Edit"</a>
                                                <a class="btn" href=applicants_href>"Applicants"</a>
                                            </nav>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
