//! Student view of submitted applications and their review status.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::Application;
use crate::state::session::SessionState;

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        if !session.get().is_authenticated() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_applications().await {
                Ok(rows) => applications.set(rows),
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
            <h1>"My Applications"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading applications..."</p> }
            >
                <Show
                    when=move || !applications.get().is_empty()
                    fallback=move || view! { <p>"You have not applied to anything yet."</p> }
                >
                    <div class="list-page__rows">
                        {move || {
                            applications
                                .get()
                                .into_iter()
                                .map(|application| {
                                    let href = format!("/internships/{}", application.internship.id);
                                    let summary = format!(
                                        "{} • {}",
                                        application.internship.company, application.internship.location
                                    );
                                    let status = application.status.as_str();
                                    view! {
                                        <div class="list-row">
                                            <div class="list-row__body">
                                                <a class="list-row__title" href=href>
                                                    {application.internship.title.clone()}
                                                </a>
                                                <p class="list-row__meta">{summary}</p>
                                                <p class="list-row__meta">
                                                    {format!("Applied {}", application.applied_on)}
                                                </p>
                                            </div>
                                            <span class=format!("status-badge status-badge--{status}")>
                                                {status}
                                            </span>
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
