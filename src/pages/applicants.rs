//! Recruiter review screen: applicants for one posting, with status updates.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::Navbar;
use crate::net::types::{Applicant, ApplicationStatus};
use crate::state::session::SessionState;

fn status_from_value(value: &str) -> ApplicationStatus {
    match value {
        "accepted" => ApplicationStatus::Accepted,
        "rejected" => ApplicationStatus::Rejected,
        _ => ApplicationStatus::Pending,
    }
}

#[component]
pub fn ApplicantsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let applicants = RwSignal::new(Vec::<Applicant>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let route_id = move || params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());
    let route_id_untracked =
        move || params.read_untracked().get("id").and_then(|raw| raw.parse::<i64>().ok());

    Effect::new(move || {
        let Some(requested_id) = route_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_applicants(requested_id).await;
            if route_id_untracked() != Some(requested_id) {
                return;
            }
            match fetched {
                Ok(rows) => applicants.set(rows),
                Err(err) => {
                    if err.is_unauthenticated() {
                        crate::state::session::demote(session);
                    }
                    error.set(err.to_string());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = requested_id;
        }
    });

    let on_status_change = move |application_id: i64, status: ApplicationStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_application_status(application_id, status).await {
                Ok(()) => {
                    applicants.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|a| a.id == application_id) {
                            row.status = status;
                        }
                    });
                }
                Err(err) => {
                    if err.is_unauthenticated() {
                        crate::state::session::demote(session);
                    }
                    error.set(err.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (application_id, status);
        }
    };

    view! {
        <div class="list-page">
            <Navbar/>
            <h1>"Applicants"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading applicants..."</p> }
            >
                <Show
                    when=move || !applicants.get().is_empty()
                    fallback=move || view! { <p>"No applicants yet."</p> }
                >
                    <div class="list-page__rows">
                        {move || {
                            applicants
                                .get()
                                .into_iter()
                                .map(|applicant| {
                                    let application_id = applicant.id;
                                    let current = applicant.status.as_str();
                                    let contact = format!(
                                        "{} • {}",
                                        applicant.user.username, applicant.user.email
                                    );
                                    let resume = match applicant.resume.clone() {
                                        Some(url) => view! {
                                            <a class="list-row__resume" href=url target="_blank" rel="noopener noreferrer">
                                                "View Resume"
                                            </a>
                                        }
                                            .into_any(),
                                        None => view! {
                                            <span class="list-row__resume">"No resume"</span>
                                        }
                                            .into_any(),
                                    };
                                    view! {
                                        <div class="list-row">
                                            <div class="list-row__body">
                                                <span class="list-row__title">
                                                    {applicant.user.display_name().to_owned()}
                                                </span>
                                                <p class="list-row__meta">{contact}</p>
                                                <p class="list-row__meta">
                                                    {format!("Applied {}", applicant.applied_on)}
                                                </p>
                                                {resume}
                                            </div>
                                            <select
                                                class="list-row__status"
                                                prop:value=current
                                                on:change=move |ev| {
                                                    on_status_change(
                                                        application_id,
                                                        status_from_value(&event_target_value(&ev)),
                                                    );
                                                }
                                            >
                                                <option value="pending">"pending"</option>
                                                <option value="accepted">"accepted"</option>
                                                <option value="rejected">"rejected"</option>
                                            </select>
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
