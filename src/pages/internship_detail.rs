//! Internship detail screen with the apply and bookmark actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The detail view is public; the apply/bookmark affordances appear for
//! signed-in students and the edit/delete/applicants row for the posting
//! recruiter. Both mutations run through the shared optimistic protocol in
//! `state::optimistic`. Route changes do not unmount this component, so a
//! fetch result arriving for a previously viewed id is discarded.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::types::{Internship, Role};
use crate::state::optimistic::{SubmitState, ToggleState};
use crate::state::session::SessionState;

#[component]
pub fn InternshipDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let internship = RwSignal::new(None::<Internship>);
    let error = RwSignal::new(String::new());
    let bookmark = RwSignal::new(ToggleState::default());
    let application = RwSignal::new(SubmitState::default());
    let action_error = RwSignal::new(String::new());

    let route_id = move || params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());
    let route_id_untracked =
        move || params.read_untracked().get("id").and_then(|raw| raw.parse::<i64>().ok());

    // Fetch the internship and, for signed-in students, the derived
    // applied/bookmarked facts. Keyed by the routed id so a late response
    // for another internship is dropped instead of applied.
    Effect::new(move || {
        let Some(requested_id) = route_id() else {
            return;
        };
        let is_student = session.get().role() == Some(Role::Student);
        internship.set(None);
        bookmark.set(ToggleState::default());
        application.set(SubmitState::default());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_internship(requested_id).await;
            if route_id_untracked() != Some(requested_id) {
                return;
            }
            match fetched {
                Ok(record) => {
                    internship.set(Some(record));
                    error.set(String::new());
                }
                Err(err) => {
                    error.set(err.to_string());
                    return;
                }
            }

            if !is_student {
                return;
            }
            if let Ok(applied) = crate::net::api::check_applied(requested_id).await {
                if route_id_untracked() != Some(requested_id) {
                    return;
                }
                if applied {
                    application.update(SubmitState::sync_done);
                }
            }
            if let Ok(bookmarked) = crate::net::api::check_bookmarked(requested_id).await {
                if route_id_untracked() != Some(requested_id) {
                    return;
                }
                bookmark.update(|b| b.sync(bookmarked));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (requested_id, is_student);
        }
    });

    let on_apply = move |_| {
        let Some(internship_id) = route_id_untracked() else {
            return;
        };
        action_error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::state::optimistic::run_submit(application, move || {
                crate::net::api::apply_to_internship(internship_id)
            })
            .await;
            if let Err(err) = result {
                if err.is_unauthenticated() {
                    crate::state::session::demote(session);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = internship_id;
        }
    };

    let on_toggle_bookmark = move |_| {
        let Some(internship_id) = route_id_untracked() else {
            return;
        };
        action_error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::state::optimistic::run_toggle(
                bookmark,
                move || crate::net::api::add_bookmark(internship_id),
                move || crate::net::api::remove_bookmark(internship_id),
            )
            .await;
            if let Err(err) = result {
                if err.is_unauthenticated() {
                    crate::state::session::demote(session);
                }
                action_error.set(err.to_string());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = internship_id;
        }
    };

    let navigate_edit = navigate.clone();
    let on_edit = move |_| {
        if let Some(id) = route_id_untracked() {
            navigate_edit(&format!("/internships/{id}/edit"), NavigateOptions::default());
        }
    };

    let navigate_applicants = navigate.clone();
    let on_applicants = move |_| {
        if let Some(id) = route_id_untracked() {
            navigate_applicants(&format!("/internships/{id}/applicants"), NavigateOptions::default());
        }
    };

    let navigate_delete = navigate.clone();
    let on_delete = move |_| {
        let Some(internship_id) = route_id_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this internship permanently?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let navigate_delete = navigate_delete.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_internship(internship_id).await {
                    Ok(()) => navigate_delete("/internships/mine", NavigateOptions::default()),
                    Err(err) => {
                        if err.is_unauthenticated() {
                            crate::state::session::demote(session);
                        }
                        action_error.set(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_delete, internship_id);
        }
    };

    let is_owner = move || {
        let state = session.get();
        match (state.identity(), internship.get()) {
            (Some(identity), Some(record)) => identity.id == record.recruiter,
            _ => false,
        }
    };
    let can_apply = move || session.get().role() == Some(Role::Student) && !is_owner();

    view! {
        <div class="detail-page">
            <Navbar/>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || internship.get().is_some()
                fallback=move || view! { <p>"Loading internship..."</p> }
            >
                {move || internship.get().map(view_internship)}

                <Show when=can_apply>
                    <div class="detail-page__actions">
                        <button
                            class="btn btn--primary"
                            on:click=on_apply
                            disabled=move || {
                                let state = application.get();
                                state.is_done() || state.in_flight()
                            }
                        >
                            {move || {
                                let state = application.get();
                                if state.is_done() {
                                    "Already Applied"
                                } else if state.in_flight() {
                                    "Applying..."
                                } else {
                                    "Apply Now"
                                }
                            }}
                        </button>
                        <button class="btn" on:click=on_toggle_bookmark>
                            {move || {
                                if bookmark.get().value() { "Remove Bookmark" } else { "Bookmark" }
                            }}
                        </button>
                    </div>
                    <Show when=move || application.get().error.is_some()>
                        <p class="page-error">
                            {move || application.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                </Show>

                {
                    let on_edit = on_edit.clone();
                    let on_delete = on_delete.clone();
                    let on_applicants = on_applicants.clone();
                    view! {
                        <Show when=is_owner>
                            <div class="detail-page__actions">
                                <button class="btn" on:click=on_edit.clone()>"Edit"</button>
                                <button class="btn btn--danger" on:click=on_delete.clone()>"Delete"</button>
                                <button class="btn" on:click=on_applicants.clone()>"View Applicants"</button>
                            </div>
                        </Show>
                    }
                }

                <Show when=move || !action_error.get().is_empty()>
                    <p class="page-error">{move || action_error.get()}</p>
                </Show>
            </Show>
        </div>
    }
}

fn view_internship(record: Internship) -> impl IntoView {
    let stipend = record
        .stipend
        .map_or_else(|| "Not disclosed".to_owned(), |amount| format!("₹{amount}"));
    let status = format!("{:?}", record.status).to_lowercase();
    let expiry = record.expiry_date.clone();
    let link = record.apply_link.clone();
    view! {
        <div class="detail-page__body">
            <h1>{record.title}</h1>
            <p><strong>"Company: "</strong>{record.company}</p>
            <p><strong>"Location: "</strong>{record.location}</p>
            <p><strong>"Type: "</strong>{record.internship_type}</p>
            <p><strong>"Stipend: "</strong>{stipend}</p>
            <p><strong>"Status: "</strong>{status}</p>
            <p><strong>"Posted On: "</strong>{record.posted_on}</p>
            <Show when={
                let expiry = record.expiry_date.clone();
                move || expiry.is_some()
            }>
                <p><strong>"Expiry Date: "</strong>{expiry.clone().unwrap_or_default()}</p>
            </Show>
            <p class="detail-page__description">{record.description}</p>
            <Show when={
                let link = record.apply_link.clone();
                move || link.as_deref().is_some_and(|l| !l.is_empty())
            }>
                <p>
                    <a href=link.clone().unwrap_or_default() target="_blank" rel="noopener noreferrer">
                        "External Apply Link"
                    </a>
                </p>
            </Show>
        </div>
    }
}
