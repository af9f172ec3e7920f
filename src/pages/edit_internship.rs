//! Recruiter form for editing an existing posting.
//!
//! Prefills from a fresh fetch keyed by the routed id; a response arriving
//! after the user navigated to a different posting is discarded.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::pages::post_internship::build_draft;
use crate::state::session::SessionState;

#[component]
pub fn EditInternshipPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let stipend = RwSignal::new(String::new());
    let internship_type = RwSignal::new(String::new());
    let apply_link = RwSignal::new(String::new());
    let expiry_date = RwSignal::new(String::new());
    let loaded = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let route_id = move || params.read().get("id").and_then(|raw| raw.parse::<i64>().ok());
    let route_id_untracked =
        move || params.read_untracked().get("id").and_then(|raw| raw.parse::<i64>().ok());

    Effect::new(move || {
        let Some(requested_id) = route_id() else {
            return;
        };
        loaded.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_internship(requested_id).await;
            if route_id_untracked() != Some(requested_id) {
                return;
            }
            match fetched {
                Ok(record) => {
                    title.set(record.title);
                    description.set(record.description);
                    company.set(record.company);
                    location.set(record.location);
                    stipend.set(record.stipend.map(|v| v.to_string()).unwrap_or_default());
                    internship_type.set(record.internship_type);
                    apply_link.set(record.apply_link.unwrap_or_default());
                    expiry_date.set(record.expiry_date.unwrap_or_default());
                    loaded.set(true);
                }
                Err(err) => error.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = requested_id;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(internship_id) = route_id_untracked() else {
            return;
        };
        let draft = match build_draft(
            &title.get(),
            &description.get(),
            &company.get(),
            &location.get(),
            &stipend.get(),
            &internship_type.get(),
            &apply_link.get(),
            &expiry_date.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_internship(internship_id, &draft).await {
                    Ok(()) => {
                        navigate(&format!("/internships/{internship_id}"), NavigateOptions::default());
                    }
                    Err(err) => {
                        if err.is_unauthenticated() {
                            crate::state::session::demote(session);
                        }
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, internship_id, draft);
        }
    };

    view! {
        <div class="form-page">
            <Navbar/>
            <h1>"Edit Internship"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || loaded.get()
                fallback=move || view! { <p>"Loading posting..."</p> }
            >
                <form class="form-page__form" on:submit=on_submit.clone()>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Company"
                        prop:value=move || company.get()
                        on:input=move |ev| company.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Location"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Type"
                        prop:value=move || internship_type.get()
                        on:input=move |ev| internship_type.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Monthly stipend (optional)"
                        prop:value=move || stipend.get()
                        on:input=move |ev| stipend.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="text"
                        placeholder="External apply link (optional)"
                        prop:value=move || apply_link.get()
                        on:input=move |ev| apply_link.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="date"
                        prop:value=move || expiry_date.get()
                        on:input=move |ev| expiry_date.set(event_target_value(&ev))
                    />
                    <textarea
                        class="form-input form-input--textarea"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
