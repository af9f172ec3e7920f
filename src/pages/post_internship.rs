//! Recruiter form for posting a new internship.

#[cfg(test)]
#[path = "post_internship_test.rs"]
mod post_internship_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::net::types::InternshipDraft;
use crate::state::session::SessionState;

/// Assemble a draft from raw form values. Shared with the edit screen.
pub(crate) fn build_draft(
    title: &str,
    description: &str,
    company: &str,
    location: &str,
    stipend_raw: &str,
    internship_type: &str,
    apply_link: &str,
    expiry_date: &str,
) -> Result<InternshipDraft, &'static str> {
    let title = title.trim();
    let company = company.trim();
    let description = description.trim();
    if title.is_empty() || company.is_empty() || description.is_empty() {
        return Err("Title, company, and description are required.");
    }
    let stipend = match stipend_raw.trim() {
        "" => None,
        raw => Some(raw.parse::<i64>().map_err(|_| "Stipend must be a whole number.")?),
    };
    let optional = |raw: &str| {
        let raw = raw.trim();
        if raw.is_empty() { None } else { Some(raw.to_owned()) }
    };
    Ok(InternshipDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        company: company.to_owned(),
        location: location.trim().to_owned(),
        stipend,
        internship_type: internship_type.trim().to_owned(),
        apply_link: optional(apply_link),
        expiry_date: optional(expiry_date),
    })
}

#[component]
pub fn PostInternshipPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let stipend = RwSignal::new(String::new());
    let internship_type = RwSignal::new(String::new());
    let apply_link = RwSignal::new(String::new());
    let expiry_date = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
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
                match crate::net::api::create_internship(&draft).await {
                    Ok(()) => navigate("/internships/mine", NavigateOptions::default()),
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
            let _ = (&navigate, draft);
        }
    };

    view! {
        <div class="form-page">
            <Navbar/>
            <h1>"Post Internship"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <form class="form-page__form" on:submit=on_submit>
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
                    placeholder="Type (remote, onsite, hybrid)"
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
                    placeholder="Expiry date (optional)"
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
                    {move || if busy.get() { "Posting..." } else { "Post Internship" }}
                </button>
            </form>
        </div>
    }
}
