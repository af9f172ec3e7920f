//! Reusable card for internship list rows.
//!
//! DESIGN
//! ======
//! Keeps list presentation consistent between the public browse screen and
//! the recruiter's posted list. The bookmark star is the shared optimistic
//! toggle: it flips before the request is issued and rolls back if the
//! request fails.

#[cfg(test)]
#[path = "internship_card_test.rs"]
mod internship_card_test;

use leptos::prelude::*;

use crate::net::types::{Internship, Role};
use crate::state::optimistic::ToggleState;
use crate::state::session::SessionState;

const DESCRIPTION_LIMIT: usize = 170;

/// Truncate a description for card display.
fn short_description(description: &str) -> String {
    let count = description.chars().count();
    if count <= DESCRIPTION_LIMIT {
        return description.to_owned();
    }
    let mut short: String = description.chars().take(DESCRIPTION_LIMIT - 3).collect();
    short.push_str("...");
    short
}

fn stipend_label(stipend: Option<i64>) -> String {
    match stipend {
        Some(amount) => format!("₹{amount}"),
        None => "Not disclosed".to_owned(),
    }
}

/// A clickable card representing one internship. The bookmark star renders
/// only for signed-in students, seeded from the record's server-computed
/// bookmarked flag.
#[component]
pub fn InternshipCard(internship: Internship) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let bookmark = RwSignal::new(ToggleState::new(internship.bookmarked));
    let bookmark_error = RwSignal::new(None::<String>);

    let internship_id = internship.id;
    let on_toggle = move |_| {
        bookmark_error.set(None);
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
                bookmark_error.set(Some(err.to_string()));
            }
        });
    };

    let detail_href = format!("/internships/{internship_id}");
    let summary = format!("{} • {}", internship.company, internship.location);
    let meta = format!("{} • {}", internship.internship_type, stipend_label(internship.stipend));
    let description = short_description(&internship.description);

    view! {
        <div class="internship-card">
            <Show when=move || session.get().role() == Some(Role::Student)>
                <button
                    class="internship-card__bookmark"
                    on:click=on_toggle
                    title=move || {
                        if bookmark.get().value() { "Remove bookmark" } else { "Add bookmark" }
                    }
                >
                    {move || if bookmark.get().value() { "★" } else { "☆" }}
                </button>
            </Show>

            <h3 class="internship-card__title">{internship.title.clone()}</h3>
            <p class="internship-card__summary">{summary}</p>
            <p class="internship-card__meta">{meta}</p>
            <p class="internship-card__description">{description}</p>
            <Show when=move || bookmark_error.get().is_some()>
                <p class="internship-card__error">{move || bookmark_error.get().unwrap_or_default()}</p>
            </Show>
            <a class="btn internship-card__view" href=detail_href>
                "View Details"
            </a>
        </div>
    }
}
