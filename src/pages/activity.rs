//! Per-account activity feed.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::ActivityLog;
use crate::state::session::SessionState;

/// Human label for a machine action name. Unknown actions fall back to the
/// raw name so new backend vocabulary still renders.
fn action_label(action: &str) -> String {
    let label = match action {
        "internship_posted" => "Posted an internship",
        "internship_updated" => "Updated an internship",
        "internship_deleted" => "Deleted an internship",
        "application_submitted" => "Applied to an internship",
        "application_status_changed" => "Application status changed",
        "application_withdrawn" => "Withdrew an application",
        "bookmark_added" => "Bookmarked an internship",
        "bookmark_removed" => "Removed a bookmark",
        "profile_updated" => "Updated profile",
        "profile_picture_updated" => "Updated profile picture",
        "login" => "Logged in",
        "logout" => "Logged out",
        "password_changed" => "Changed password",
        other => other,
    };
    label.to_owned()
}

#[component]
pub fn ActivityPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rows = RwSignal::new(Vec::<ActivityLog>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        if !session.get().is_authenticated() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_activity().await {
                Ok(fetched) => rows.set(fetched),
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
            <h1>"My Activity"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading activity..."</p> }
            >
                <Show
                    when=move || !rows.get().is_empty()
                    fallback=move || view! { <p>"No activity recorded yet."</p> }
                >
                    <ul class="activity-feed">
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let label = action_label(&row.action);
                                    let details = row.details.clone().unwrap_or_default();
                                    view! {
                                        <li class="activity-feed__row">
                                            <span class="activity-feed__label">{label}</span>
                                            <span class="activity-feed__details">{details}</span>
                                            <span class="activity-feed__time">{row.timestamp.clone()}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
