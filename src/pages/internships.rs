//! Public internship browse screen: paginated fetch, client-side filters.

#[cfg(test)]
#[path = "internships_test.rs"]
mod internships_test;

use leptos::prelude::*;

use crate::components::internship_card::InternshipCard;
use crate::components::navbar::Navbar;
use crate::net::types::Internship;

/// Apply the client-side filters and date sort to one fetched page.
/// `posted_on` is ISO 8601, so lexicographic order is date order.
fn filter_and_sort(rows: &[Internship], location: &str, internship_type: &str, newest_first: bool) -> Vec<Internship> {
    let location = location.trim().to_lowercase();
    let internship_type = internship_type.trim().to_lowercase();
    let mut rows: Vec<Internship> = rows
        .iter()
        .filter(|row| {
            (location.is_empty() || row.location.to_lowercase().contains(&location))
                && (internship_type.is_empty()
                    || row.internship_type.to_lowercase().contains(&internship_type))
        })
        .cloned()
        .collect();
    if newest_first {
        rows.sort_by(|a, b| b.posted_on.cmp(&a.posted_on));
    } else {
        rows.sort_by(|a, b| a.posted_on.cmp(&b.posted_on));
    }
    rows
}

#[component]
pub fn InternshipsPage() -> impl IntoView {
    let internships = RwSignal::new(Vec::<Internship>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let page = RwSignal::new(1_i64);
    let total_pages = RwSignal::new(1_i64);

    let location_filter = RwSignal::new(String::new());
    let type_filter = RwSignal::new(String::new());
    let newest_first = RwSignal::new(true);

    // Refetch whenever the page changes. A response for a page the user has
    // already navigated away from is discarded on arrival.
    Effect::new(move || {
        let requested_page = page.get();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_internships(requested_page).await;
            if page.get_untracked() != requested_page {
                return;
            }
            match result {
                Ok(batch) => {
                    internships.set(batch.results);
                    total_pages.set(batch.total_pages.unwrap_or(1).max(1));
                    error.set(String::new());
                }
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = requested_page;
        }
    });

    let on_prev = move |_| {
        if page.get() > 1 {
            page.update(|p| *p -= 1);
        }
    };
    let on_next = move |_| {
        if page.get() < total_pages.get() {
            page.update(|p| *p += 1);
        }
    };

    view! {
        <div class="internships-page">
            <Navbar/>
            <h1>"Browse Internships"</h1>

            <div class="internships-page__filters">
                <input
                    class="filter-input"
                    type="text"
                    placeholder="Filter by location"
                    prop:value=move || location_filter.get()
                    on:input=move |ev| location_filter.set(event_target_value(&ev))
                />
                <input
                    class="filter-input"
                    type="text"
                    placeholder="Filter by type"
                    prop:value=move || type_filter.get()
                    on:input=move |ev| type_filter.set(event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| newest_first.update(|n| *n = !*n)>
                    {move || if newest_first.get() { "Newest first" } else { "Oldest first" }}
                </button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading internships..."</p> }
            >
                <div class="internships-page__cards">
                    {move || {
                        filter_and_sort(
                            &internships.get(),
                            &location_filter.get(),
                            &type_filter.get(),
                            newest_first.get(),
                        )
                            .into_iter()
                            .map(|internship| view! { <InternshipCard internship=internship/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <div class="internships-page__pager">
                <button class="btn" on:click=on_prev disabled=move || page.get() <= 1>
                    "Previous"
                </button>
                <span class="pager__status">
                    {move || format!("Page {} of {}", page.get(), total_pages.get())}
                </span>
                <button class="btn" on:click=on_next disabled=move || page.get() >= total_pages.get()>
                    "Next"
                </button>
            </div>
        </div>
    }
}
