//! Student bookmark list with one-shot removal.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::Bookmark;
use crate::state::session::SessionState;

#[component]
pub fn BookmarksPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let bookmarks = RwSignal::new(Vec::<Bookmark>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        if !session.get().is_authenticated() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_bookmarks().await {
                Ok(rows) => bookmarks.set(rows),
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

    let on_remove = move |internship_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_bookmark(internship_id).await {
                Ok(()) => bookmarks.update(|rows| rows.retain(|b| b.internship != internship_id)),
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
            let _ = internship_id;
        }
    };

    view! {
        <div class="list-page">
            <Navbar/>
            <h1>"My Bookmarks"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading bookmarks..."</p> }
            >
                <Show
                    when=move || !bookmarks.get().is_empty()
                    fallback=move || view! { <p>"No bookmarks yet."</p> }
                >
                    <div class="list-page__rows">
                        {move || {
                            bookmarks
                                .get()
                                .into_iter()
                                .map(|bookmark| {
                                    let internship_id = bookmark.internship;
                                    let href = format!("/internships/{internship_id}");
                                    let summary = format!(
                                        "{} • {}",
                                        bookmark.internship_company, bookmark.internship_location
                                    );
                                    view! {
                                        <div class="list-row">
                                            <div class="list-row__body">
                                                <a class="list-row__title" href=href>
                                                    {bookmark.internship_title.clone()}
                                                </a>
                                                <p class="list-row__meta">{summary}</p>
                                                <p class="list-row__meta">
                                                    {format!("Saved {}", bookmark.bookmarked_on)}
                                                </p>
                                            </div>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_remove(internship_id)
                                            >
                                                "Remove"
                                            </button>
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
