//! Profile screen: view and edit the account and profile halves of the
//! identity record.
//!
//! The role line is display-only; role is fixed at registration. After a
//! successful save the identity is refreshed from the backend so every
//! screen sees the replaced record, never a locally merged one.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::components::navbar::Navbar;
use crate::net::api::UploadFile;
use crate::net::types::{AccountUpdate, ProfileUpdate, Role};
use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let editing = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let picture = RwSignal::new_local(None::<UploadFile>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let start_editing = move |_| {
        let Some(identity) = session.get_untracked().identity().cloned() else {
            return;
        };
        username.set(identity.username);
        email.set(identity.email);
        first_name.set(identity.profile.first_name.unwrap_or_default());
        last_name.set(identity.profile.last_name.unwrap_or_default());
        bio.set(identity.profile.bio);
        location.set(identity.profile.location);
        picture.set(None);
        error.set(String::new());
        editing.set(true);
    };

    let on_picture_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            picture.set(file);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &ev;
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let account = AccountUpdate {
                username: Some(username.get_untracked().trim().to_owned()),
                email: Some(email.get_untracked().trim().to_owned()),
            };
            let profile = ProfileUpdate {
                first_name: Some(first_name.get_untracked()),
                last_name: Some(last_name.get_untracked()),
                bio: Some(bio.get_untracked()),
                location: Some(location.get_untracked()),
            };
            let file = picture.get_untracked();
            leptos::task::spawn_local(async move {
                let result = async {
                    crate::net::api::patch_me_user(&account).await?;
                    crate::net::api::patch_me_profile(&profile, file).await
                }
                .await;
                match result {
                    Ok(()) => match crate::state::session::refresh(session).await {
                        Ok(_) => {
                            editing.set(false);
                            picture.set(None);
                        }
                        Err(message) => error.set(message),
                    },
                    Err(err) => {
                        if err.is_unauthenticated() {
                            crate::state::session::demote(session);
                        }
                        error.set(err.to_string());
                    }
                }
                busy.set(false);
            });
        }
    };

    let role_label = move || {
        match session.get().role() {
            Some(Role::Student) => "student",
            Some(Role::Recruiter) => "recruiter",
            None => "",
        }
    };
    let field = move |value: Option<String>| {
        match value {
            Some(value) if !value.is_empty() => value,
            _ => "—".to_owned(),
        }
    };

    view! {
        <div class="profile-page">
            <Navbar/>
            <h1>"My Profile"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <div class="profile-page__card">
                            {move || {
                                session
                                    .get()
                                    .identity()
                                    .map(|identity| {
                                        view! {
                                            <div class="profile-page__summary">
                                                <h2>{identity.username.clone()}</h2>
                                                <p class="profile-page__email">{identity.email.clone()}</p>
                                            </div>
                                            <dl class="profile-page__fields">
                                                <dt>"First Name"</dt>
                                                <dd>{field(identity.profile.first_name.clone())}</dd>
                                                <dt>"Last Name"</dt>
                                                <dd>{field(identity.profile.last_name.clone())}</dd>
                                                <dt>"Location"</dt>
                                                <dd>{field(Some(identity.profile.location.clone()))}</dd>
                                                <dt>"Role"</dt>
                                                <dd>{role_label()}</dd>
                                                <dt>"Bio"</dt>
                                                <dd>{field(Some(identity.profile.bio.clone()))}</dd>
                                            </dl>
                                        }
                                    })
                            }}
                            <button class="btn btn--primary" on:click=start_editing>
                                "Edit Profile"
                            </button>
                        </div>
                    }
                }
            >
                <form class="profile-page__card auth-form" on:submit=on_save>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Location"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <textarea
                        class="auth-input form-input--textarea"
                        placeholder="Bio"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                    <label class="profile-page__upload">
                        "Profile picture"
                        <input type="file" accept="image/*" on:change=on_picture_change/>
                    </label>
                    <div class="profile-page__actions">
                        <button class="btn" type="button" on:click=move |_| editing.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
