//! In-session password change for the signed-in account.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

/// Require all fields and a matching confirmation.
fn validate_change_input(
    old_password: &str,
    new_password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    if old_password.is_empty() || new_password.is_empty() {
        return Err("Enter your current and new password.");
    }
    if new_password != confirm {
        return Err("New passwords do not match.");
    }
    Ok((old_password.to_owned(), new_password.to_owned()))
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (old_value, new_value) =
            match validate_change_input(&old_password.get(), &new_password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        message.set(String::new());
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&old_value, &new_value).await {
                Ok(()) => {
                    message.set("Password changed successfully.".to_owned());
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => {
                    if err.is_unauthenticated() {
                        crate::state::session::demote(session);
                    }
                    error.set(err.to_string());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (old_value, new_value);
        }
    };

    view! {
        <div class="auth-page">
            <Navbar/>
            <div class="auth-card">
                <h1>"Change Password"</h1>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-success">{move || message.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Current password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Change Password"
                    </button>
                </form>
            </div>
        </div>
    }
}
