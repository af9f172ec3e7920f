//! Completion screen for the emailed password-reset link. The uid and token
//! arrive in the route, minted by the backend.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = password.get();
        if password_value.is_empty() {
            error.set("Enter a new password.".to_owned());
            return;
        }
        if password_value != confirm.get() {
            error.set("Passwords do not match.".to_owned());
            return;
        }
        let (Some(uid), Some(token)) = (params.read().get("uid"), params.read().get("token")) else {
            error.set("This reset link is incomplete.".to_owned());
            return;
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&uid, &token, &password_value).await {
                    Ok(confirmation) => {
                        message.set(confirmation);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, uid, token, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <Navbar/>
            <div class="auth-card">
                <h1>"Reset Password"</h1>
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
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Set New Password"
                    </button>
                </form>
            </div>
        </div>
    }
}
