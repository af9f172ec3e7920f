//! Out-of-band password recovery: request a reset email.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            error.set("Enter your account's email first.".to_owned());
            return;
        }
        busy.set(true);
        message.set(String::new());
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::forgot_password(&email_value).await {
                Ok(confirmation) => message.set(confirmation),
                Err(err) => error.set(err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="auth-page">
            <Navbar/>
            <div class="auth-card">
                <h1>"Forgot Password"</h1>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-success">{move || message.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send Reset Link"
                    </button>
                </form>
            </div>
        </div>
    }
}
