//! Registration page. The chosen role is fixed at creation; it is not
//! editable afterwards.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::{RegisterPayload, RegisterProfile, Role};

fn parse_role(value: &str) -> Role {
    match value {
        "recruiter" => Role::Recruiter,
        _ => Role::Student,
    }
}

/// Trim and require every field before submission.
fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<RegisterPayload, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email, and password.");
    }
    Ok(RegisterPayload {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        profile: RegisterProfile { role },
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("student".to_owned());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_register_input(
            &username.get(),
            &email.get(),
            &password.get(),
            parse_role(&role.get()),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&payload).await {
                Ok(()) => {
                    success.set(true);
                    // Give the confirmation a beat to be read, then hand off
                    // to the login screen.
                    gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(err) => {
                    error.set(err.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <div class="auth-page">
            <Navbar/>
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <Show when=move || success.get()>
                    <p class="auth-success">"Registered successfully! Redirecting..."</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
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
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="student">"Student"</option>
                        <option value="recruiter">"Recruiter"</option>
                    </select>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-aside">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
