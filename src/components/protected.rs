//! Route wrapper applying the session/role gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`Protected`] so unauthenticated
//! and wrong-role visitors get identical redirect behavior. The decision
//! itself is the pure function in `state::guard`; this component only
//! performs the navigation it names.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::guard::{RouteDecision, route_decision};
use crate::state::session::SessionState;

/// Gate `children` behind the current session. Without `roles`, any
/// authenticated identity is admitted.
#[component]
pub fn Protected(#[prop(optional)] roles: Option<Vec<Role>>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let effect_roles = roles.clone();
    Effect::new(move || {
        match route_decision(&session.get(), effect_roles.as_deref()) {
            RouteDecision::Allow => {}
            RouteDecision::RedirectToLogin => navigate("/login", NavigateOptions::default()),
            RouteDecision::RedirectToHome => navigate("/", NavigateOptions::default()),
        }
    });

    let show_roles = roles;
    view! {
        <Show
            when=move || route_decision(&session.get(), show_roles.as_deref()) == RouteDecision::Allow
            fallback=move || view! { <p class="guard-redirect">"Redirecting..."</p> }
        >
            {children()}
        </Show>
    }
}
