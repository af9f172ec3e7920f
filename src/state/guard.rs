//! Role-based route gating.
//!
//! DESIGN
//! ======
//! The decision is a pure function of the session and the route's declared
//! roles; it only decides, callers perform the navigation. This keeps every
//! protected route applying identical redirect behavior.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::session::{SessionPhase, SessionState};
use crate::net::types::Role;

/// Outcome of gating one route render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the route.
    Allow,
    /// No authenticated session; send the visitor to the login screen.
    RedirectToLogin,
    /// Authenticated, but the role is not permitted here; send home.
    RedirectToHome,
}

/// Decide whether the current session may render a route. `required_roles`
/// of `None` means any authenticated identity is welcome.
pub fn route_decision(session: &SessionState, required_roles: Option<&[Role]>) -> RouteDecision {
    let SessionPhase::Authenticated(identity) = &session.phase else {
        return RouteDecision::RedirectToLogin;
    };
    match required_roles {
        Some(roles) if !roles.contains(&identity.profile.role) => RouteDecision::RedirectToHome,
        _ => RouteDecision::Allow,
    }
}
