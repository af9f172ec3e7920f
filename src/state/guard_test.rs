use super::*;
use crate::net::types::{Identity, Profile};

fn authenticated(role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.restore(Identity {
        id: 1,
        username: "u".to_owned(),
        email: "u@example.com".to_owned(),
        profile: Profile {
            first_name: None,
            last_name: None,
            profile_picture_url: None,
            bio: String::new(),
            location: String::new(),
            role,
        },
    });
    state
}

#[test]
fn unauthenticated_always_redirects_to_login() {
    let state = SessionState::default();
    assert_eq!(route_decision(&state, None), RouteDecision::RedirectToLogin);
    assert_eq!(
        route_decision(&state, Some(&[Role::Student])),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn authenticating_counts_as_not_authenticated() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    assert_eq!(route_decision(&state, None), RouteDecision::RedirectToLogin);
}

#[test]
fn wrong_role_redirects_home() {
    let state = authenticated(Role::Student);
    assert_eq!(
        route_decision(&state, Some(&[Role::Recruiter])),
        RouteDecision::RedirectToHome
    );
}

#[test]
fn member_role_is_allowed() {
    let state = authenticated(Role::Student);
    assert_eq!(
        route_decision(&state, Some(&[Role::Student, Role::Recruiter])),
        RouteDecision::Allow
    );
}

#[test]
fn no_role_list_admits_any_authenticated_identity() {
    assert_eq!(route_decision(&authenticated(Role::Student), None), RouteDecision::Allow);
    assert_eq!(route_decision(&authenticated(Role::Recruiter), None), RouteDecision::Allow);
}

#[test]
fn decision_is_idempotent() {
    let state = authenticated(Role::Recruiter);
    let first = route_decision(&state, Some(&[Role::Recruiter]));
    let second = route_decision(&state, Some(&[Role::Recruiter]));
    assert_eq!(first, second);
    assert_eq!(first, RouteDecision::Allow);
}
