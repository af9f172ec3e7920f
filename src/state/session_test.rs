use super::*;
use crate::net::types::{Profile, Role};

fn identity(role: Role) -> Identity {
    Identity {
        id: 7,
        username: "asha".to_owned(),
        email: "asha@example.com".to_owned(),
        profile: Profile {
            first_name: None,
            last_name: None,
            profile_picture_url: None,
            bio: String::new(),
            location: String::new(),
            role,
        },
    }
}

// =============================================================
// Defaults and accessors
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(!state.is_authenticated());
    assert!(state.identity().is_none());
    assert!(state.role().is_none());
    assert!(state.last_error.is_none());
}

#[test]
fn restored_without_browser_storage_is_unauthenticated() {
    let state = SessionState::restored();
    assert!(!state.is_authenticated());
}

#[test]
fn role_reads_through_to_the_identity() {
    let mut state = SessionState::default();
    state.restore(identity(Role::Recruiter));
    assert_eq!(state.role(), Some(Role::Recruiter));
}

// =============================================================
// Login transitions
// =============================================================

#[test]
fn begin_login_moves_to_authenticating() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    assert!(state.is_authenticating());
    assert!(state.last_error.is_none());
}

#[test]
fn second_begin_login_is_rejected_while_in_flight() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    assert!(!state.begin_login());
    assert!(state.is_authenticating());
}

#[test]
fn begin_login_is_rejected_while_refresh_holds_the_slot() {
    let mut state = SessionState::default();
    state.restore(identity(Role::Student));
    assert!(state.begin_refresh());
    assert!(!state.begin_login());
}

#[test]
fn complete_login_authenticates_with_the_fetched_identity() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    state.complete_login(identity(Role::Student));
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Student));
}

#[test]
fn fail_login_returns_to_unauthenticated_with_message() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    state.fail_login("No active account found with the given credentials".to_owned());
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert_eq!(
        state.last_error.as_deref(),
        Some("No active account found with the given credentials")
    );
}

#[test]
fn login_can_start_again_after_a_failure() {
    let mut state = SessionState::default();
    assert!(state.begin_login());
    state.fail_login("rejected".to_owned());
    assert!(state.begin_login());
    assert!(state.last_error.is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_from_authenticated_clears_everything() {
    let mut state = SessionState::default();
    state.restore(identity(Role::Student));
    state.logout();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(state.last_error.is_none());
}

#[test]
fn logout_is_valid_from_any_phase() {
    let mut state = SessionState::default();
    state.logout();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);

    assert!(state.begin_login());
    state.logout();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
}

#[test]
fn logout_releases_an_in_flight_refresh_slot() {
    let mut state = SessionState::default();
    state.restore(identity(Role::Student));
    assert!(state.begin_refresh());
    state.logout();
    state.restore(identity(Role::Student));
    assert!(state.begin_refresh());
}

// =============================================================
// Refresh transitions
// =============================================================

#[test]
fn begin_refresh_requires_an_authenticated_session() {
    let mut state = SessionState::default();
    assert!(!state.begin_refresh());
}

#[test]
fn second_begin_refresh_is_rejected_while_in_flight() {
    let mut state = SessionState::default();
    state.restore(identity(Role::Student));
    assert!(state.begin_refresh());
    assert!(!state.begin_refresh());
}

#[test]
fn complete_refresh_replaces_the_identity_wholesale() {
    let mut state = SessionState::default();
    state.restore(identity(Role::Student));
    assert!(state.begin_refresh());

    let mut updated = identity(Role::Student);
    updated.profile.bio = "new bio".to_owned();
    state.complete_refresh(updated.clone());

    assert_eq!(state.identity(), Some(&updated));
    assert!(state.begin_refresh(), "slot must be free again");
}

#[test]
fn fail_refresh_demotes_the_session() {
    let mut state = SessionState::default();
    state.restore(identity(Role::Student));
    assert!(state.begin_refresh());
    state.fail_refresh();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
}

// =============================================================
// Demotion
// =============================================================

#[test]
fn demote_drops_identity_and_refresh_slot() {
    let mut state = SessionState::default();
    state.restore(identity(Role::Recruiter));
    assert!(state.begin_refresh());
    state.demote();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(!state.is_authenticated());
}
