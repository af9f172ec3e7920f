use super::*;

// =============================================================
// ToggleState protocol
// =============================================================

#[test]
fn toggle_flips_before_the_request_resolves() {
    let mut state = ToggleState::new(false);
    let target = state.begin();
    assert_eq!(target, Some(true));
    assert!(state.value(), "UI must show the target value while in flight");
    assert!(state.in_flight());
}

#[test]
fn toggle_success_keeps_the_target_value() {
    let mut state = ToggleState::new(false);
    state.begin();
    state.settle_ok();
    assert!(state.value());
    assert!(!state.in_flight());
}

#[test]
fn toggle_failure_reverts_to_the_captured_value() {
    let mut state = ToggleState::new(false);
    state.begin();
    state.settle_err();
    assert!(!state.value());
    assert!(!state.in_flight());
}

#[test]
fn toggle_failure_reverts_from_true_as_well() {
    let mut state = ToggleState::new(true);
    assert_eq!(state.begin(), Some(false));
    state.settle_err();
    assert!(state.value());
}

#[test]
fn second_begin_while_in_flight_is_ignored() {
    let mut state = ToggleState::new(false);
    assert_eq!(state.begin(), Some(true));
    assert_eq!(state.begin(), None, "re-entrancy guard");
    assert!(state.value(), "ignored activation must not disturb the prediction");
}

#[test]
fn toggle_is_reusable_after_settling() {
    let mut state = ToggleState::new(false);
    state.begin();
    state.settle_ok();
    assert_eq!(state.begin(), Some(false));
    state.settle_ok();
    assert!(!state.value());
}

#[test]
fn sync_applies_server_truth_when_idle() {
    let mut state = ToggleState::new(false);
    state.sync(true);
    assert!(state.value());
}

#[test]
fn sync_is_ignored_while_a_request_is_outstanding() {
    let mut state = ToggleState::new(false);
    state.begin();
    state.sync(false);
    assert!(state.value(), "a late check result must not clobber the prediction");
}

// =============================================================
// SubmitState protocol
// =============================================================

#[test]
fn submit_default_is_idle() {
    let state = SubmitState::default();
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert!(!state.is_done());
    assert!(!state.in_flight());
}

#[test]
fn submit_begin_is_optimistic_and_single_shot() {
    let mut state = SubmitState::default();
    assert!(state.begin());
    assert!(state.in_flight());
    assert!(!state.begin(), "second activation while in flight is ignored");
}

#[test]
fn submit_success_is_terminal() {
    let mut state = SubmitState::default();
    state.begin();
    state.settle_ok();
    assert!(state.is_done());
    assert!(!state.begin(), "a done action cannot restart");
}

#[test]
fn submit_failure_returns_to_retryable_with_message() {
    let mut state = SubmitState::default();
    state.begin();
    state.settle_err("Already applied.".to_owned());
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.error.as_deref(), Some("Already applied."));
    assert!(state.begin(), "failed action must be retryable");
    assert!(state.error.is_none(), "retry clears the surfaced message");
}

#[test]
fn sync_done_adopts_server_truth_only_when_idle() {
    let mut state = SubmitState::default();
    state.sync_done();
    assert!(state.is_done());

    let mut in_flight = SubmitState::default();
    in_flight.begin();
    in_flight.sync_done();
    assert!(in_flight.in_flight(), "a late check must not clobber an in-flight submit");
}
