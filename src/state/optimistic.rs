//! Optimistic-then-reconcile primitives for server-backed UI state.
//!
//! DESIGN
//! ======
//! Bookmark stars and the apply button share one protocol: predict the
//! target value before the request is issued, keep it on success, roll back
//! on failure, and ignore re-activation while a request is outstanding.
//! The protocol lives here once; screens parameterize it with their two
//! network calls instead of re-implementing it.
//!
//! The server stays the source of truth: the optimistic value is a
//! prediction, and `sync` re-derives it from a fresh query whenever no
//! request is in flight.

#[cfg(test)]
#[path = "optimistic_test.rs"]
mod optimistic_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;

/// A boolean relation (bookmarked, followed, ...) mutated by paired
/// add/remove calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    value: bool,
    /// Captured pre-toggle value while a request is outstanding.
    revert_to: Option<bool>,
}

impl ToggleState {
    pub fn new(initial: bool) -> Self {
        Self { value: initial, revert_to: None }
    }

    /// Current UI belief about the relation.
    pub fn value(self) -> bool {
        self.value
    }

    /// True while a mutation request is outstanding.
    pub fn in_flight(self) -> bool {
        self.revert_to.is_some()
    }

    /// Adopt a server-derived value. Ignored while a request is in flight;
    /// the settle path owns the value until then.
    pub fn sync(&mut self, server_value: bool) {
        if self.revert_to.is_none() {
            self.value = server_value;
        }
    }

    /// Start a toggle: capture the current value, flip the UI immediately,
    /// and return the target the network call must establish. Returns
    /// `None` while a request is already outstanding, the re-entrancy
    /// guard that keeps concurrent requests from racing to opposite ends.
    pub fn begin(&mut self) -> Option<bool> {
        if self.revert_to.is_some() {
            return None;
        }
        self.revert_to = Some(self.value);
        self.value = !self.value;
        Some(self.value)
    }

    /// The request landed; the optimistic value is now the real one.
    pub fn settle_ok(&mut self) {
        self.revert_to = None;
    }

    /// The request failed; restore the captured pre-toggle value.
    pub fn settle_err(&mut self) {
        if let Some(previous) = self.revert_to.take() {
            self.value = previous;
        }
    }
}

/// Phase of a one-shot action with a visible terminal state (e.g. an
/// application submit that ends in "already applied").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    InFlight,
    Done,
}

/// One-shot submit tracker. Failure returns to `Idle` so the action stays
/// retryable; success is terminal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub phase: SubmitPhase,
    pub error: Option<String>,
}

impl SubmitState {
    /// Start the action optimistically. Only valid from `Idle`; returns
    /// `false` (and changes nothing) while in flight or already done.
    pub fn begin(&mut self) -> bool {
        if self.phase != SubmitPhase::Idle {
            return false;
        }
        self.phase = SubmitPhase::InFlight;
        self.error = None;
        true
    }

    pub fn settle_ok(&mut self) {
        self.phase = SubmitPhase::Done;
        self.error = None;
    }

    pub fn settle_err(&mut self, message: String) {
        self.phase = SubmitPhase::Idle;
        self.error = Some(message);
    }

    /// Adopt the server's word that the action already happened.
    pub fn sync_done(&mut self) {
        if self.phase == SubmitPhase::Idle {
            self.phase = SubmitPhase::Done;
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == SubmitPhase::Done
    }

    pub fn in_flight(&self) -> bool {
        self.phase == SubmitPhase::InFlight
    }
}

/// Drive one toggle round-trip against a signal-held [`ToggleState`]. The
/// UI flips before either call is issued; a call while one is outstanding
/// is ignored.
///
/// # Errors
///
/// The network call's error, after the UI has been rolled back.
#[cfg(feature = "hydrate")]
pub async fn run_toggle<A, R, FA, FR>(state: RwSignal<ToggleState>, add: A, remove: R) -> Result<(), ApiError>
where
    A: FnOnce() -> FA,
    FA: Future<Output = Result<(), ApiError>>,
    R: FnOnce() -> FR,
    FR: Future<Output = Result<(), ApiError>>,
{
    let mut target = None;
    state.update(|s| target = s.begin());
    let Some(target) = target else {
        // A request is already in flight; this activation is dropped.
        return Ok(());
    };

    let result = if target { add().await } else { remove().await };
    match result {
        Ok(()) => {
            state.update(ToggleState::settle_ok);
            Ok(())
        }
        Err(err) => {
            state.update(ToggleState::settle_err);
            Err(err)
        }
    }
}

/// Drive one one-shot submit against a signal-held [`SubmitState`].
///
/// # Errors
///
/// The network call's error, after the state has returned to retryable.
#[cfg(feature = "hydrate")]
pub async fn run_submit<Op, Fut>(state: RwSignal<SubmitState>, op: Op) -> Result<(), ApiError>
where
    Op: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let mut started = false;
    state.update(|s| started = s.begin());
    if !started {
        return Ok(());
    }

    match op().await {
        Ok(()) => {
            state.update(SubmitState::settle_ok);
            Ok(())
        }
        Err(err) => {
            state.update(|s| s.settle_err(err.to_string()));
            Err(err)
        }
    }
}
