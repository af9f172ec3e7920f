//! Process-wide session state and its transition rules.
//!
//! DESIGN
//! ======
//! One `RwSignal<SessionState>` provided via context is the only source of
//! truth for "current identity or none". Every change to the token or the
//! cached identity goes through the functions in this module; screens read
//! the signal and never write the credential store directly.
//!
//! The transition methods on [`SessionState`] are pure and synchronous so
//! the state machine is testable without a browser. The async drivers below
//! them sequence credential-store writes around the transitions: the token
//! is persisted before the identity fetch, the identity after it, and
//! nothing survives a failed exchange.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Identity, Role};

/// The three phases of the session lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionPhase {
    /// No token established; the visitor is anonymous.
    #[default]
    Unauthenticated,
    /// A credential exchange plus identity fetch is in flight.
    Authenticating,
    /// A token is established and the identity record is known.
    Authenticated(Identity),
}

/// Session value held in the shared signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    /// Message from the most recent failed transition, for inline display.
    pub last_error: Option<String>,
    refresh_in_flight: bool,
}

impl SessionState {
    /// Build the startup state from the credential store: a cached identity
    /// with a token present restores `Authenticated` without revalidation
    /// (trust-on-load); a missing token reads as logged out and discards any
    /// stale identity record.
    pub fn restored() -> Self {
        let mut state = Self::default();
        if crate::util::credentials::load_token().is_some() {
            if let Some(identity) = crate::util::credentials::load_identity() {
                state.restore(identity);
            }
        } else {
            crate::util::credentials::clear_identity();
        }
        state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticating)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.phase {
            SessionPhase::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.profile.role)
    }

    /// Start a credential exchange. At most one may be in flight: returns
    /// `false` (and changes nothing) while one already is, or while a
    /// refresh holds the slot.
    pub fn begin_login(&mut self) -> bool {
        if self.is_authenticating() || self.refresh_in_flight {
            return false;
        }
        self.phase = SessionPhase::Authenticating;
        self.last_error = None;
        true
    }

    /// Finish a successful exchange with the freshly fetched identity.
    pub fn complete_login(&mut self, identity: Identity) {
        self.phase = SessionPhase::Authenticated(identity);
        self.last_error = None;
    }

    /// Roll a failed exchange back to `Unauthenticated`, keeping the
    /// user-visible message.
    pub fn fail_login(&mut self, message: String) {
        self.phase = SessionPhase::Unauthenticated;
        self.last_error = Some(message);
    }

    /// Drop the session. Infallible and purely local; valid from any phase.
    pub fn logout(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.last_error = None;
        self.refresh_in_flight = false;
    }

    /// Start re-fetching the identity record. Returns `false` while another
    /// refresh is in flight, or when there is no session to refresh.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refresh_in_flight || !self.is_authenticated() {
            return false;
        }
        self.refresh_in_flight = true;
        true
    }

    /// Replace the identity wholesale after a successful refresh.
    pub fn complete_refresh(&mut self, identity: Identity) {
        self.refresh_in_flight = false;
        self.phase = SessionPhase::Authenticated(identity);
    }

    /// A failed refresh means the token no longer stands; demote rather
    /// than keep a dangling identity.
    pub fn fail_refresh(&mut self) {
        self.refresh_in_flight = false;
        self.phase = SessionPhase::Unauthenticated;
    }

    /// Adopt a cached identity at startup without a network round-trip.
    pub fn restore(&mut self, identity: Identity) {
        self.phase = SessionPhase::Authenticated(identity);
    }

    /// Demote after an authenticated call was rejected server-side.
    pub fn demote(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.refresh_in_flight = false;
    }
}

/// Run the full login sequence: transition to `Authenticating`, exchange
/// credentials, persist the token, fetch and persist the identity, then
/// transition to `Authenticated`. On any failure the session returns to
/// `Unauthenticated` with nothing persisted and the backend's message (when
/// present) surfaced verbatim.
///
/// # Errors
///
/// The user-visible failure message.
#[cfg(feature = "hydrate")]
pub async fn login(session: RwSignal<SessionState>, username: &str, password: &str) -> Result<Identity, String> {
    let mut started = false;
    session.update(|s| started = s.begin_login());
    if !started {
        return Err("A sign-in is already in progress.".to_owned());
    }

    let token = match crate::net::api::login(username, password).await {
        Ok(token) => token,
        Err(err) => {
            let message = err.to_string();
            log::warn!("credential exchange failed: {message}");
            session.update(|s| s.fail_login(message.clone()));
            return Err(message);
        }
    };
    // The token must be in place before the identity fetch; that call
    // authenticates with it.
    crate::util::credentials::save_token(&token);

    match crate::net::api::fetch_me().await {
        Ok(identity) => {
            crate::util::credentials::save_identity(&identity);
            log::debug!("session established for {}", identity.username);
            session.update(|s| s.complete_login(identity.clone()));
            Ok(identity)
        }
        Err(err) => {
            crate::util::credentials::clear_session();
            let message = err.to_string();
            log::warn!("identity fetch after login failed: {message}");
            session.update(|s| s.fail_login(message.clone()));
            Err(message)
        }
    }
}

/// Drop the session and both persisted values synchronously. The backend is
/// notified fire-and-forget for its activity log; that call is allowed to
/// fail without consequence.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::logout);
    crate::util::credentials::clear_session();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        crate::net::api::logout_server().await;
    });
}

/// Re-fetch the identity record for the current token. A second call while
/// one is in flight is rejected rather than issuing a duplicate fetch. On
/// failure the session is demoted and the stale persisted identity cleared.
///
/// # Errors
///
/// The user-visible failure message.
#[cfg(feature = "hydrate")]
pub async fn refresh(session: RwSignal<SessionState>) -> Result<Identity, String> {
    let mut started = false;
    session.update(|s| started = s.begin_refresh());
    if !started {
        return Err("A profile refresh is already in flight.".to_owned());
    }

    match crate::net::api::fetch_me().await {
        Ok(identity) => {
            crate::util::credentials::save_identity(&identity);
            session.update(|s| s.complete_refresh(identity.clone()));
            Ok(identity)
        }
        Err(err) => {
            crate::util::credentials::clear_session();
            let message = err.to_string();
            log::warn!("identity refresh failed: {message}");
            session.update(|s| s.fail_refresh());
            Err(message)
        }
    }
}

/// Shared reaction to `ApiError::Unauthenticated` from any screen: demote
/// the session and clear both persisted values.
pub fn demote(session: RwSignal<SessionState>) {
    session.update(|s| s.demote());
    crate::util::credentials::clear_session();
}
