//! Durable credential storage over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is pure storage for the bearer token and the cached identity record.
//! It performs no validation; the session context decides what to trust.
//! Outside the browser (SSR, native tests) every load behaves as "nothing
//! stored", which reads as logged out.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::Identity;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "internlink_access_token";
#[cfg(feature = "hydrate")]
const IDENTITY_KEY: &str = "internlink_identity";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persist the bearer token.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Load the bearer token, if one was saved.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the bearer token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Persist the identity record as JSON.
pub fn save_identity(identity: &Identity) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(identity) else {
            return;
        };
        let _ = storage.set_item(IDENTITY_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = identity;
    }
}

/// Load the cached identity record, if one was saved and still parses.
pub fn load_identity() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let raw = storage.get_item(IDENTITY_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the cached identity record.
pub fn clear_identity() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(IDENTITY_KEY);
        }
    }
}

/// Remove both persisted values. Used by logout and by the shared
/// authorization-failure path.
pub fn clear_session() {
    clear_token();
    clear_identity();
}
