//! Dark mode preference over `localStorage` and the `<html>` class list.
//!
//! The stored preference wins; with nothing stored the system
//! `prefers-color-scheme` decides. Appearance is applied by toggling the
//! `.dark-mode` class on the document element.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const DARK_KEY: &str = "internlink_dark";

/// Read the effective dark-mode preference. Off-browser this is always
/// `false`.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(DARK_KEY) {
                return value == "true";
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the `.dark-mode` class on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(element) = element {
            let classes = element.class_list();
            let _ = if enabled {
                classes.add_1("dark-mode")
            } else {
                classes.remove_1("dark-mode")
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Persist the preference so the next page load restores it.
pub fn save_preference(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(DARK_KEY, if enabled { "true" } else { "false" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
