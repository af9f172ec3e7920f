//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and list rows while reading session
//! state from the Leptos context provider; pages own route-level
//! orchestration.

pub mod internship_card;
pub mod navbar;
pub mod protected;
