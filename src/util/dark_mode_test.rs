#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preference_defaults_to_light_without_a_browser() {
    assert!(!read_preference());
}

#[test]
fn apply_and_save_are_noops_but_callable() {
    apply(true);
    save_preference(true);
    assert!(!read_preference());
}
