#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_token_is_none_without_a_browser() {
    assert!(load_token().is_none());
}

#[test]
fn load_identity_is_none_without_a_browser() {
    assert!(load_identity().is_none());
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save_token("tok");
    clear_token();
    clear_identity();
    clear_session();
    assert!(load_token().is_none());
}
