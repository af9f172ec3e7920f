use super::*;

#[test]
fn validate_change_input_accepts_matching_confirmation() {
    assert_eq!(
        validate_change_input("old", "new-secret", "new-secret"),
        Ok(("old".to_owned(), "new-secret".to_owned()))
    );
}

#[test]
fn validate_change_input_requires_both_passwords() {
    assert_eq!(
        validate_change_input("", "new", "new"),
        Err("Enter your current and new password.")
    );
    assert_eq!(
        validate_change_input("old", "", ""),
        Err("Enter your current and new password.")
    );
}

#[test]
fn validate_change_input_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_change_input("old", "new-secret", "different"),
        Err("New passwords do not match.")
    );
}
