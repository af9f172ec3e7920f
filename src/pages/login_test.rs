use super::*;

#[test]
fn validate_login_input_trims_the_username() {
    assert_eq!(
        validate_login_input("  asha  ", "hunter2"),
        Ok(("asha".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "hunter2"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("asha", ""),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("asha", "  spaces kept  "),
        Ok(("asha".to_owned(), "  spaces kept  ".to_owned()))
    );
}
