use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn unauthorized_statuses_map_to_unauthenticated() {
    assert_eq!(parse_error_body(401, ""), ApiError::Unauthenticated);
    assert_eq!(parse_error_body(403, "{\"detail\":\"nope\"}"), ApiError::Unauthenticated);
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(parse_error_body(404, ""), ApiError::Http(404));
    assert_eq!(parse_error_body(500, "oops"), ApiError::Http(500));
}

#[test]
fn bad_request_without_json_body_keeps_status() {
    assert_eq!(parse_error_body(400, "not json"), ApiError::Http(400));
}

// =============================================================
// Validation bodies
// =============================================================

#[test]
fn field_error_map_becomes_validation() {
    let body = r#"{"email": ["Enter a valid email address."], "username": ["Taken."]}"#;
    let ApiError::Validation(errors) = parse_error_body(400, body) else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.field == "email"));
    assert!(errors.iter().any(|e| e.message == "Taken."));
}

#[test]
fn detail_string_becomes_single_validation_entry() {
    let body = r#"{"detail": "Already applied."}"#;
    let ApiError::Validation(errors) = parse_error_body(400, body) else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Already applied.");
}

#[test]
fn validation_display_joins_messages() {
    let err = ApiError::Validation(vec![
        FieldError { field: "email".to_owned(), message: "Enter a valid email address.".to_owned() },
        FieldError { field: "password".to_owned(), message: "Too short.".to_owned() },
    ]);
    assert_eq!(err.to_string(), "Enter a valid email address. Too short.");
}

// =============================================================
// Credential exchange
// =============================================================

#[test]
fn login_rejection_keeps_backend_detail_verbatim() {
    let body = r#"{"detail": "No active account found with the given credentials"}"#;
    let err = parse_login_error(401, body);
    assert_eq!(
        err,
        ApiError::InvalidCredentials(Some("No active account found with the given credentials".to_owned()))
    );
    assert_eq!(err.to_string(), "No active account found with the given credentials");
}

#[test]
fn login_rejection_without_detail_uses_generic_message() {
    let err = parse_login_error(400, "{}");
    assert_eq!(err, ApiError::InvalidCredentials(None));
    assert_eq!(err.to_string(), "Invalid username or password.");
}

#[test]
fn login_server_failure_is_not_invalid_credentials() {
    assert_eq!(parse_login_error(500, ""), ApiError::Http(500));
}

#[test]
fn is_unauthenticated_only_for_token_rejection() {
    assert!(ApiError::Unauthenticated.is_unauthenticated());
    assert!(!ApiError::Http(500).is_unauthenticated());
    assert!(!ApiError::InvalidCredentials(None).is_unauthenticated());
}
