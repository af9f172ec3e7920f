use super::*;

#[test]
fn parse_role_defaults_to_student() {
    assert_eq!(parse_role("student"), Role::Student);
    assert_eq!(parse_role("recruiter"), Role::Recruiter);
    assert_eq!(parse_role("anything-else"), Role::Student);
}

#[test]
fn validate_register_input_builds_the_nested_payload() {
    let payload = validate_register_input(" asha ", " a@example.com ", "hunter2hunter2", Role::Recruiter)
        .expect("valid input");
    assert_eq!(payload.username, "asha");
    assert_eq!(payload.email, "a@example.com");
    assert_eq!(payload.profile.role, Role::Recruiter);
}

#[test]
fn validate_register_input_requires_every_field() {
    assert!(validate_register_input("", "a@b.com", "pw", Role::Student).is_err());
    assert!(validate_register_input("asha", "  ", "pw", Role::Student).is_err());
    assert!(validate_register_input("asha", "a@b.com", "", Role::Student).is_err());
}
