use super::*;

// =============================================================
// Role and identity serde
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    assert_eq!(serde_json::to_string(&Role::Recruiter).unwrap(), "\"recruiter\"");
}

#[test]
fn identity_deserializes_backend_shape() {
    let raw = r#"{
        "id": 7,
        "username": "asha",
        "email": "asha@example.com",
        "profile": {
            "first_name": "Asha",
            "last_name": null,
            "profile_picture_url": null,
            "bio": "",
            "location": "Pune",
            "role": "student"
        }
    }"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.id, 7);
    assert_eq!(identity.profile.role, Role::Student);
    assert!(identity.profile.last_name.is_none());
    assert_eq!(identity.profile.location, "Pune");
}

#[test]
fn identity_profile_tolerates_missing_optional_text_fields() {
    let raw = r#"{
        "id": 1,
        "username": "r",
        "email": "r@example.com",
        "profile": { "first_name": null, "last_name": null, "profile_picture_url": null, "role": "recruiter" }
    }"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.profile.bio, "");
    assert_eq!(identity.profile.location, "");
}

#[test]
fn display_name_prefers_nonempty_first_name() {
    let raw = r#"{
        "id": 1,
        "username": "asha42",
        "email": "a@example.com",
        "profile": { "first_name": "Asha", "last_name": null, "profile_picture_url": null, "role": "student" }
    }"#;
    let mut identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity.display_name(), "Asha");

    identity.profile.first_name = Some(String::new());
    assert_eq!(identity.display_name(), "asha42");

    identity.profile.first_name = None;
    assert_eq!(identity.display_name(), "asha42");
}

// =============================================================
// Registration payload
// =============================================================

#[test]
fn register_payload_nests_role_under_profile() {
    let payload = RegisterPayload {
        username: "asha".to_owned(),
        email: "asha@example.com".to_owned(),
        password: "hunter2hunter2".to_owned(),
        profile: RegisterProfile { role: Role::Student },
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["profile"]["role"], "student");
    assert!(value.get("role").is_none());
}

// =============================================================
// Partial updates
// =============================================================

#[test]
fn account_update_skips_absent_fields() {
    let update = AccountUpdate {
        username: Some("new-name".to_owned()),
        email: None,
    };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["username"], "new-name");
    assert!(value.get("email").is_none());
}

#[test]
fn profile_update_cannot_carry_a_role() {
    let update = ProfileUpdate {
        bio: Some("hello".to_owned()),
        ..ProfileUpdate::default()
    };
    let value = serde_json::to_value(&update).unwrap();
    assert!(value.get("role").is_none());
}

// =============================================================
// Pagination envelope
// =============================================================

#[test]
fn paginated_tolerates_missing_total_pages() {
    let raw = r#"{ "count": 2, "next": null, "previous": null, "results": [] }"#;
    let page: Paginated<Internship> = serde_json::from_str(raw).unwrap();
    assert_eq!(page.count, Some(2));
    assert!(page.total_pages.is_none());
    assert!(page.results.is_empty());
}

#[test]
fn paginated_parses_results() {
    let raw = r#"{
        "total_pages": 3,
        "results": [{
            "id": 42,
            "title": "Backend Intern",
            "company": "Acme",
            "stipend": 15000,
            "apply_link": null,
            "expiry_date": null,
            "recruiter": 9
        }]
    }"#;
    let page: Paginated<Internship> = serde_json::from_str(raw).unwrap();
    assert_eq!(page.total_pages, Some(3));
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].id, 42);
    assert_eq!(page.results[0].status, InternshipStatus::Open);
    assert!(!page.results[0].bookmarked, "flag defaults off when the backend omits it");
}

#[test]
fn internship_carries_the_per_request_bookmarked_flag() {
    let raw = r#"{
        "id": 42,
        "title": "Backend Intern",
        "company": "Acme",
        "stipend": null,
        "apply_link": null,
        "expiry_date": null,
        "recruiter": 9,
        "bookmarked": true
    }"#;
    let internship: Internship = serde_json::from_str(raw).unwrap();
    assert!(internship.bookmarked);
}

#[test]
fn application_decodes_with_nested_internship_and_resume() {
    let raw = r#"{
        "id": 3,
        "internship": {
            "id": 42,
            "title": "Backend Intern",
            "company": "Acme",
            "stipend": null,
            "apply_link": null,
            "expiry_date": null,
            "recruiter": 9
        },
        "resume": "https://cdn.example/resumes/3.pdf",
        "status": "accepted",
        "applied_on": "2025-06-01"
    }"#;
    let application: Application = serde_json::from_str(raw).unwrap();
    assert_eq!(application.internship.id, 42);
    assert_eq!(application.status, ApplicationStatus::Accepted);
    assert_eq!(application.resume.as_deref(), Some("https://cdn.example/resumes/3.pdf"));
}

// =============================================================
// Enum wire values
// =============================================================

#[test]
fn application_status_round_trips() {
    for status in [ApplicationStatus::Pending, ApplicationStatus::Accepted, ApplicationStatus::Rejected] {
        let encoded = serde_json::to_string(&status).unwrap();
        assert_eq!(encoded, format!("\"{}\"", status.as_str()));
        let decoded: ApplicationStatus = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, status);
    }
}

#[test]
fn internship_status_defaults_to_open() {
    assert_eq!(InternshipStatus::default(), InternshipStatus::Open);
}
