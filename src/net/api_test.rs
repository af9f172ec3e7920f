use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn internship_endpoints_format_expected_paths() {
    assert_eq!(internships_page_endpoint(3), "/internships/?page=3");
    assert_eq!(internship_view_endpoint(42), "/internships/42/view/");
    assert_eq!(internship_edit_endpoint(42), "/internships/42/edit/");
    assert_eq!(applicants_endpoint(42), "/internships/42/applicants/");
}

#[test]
fn application_endpoints_format_expected_paths() {
    assert_eq!(apply_endpoint(42), "/applications/apply/42/");
    assert_eq!(application_check_endpoint(42), "/applications/check/42/");
    assert_eq!(application_status_endpoint(7), "/applications/7/status/");
}

#[test]
fn bookmark_endpoints_format_expected_paths() {
    assert_eq!(bookmark_add_endpoint(42), "/bookmarks/42/add/");
    assert_eq!(bookmark_remove_endpoint(42), "/bookmarks/42/remove/");
    assert_eq!(bookmark_check_endpoint(42), "/bookmarks/check/42/");
}

#[test]
fn reset_password_endpoint_embeds_uid_and_token() {
    assert_eq!(reset_password_endpoint("12", "abc-def"), "/reset-password/12/abc-def/");
}

// =============================================================
// List extraction
// =============================================================

#[test]
fn list_results_accepts_bare_arrays() {
    let value = serde_json::json!([
        { "id": 1, "action": "login", "related_object_id": null, "timestamp": "", "details": null }
    ]);
    let rows: Vec<crate::net::types::ActivityLog> = list_results(value);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].action, "login");
}

#[test]
fn list_results_accepts_pagination_envelopes() {
    let value = serde_json::json!({
        "count": 1,
        "results": [
            { "id": 1, "action": "bookmark_added", "related_object_id": 42, "timestamp": "", "details": null }
        ]
    });
    let rows: Vec<crate::net::types::ActivityLog> = list_results(value);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].related_object_id, Some(42));
}

#[test]
fn list_results_rejects_scalars() {
    let rows: Vec<crate::net::types::ActivityLog> = list_results(serde_json::json!(17));
    assert!(rows.is_empty());
}
