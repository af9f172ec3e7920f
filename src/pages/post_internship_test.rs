use super::*;

fn valid_args() -> [&'static str; 8] {
    [
        "Backend Intern",
        "Work on the API.",
        "Acme",
        "Pune",
        "15000",
        "remote",
        "",
        "",
    ]
}

#[test]
fn build_draft_assembles_all_fields() {
    let [title, description, company, location, stipend, kind, link, expiry] = valid_args();
    let draft = build_draft(title, description, company, location, stipend, kind, link, expiry)
        .expect("valid draft");
    assert_eq!(draft.title, "Backend Intern");
    assert_eq!(draft.stipend, Some(15000));
    assert!(draft.apply_link.is_none());
    assert!(draft.expiry_date.is_none());
}

#[test]
fn build_draft_requires_title_company_description() {
    assert!(build_draft("", "d", "c", "", "", "", "", "").is_err());
    assert!(build_draft("t", "", "c", "", "", "", "", "").is_err());
    assert!(build_draft("t", "d", "  ", "", "", "", "", "").is_err());
}

#[test]
fn build_draft_treats_blank_stipend_as_undisclosed() {
    let draft = build_draft("t", "d", "c", "", "   ", "", "", "").expect("valid draft");
    assert!(draft.stipend.is_none());
}

#[test]
fn build_draft_rejects_non_numeric_stipend() {
    assert_eq!(
        build_draft("t", "d", "c", "", "lots", "", "", ""),
        Err("Stipend must be a whole number.")
    );
}

#[test]
fn build_draft_keeps_optional_links_when_present() {
    let draft = build_draft("t", "d", "c", "", "", "", " https://acme.example/apply ", "2026-01-01")
        .expect("valid draft");
    assert_eq!(draft.apply_link.as_deref(), Some("https://acme.example/apply"));
    assert_eq!(draft.expiry_date.as_deref(), Some("2026-01-01"));
}
