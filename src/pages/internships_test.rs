use super::*;
use crate::net::types::InternshipStatus;

fn internship(id: i64, location: &str, internship_type: &str, posted_on: &str) -> Internship {
    Internship {
        id,
        title: format!("role-{id}"),
        description: String::new(),
        company: "Acme".to_owned(),
        location: location.to_owned(),
        stipend: None,
        internship_type: internship_type.to_owned(),
        apply_link: None,
        posted_on: posted_on.to_owned(),
        status: InternshipStatus::Open,
        expiry_date: None,
        recruiter: 1,
        bookmarked: false,
    }
}

#[test]
fn empty_filters_keep_every_row() {
    let rows = vec![
        internship(1, "Pune", "remote", "2025-05-01"),
        internship(2, "Berlin", "onsite", "2025-06-01"),
    ];
    assert_eq!(filter_and_sort(&rows, "", "", true).len(), 2);
}

#[test]
fn location_filter_is_case_insensitive_substring() {
    let rows = vec![
        internship(1, "Pune", "remote", "2025-05-01"),
        internship(2, "Berlin", "onsite", "2025-06-01"),
    ];
    let filtered = filter_and_sort(&rows, "pun", "", true);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 1);
}

#[test]
fn type_filter_composes_with_location() {
    let rows = vec![
        internship(1, "Pune", "remote", "2025-05-01"),
        internship(2, "Pune", "onsite", "2025-06-01"),
    ];
    let filtered = filter_and_sort(&rows, "pune", "onsite", true);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);
}

#[test]
fn newest_first_sorts_descending_by_posted_date() {
    let rows = vec![
        internship(1, "", "", "2025-05-01"),
        internship(2, "", "", "2025-06-01"),
    ];
    let sorted = filter_and_sort(&rows, "", "", true);
    assert_eq!(sorted[0].id, 2);

    let sorted = filter_and_sort(&rows, "", "", false);
    assert_eq!(sorted[0].id, 1);
}
