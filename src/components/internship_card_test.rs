use super::*;

#[test]
fn short_description_passes_short_text_through() {
    assert_eq!(short_description("remote-friendly"), "remote-friendly");
}

#[test]
fn short_description_truncates_long_text_with_ellipsis() {
    let long = "x".repeat(200);
    let short = short_description(&long);
    assert_eq!(short.chars().count(), DESCRIPTION_LIMIT);
    assert!(short.ends_with("..."));
}

#[test]
fn short_description_counts_characters_not_bytes() {
    let long = "ü".repeat(200);
    let short = short_description(&long);
    assert_eq!(short.chars().count(), DESCRIPTION_LIMIT);
}

#[test]
fn stipend_label_formats_amount_or_placeholder() {
    assert_eq!(stipend_label(Some(15000)), "₹15000");
    assert_eq!(stipend_label(None), "Not disclosed");
}
