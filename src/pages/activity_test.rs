use super::*;

#[test]
fn known_actions_get_readable_labels() {
    assert_eq!(action_label("bookmark_added"), "Bookmarked an internship");
    assert_eq!(action_label("login"), "Logged in");
    assert_eq!(action_label("password_changed"), "Changed password");
}

#[test]
fn unknown_actions_fall_back_to_the_raw_name() {
    assert_eq!(action_label("badge_earned"), "badge_earned");
}
