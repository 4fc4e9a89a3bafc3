use super::*;

#[test]
fn console_level_shows_transition_logs() {
    assert!(log::Level::Debug <= LOG_LEVEL);
}

#[test]
fn hide_classes_are_distinct() {
    assert_ne!(HIDDEN_CLASS, HIDDEN_MOBILE_CLASS);
    assert_ne!(HIDDEN_CLASS, HIDDEN_DESKTOP_CLASS);
    assert_ne!(HIDDEN_MOBILE_CLASS, HIDDEN_DESKTOP_CLASS);
}
