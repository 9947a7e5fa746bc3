use super::*;

#[test]
fn named_device_is_shown_verbatim() {
    assert_eq!(confirmation_name("My YOU2ME"), "My YOU2ME");
}

#[test]
fn empty_name_falls_back_to_placeholder() {
    assert_eq!(confirmation_name(""), "YOUR YOU2ME");
}
