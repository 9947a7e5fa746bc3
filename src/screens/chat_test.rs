use super::*;

// =============================================================
// Clock labels
// =============================================================

#[test]
fn morning_hours_are_am() {
    assert_eq!(clock_label(9, 41), "9:41 AM");
}

#[test]
fn afternoon_hours_wrap_to_twelve_hour() {
    assert_eq!(clock_label(14, 5), "2:05 PM");
}

#[test]
fn midnight_reads_twelve_am() {
    assert_eq!(clock_label(0, 0), "12:00 AM");
}

#[test]
fn noon_reads_twelve_pm() {
    assert_eq!(clock_label(12, 30), "12:30 PM");
}

// =============================================================
// Seeded history
// =============================================================

#[test]
fn history_opens_with_two_messages() {
    let history = seeded_history();
    assert_eq!(history.len(), 2);
    assert!(!history[0].from_me);
    assert!(history[1].from_me);
}

// =============================================================
// Outgoing messages
// =============================================================

#[test]
fn blank_drafts_are_not_sent() {
    assert!(outgoing_message("").is_none());
    assert!(outgoing_message("   ").is_none());
}

#[test]
fn sent_text_is_trimmed() {
    let message = outgoing_message("  see you there  ").expect("message");
    assert_eq!(message.text, "see you there");
    assert!(message.from_me);
}

#[test]
fn sent_messages_get_unique_ids() {
    let a = outgoing_message("one").expect("message");
    let b = outgoing_message("two").expect("message");
    assert_ne!(a.id, b.id);
}

// =============================================================
// Avatar initial
// =============================================================

#[test]
fn initial_is_first_character() {
    assert_eq!(avatar_initial("Alex Chen"), "A");
}

#[test]
fn empty_name_has_no_initial() {
    assert_eq!(avatar_initial(""), "");
}
