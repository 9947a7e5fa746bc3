use super::*;

// =============================================================
// Outcome decision
// =============================================================

#[test]
fn roll_above_failure_rate_succeeds() {
    assert!(roll_succeeds(0.21));
    assert!(roll_succeeds(0.99));
}

#[test]
fn roll_at_or_below_failure_rate_fails() {
    assert!(!roll_succeeds(0.0));
    assert!(!roll_succeeds(0.2));
}

// =============================================================
// Discovery list
// =============================================================

#[test]
fn successful_scan_reports_three_fixed_devices() {
    let hits = discovered_devices();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].name, "YOU2ME #A7F3");
    assert_eq!(hits[0].distance, "Very close");
    assert_eq!(hits[2].name, "YOU2ME #C8D1");
}

#[test]
fn device_ids_are_unique() {
    let hits = discovered_devices();
    let mut ids: Vec<_> = hits.iter().map(|h| h.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), hits.len());
}

#[test]
fn scanning_copy_has_rotating_entries() {
    assert!(SCAN_MESSAGES.len() > 1);
    assert_eq!(SCAN_MESSAGES[0], "Searching for your YOU2ME…");
}
