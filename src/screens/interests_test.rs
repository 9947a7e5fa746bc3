use super::*;

fn selection(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| (*i).to_owned()).collect()
}

// =============================================================
// Toggle behavior
// =============================================================

#[test]
fn selecting_appends_in_order() {
    let mut chosen = Vec::new();
    toggle_interest(&mut chosen, "Coffee", 5);
    toggle_interest(&mut chosen, "Art", 5);
    assert_eq!(chosen, ["Coffee", "Art"]);
}

#[test]
fn toggling_selected_interest_removes_it() {
    let mut chosen = selection(&["Coffee", "Art"]);
    toggle_interest(&mut chosen, "Coffee", 5);
    assert_eq!(chosen, ["Art"]);
}

#[test]
fn duplicates_are_impossible() {
    let mut chosen = selection(&["Coffee"]);
    toggle_interest(&mut chosen, "Coffee", 5);
    toggle_interest(&mut chosen, "Coffee", 5);
    assert_eq!(chosen, ["Coffee"]);
}

#[test]
fn selection_is_capped_at_max() {
    let mut chosen = selection(&["Coffee", "Art", "Music"]);
    toggle_interest(&mut chosen, "Hiking", 3);
    assert_eq!(chosen, ["Coffee", "Art", "Music"]);
}

#[test]
fn deselection_still_works_at_the_cap() {
    let mut chosen = selection(&["Coffee", "Art", "Music"]);
    toggle_interest(&mut chosen, "Art", 3);
    assert_eq!(chosen, ["Coffee", "Music"]);
}

// =============================================================
// Continue guard
// =============================================================

#[test]
fn fewer_than_max_cannot_continue() {
    assert!(!can_continue(&selection(&["Coffee"]), 5));
    assert!(!can_continue(&[], 5));
}

#[test]
fn exactly_max_can_continue() {
    assert!(can_continue(
        &selection(&["Coffee", "Art", "Music", "Tech", "Food"]),
        5
    ));
    assert!(can_continue(&selection(&["Coffee", "Art", "Music"]), 3));
}

// =============================================================
// Catalogue
// =============================================================

#[test]
fn catalogue_has_twenty_unique_entries() {
    let mut options = INTEREST_OPTIONS.to_vec();
    options.sort_unstable();
    options.dedup();
    assert_eq!(options.len(), 20);
}
