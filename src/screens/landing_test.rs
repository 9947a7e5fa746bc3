use super::*;

// =============================================================
// People-count label
// =============================================================

#[test]
fn one_person_label_is_singular() {
    assert_eq!(people_label(1), "1 person found");
}

#[test]
fn several_people_label_is_plural() {
    assert_eq!(people_label(5), "5 people found");
}

// =============================================================
// Saved hearts
// =============================================================

#[test]
fn saving_appends_person_id() {
    let mut saved = Vec::new();
    toggle_saved(&mut saved, "1");
    toggle_saved(&mut saved, "3");
    assert_eq!(saved, ["1", "3"]);
}

#[test]
fn toggling_saved_person_unsaves() {
    let mut saved = vec!["1".to_owned(), "3".to_owned()];
    toggle_saved(&mut saved, "1");
    assert_eq!(saved, ["3"]);
}

#[test]
fn save_has_no_cap() {
    let mut saved = Vec::new();
    for id in ["1", "2", "3", "4", "5"] {
        toggle_saved(&mut saved, id);
    }
    assert_eq!(saved.len(), 5);
}
