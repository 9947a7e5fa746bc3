use super::*;

// =============================================================
// Mock directory
// =============================================================

#[test]
fn five_people_are_always_nearby() {
    let people = nearby_people();
    assert_eq!(people.len(), 5);
    assert_eq!(people[0].name, "Alex Chen");
    assert_eq!(people[4].distance, "0.5 km");
}

#[test]
fn every_person_carries_three_interests() {
    for person in nearby_people() {
        assert_eq!(person.interests.len(), 3, "{}", person.name);
        assert!(!person.icon.is_empty());
    }
}

// =============================================================
// Shared-interest intersection
// =============================================================

#[test]
fn shared_interests_keep_person_order() {
    let person = ["Reading".to_owned(), "Coffee".to_owned(), "Art".to_owned()];
    let user = ["Art".to_owned(), "Coffee".to_owned()];
    assert_eq!(shared_interests(&person, &user), ["Coffee", "Art"]);
}

#[test]
fn no_overlap_yields_empty() {
    let person = ["Gaming".to_owned()];
    let user = ["Yoga".to_owned()];
    assert!(shared_interests(&person, &user).is_empty());
}

#[test]
fn empty_user_interests_share_nothing() {
    let person = ["Coffee".to_owned()];
    assert!(shared_interests(&person, &[]).is_empty());
}
