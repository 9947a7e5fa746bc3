//! Mock nearby-people matching.

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;

use crate::state::person::Person;

fn mock(id: &str, name: &str, interests: [&str; 3], icon: &str, distance: &str) -> Person {
    Person {
        id: id.to_owned(),
        name: name.to_owned(),
        interests: interests.iter().map(|i| (*i).to_owned()).collect(),
        icon: icon.to_owned(),
        distance: distance.to_owned(),
    }
}

/// The fixed set of nearby people the landing screen surfaces.
#[must_use]
pub fn nearby_people() -> Vec<Person> {
    vec![
        mock("1", "Alex Chen", ["Photography", "Coffee", "Travel"], "🎨", "1.2 km"),
        mock("2", "Jordan Smith", ["Hiking", "Music", "Nature"], "🌟", "0.8 km"),
        mock("3", "Taylor Kim", ["Reading", "Coffee", "Art"], "📚", "1.5 km"),
        mock("4", "Morgan Lee", ["Gaming", "Tech", "Music"], "🎮", "2.0 km"),
        mock("5", "Casey Brown", ["Cooking", "Food", "Travel"], "🍳", "0.5 km"),
    ]
}

/// Interests a person shares with the user, in the person's order.
#[must_use]
pub fn shared_interests(person_interests: &[String], user_interests: &[String]) -> Vec<String> {
    person_interests
        .iter()
        .filter(|interest| user_interests.contains(*interest))
        .cloned()
        .collect()
}
