//! Mock nearby-match record used by the landing and chat screens.

/// A nearby person surfaced by the (simulated) matching service.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub interests: Vec<String>,
    /// Emoji avatar stand-in.
    pub icon: String,
    /// Human-readable distance label, e.g. `"1.2 km"`.
    pub distance: String,
}
