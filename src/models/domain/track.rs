use serde::{Deserialize, Serialize};

/// A named course module. Each track owns a fixed question set in the bank
/// and an entry in the time-limit table, both keyed by the track id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub lessons: Vec<String>,
}

impl Track {
    pub fn new(id: &str, name: &str, summary: &str, lessons: &[&str]) -> Self {
        Track {
            id: id.to_string(),
            name: name.to_string(),
            summary: summary.to_string(),
            lessons: lessons.iter().map(|l| l.to_string()).collect(),
        }
    }
}
