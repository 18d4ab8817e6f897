use serde::{Deserialize, Serialize};

/// A canned tutor script for one track. Replies come from ordered keyword
/// rules with a fallback; there is no model call and no conversation state.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TutorPersona {
    pub track_id: String,
    pub name: String,
    pub greeting: String,
    /// Checked in order; the first rule with a matching keyword wins.
    pub rules: Vec<TutorRule>,
    pub fallback: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TutorRule {
    pub keywords: Vec<String>,
    pub reply: String,
}

impl TutorPersona {
    pub fn new(track_id: &str, name: &str, greeting: &str, fallback: &str) -> Self {
        TutorPersona {
            track_id: track_id.to_string(),
            name: name.to_string(),
            greeting: greeting.to_string(),
            rules: vec![],
            fallback: fallback.to_string(),
        }
    }

    pub fn with_rule(mut self, keywords: &[&str], reply: &str) -> Self {
        self.rules.push(TutorRule {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            reply: reply.to_string(),
        });
        self
    }
}
