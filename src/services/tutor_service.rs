use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::personas::{FALLBACK_PERSONA, PERSONAS},
    models::{domain::TutorPersona, dto::response::TutorReplyDto},
};

// Possessives split at the apostrophe, so "boyle's" still matches "boyle".
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("word pattern is a valid regex"));

/// Keyed lookup into the fixed persona table plus ordered keyword matching.
/// No conversation state, no learning.
pub struct TutorService;

impl TutorService {
    pub fn reply(track_id: &str, message: &str) -> TutorReplyDto {
        let persona = Self::persona_for(track_id);
        TutorReplyDto {
            track_id: track_id.to_string(),
            persona: persona.name.clone(),
            reply: Self::respond(message, persona),
        }
    }

    pub fn persona_for(track_id: &str) -> &'static TutorPersona {
        PERSONAS
            .iter()
            .find(|p| p.track_id == track_id)
            .unwrap_or(&FALLBACK_PERSONA)
    }

    /// First rule whose keyword appears as a whole word in the message wins;
    /// otherwise the persona's fallback line.
    pub fn respond(message: &str, persona: &TutorPersona) -> String {
        let lowered = message.to_lowercase();
        let words: Vec<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

        for rule in &persona.rules {
            if rule
                .keywords
                .iter()
                .any(|keyword| words.contains(&keyword.as_str()))
            {
                return rule.reply.clone();
            }
        }

        persona.fallback.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::TutorPersona;

    fn test_persona() -> TutorPersona {
        TutorPersona::new("test-track", "Instructor", "Hello", "Ask me something else.")
            .with_rule(&["pressure"], "Pressure rises one bar per 10 msw.")
            .with_rule(&["pressure", "volume"], "Later rule, should never win on 'pressure'.")
            .with_rule(&["volume"], "Volume shrinks as pressure rises.")
    }

    #[test]
    fn first_matching_rule_wins() {
        let persona = test_persona();

        let reply = TutorService::respond("tell me about PRESSURE at depth", &persona);

        assert_eq!(reply, "Pressure rises one bar per 10 msw.");
    }

    #[test]
    fn matching_is_whole_word_and_case_insensitive() {
        let persona = test_persona();

        // "pressurized" must not match the "pressure" keyword.
        let reply = TutorService::respond("my pressurized cylinder", &persona);

        assert_eq!(reply, "Ask me something else.");
    }

    #[test]
    fn unmatched_message_gets_the_fallback() {
        let persona = test_persona();

        let reply = TutorService::respond("what's for lunch", &persona);

        assert_eq!(reply, "Ask me something else.");
    }

    #[test]
    fn unknown_track_gets_the_generic_persona() {
        let dto = TutorService::reply("no-such-track", "hello there");

        assert_eq!(dto.persona, "Training Desk");
        assert_eq!(dto.track_id, "no-such-track");
    }

    #[test]
    fn known_track_keyword_reply() {
        let dto = TutorService::reply("dive-physics", "explain boyle's law please");

        assert_eq!(dto.persona, "Doc Marina");
        assert!(dto.reply.contains("Boyle's law"));
    }

    #[test]
    fn same_input_always_yields_the_same_reply() {
        let a = TutorService::reply("underwater-welding", "which polarity do I use?");
        let b = TutorService::reply("underwater-welding", "which polarity do I use?");

        assert_eq!(a.reply, b.reply);
    }
}
