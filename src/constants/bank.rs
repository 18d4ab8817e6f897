//! Build-time-embedded question bank content. Grouped by exam/track id,
//! ordered by the question `order` field. Authoring owns the invariant that
//! `correct_answer` matches one option verbatim.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::domain::Question;

/// Applied when an exam id has no entry in [`TIME_LIMITS`].
pub const DEFAULT_TIME_LIMIT_SECONDS: u32 = 1800;

pub static TIME_LIMITS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("air-diving-fundamentals", 1500),
        ("dive-physics", 900),
        ("underwater-welding", 1500),
        // Short smoke-test exam used by the demo client and the test suite.
        ("demo-exam", 5),
    ])
});

pub static QUESTION_SETS: Lazy<HashMap<&'static str, Vec<Question>>> = Lazy::new(|| {
    HashMap::from([
        ("air-diving-fundamentals", air_diving_fundamentals()),
        ("dive-physics", dive_physics()),
        ("underwater-welding", underwater_welding()),
        ("demo-exam", demo_exam()),
    ])
});

fn air_diving_fundamentals() -> Vec<Question> {
    vec![
        Question::choice(
            "ad-q1",
            "What is the maximum depth for routine air diving under most commercial codes?",
            &["30 msw", "50 msw", "70 msw", "90 msw"],
            "50 msw",
            "Most commercial codes cap routine air diving at 50 msw; deeper work \
             requires mixed gas or special procedures.",
            2,
            1,
        ),
        Question::true_false(
            "ad-q2",
            "A standby diver must be dressed and ready whenever a diver is in the water.",
            true,
            "The standby diver is the primary rescue resource and must be able to \
             enter the water immediately.",
            1,
            2,
        ),
        Question::choice(
            "ad-q3",
            "What does the pneumofathometer measure?",
            &["Diver depth", "Gas purity", "Water temperature", "Umbilical length"],
            "Diver depth",
            "The pneumo line reads the pressure at the diver, which converts \
             directly to depth.",
            1,
            3,
        ),
        Question::true_false(
            "ad-q4",
            "It is acceptable to dive surface-supplied without a bailout bottle when \
             shallower than 10 msw.",
            false,
            "A bailout is required on every surface-supplied dive regardless of depth.",
            1,
            4,
        ),
        Question::written(
            "ad-q5",
            "Describe the pre-dive checks you perform on a diver's umbilical.",
            3,
            5,
        ),
    ]
}

fn dive_physics() -> Vec<Question> {
    vec![
        Question::choice(
            "dp-q1",
            "At 30 msw, the absolute pressure is approximately:",
            &["2 bar", "3 bar", "4 bar", "5 bar"],
            "4 bar",
            "One atmosphere at the surface plus one bar per 10 msw of seawater.",
            2,
            1,
        ),
        Question::choice(
            "dp-q2",
            "Which gas law relates volume to pressure at constant temperature?",
            &["Charles's law", "Boyle's law", "Dalton's law", "Henry's law"],
            "Boyle's law",
            "Boyle's law: pressure times volume is constant at fixed temperature.",
            1,
            2,
        ),
        Question::true_false(
            "dp-q3",
            "Breathing-gas density increases with depth.",
            true,
            "Higher ambient pressure compresses the gas, raising its density and \
             the work of breathing.",
            1,
            3,
        ),
        Question::written(
            "dp-q4",
            "Explain why a lift bag's volume changes during ascent and how you control it.",
            3,
            4,
        ),
    ]
}

fn underwater_welding() -> Vec<Question> {
    vec![
        Question::choice(
            "uw-q1",
            "Which polarity is standard for wet shielded-metal-arc welding?",
            &["DC electrode negative", "DC electrode positive", "AC", "Either polarity"],
            "DC electrode negative",
            "Wet welding uses DC straight polarity; AC is prohibited underwater.",
            2,
            1,
        ),
        Question::true_false(
            "uw-q2",
            "The safety (knife) switch must stay open except while the welder is \
             actually welding.",
            true,
            "The circuit is only made during the weld itself; the switch is opened \
             before the diver repositions or changes electrodes.",
            1,
            2,
        ),
        Question::choice(
            "uw-q3",
            "Hydrogen embrittlement in wet welds is driven mainly by:",
            &[
                "Arc temperature",
                "Water dissociated at the arc",
                "Electrode coating",
                "Salt content",
            ],
            "Water dissociated at the arc",
            "The arc splits water into hydrogen and oxygen; hydrogen diffuses into \
             the rapidly quenched weld metal.",
            2,
            3,
        ),
        Question::written(
            "uw-q4",
            "List the steps to secure the welding circuit before the diver leaves the water.",
            3,
            4,
        ),
    ]
}

fn demo_exam() -> Vec<Question> {
    vec![
        Question::choice(
            "demo-q1",
            "Maximum depth for routine air diving?",
            &["30 msw", "50 msw", "90 msw"],
            "50 msw",
            "Routine air diving is capped at 50 msw.",
            1,
            1,
        ),
        Question::true_false(
            "demo-q2",
            "A standby diver is required on every surface-supplied dive.",
            true,
            "The standby diver is mandatory whenever a diver is in the water.",
            1,
            2,
        ),
        Question::written("demo-q3", "Describe a lost-diver drill.", 1, 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_exam_has_questions_in_order() {
        for (exam_id, questions) in QUESTION_SETS.iter() {
            assert!(!questions.is_empty(), "exam '{}' has no questions", exam_id);
            for pair in questions.windows(2) {
                assert!(
                    pair[0].order < pair[1].order,
                    "exam '{}' questions out of order",
                    exam_id
                );
            }
        }
    }

    #[test]
    fn choice_answers_match_an_option_verbatim() {
        for (exam_id, questions) in QUESTION_SETS.iter() {
            for question in questions {
                if let Some(correct) = &question.correct_answer {
                    assert!(
                        question.options.contains(correct),
                        "exam '{}' question '{}' answer key not among options",
                        exam_id,
                        question.id
                    );
                }
            }
        }
    }

    #[test]
    fn question_ids_are_unique_within_each_exam() {
        for (exam_id, questions) in QUESTION_SETS.iter() {
            let mut ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(
                ids.len(),
                questions.len(),
                "exam '{}' has duplicate question ids",
                exam_id
            );
        }
    }

    #[test]
    fn demo_exam_is_short_and_fast() {
        assert_eq!(QUESTION_SETS["demo-exam"].len(), 3);
        assert_eq!(TIME_LIMITS["demo-exam"], 5);
    }
}
