//! Canned tutor scripts, one persona per track plus a generic fallback.
//! Replies are fixed data; the matching logic lives in the tutor service.

use once_cell::sync::Lazy;

use crate::models::domain::TutorPersona;

pub static PERSONAS: Lazy<Vec<TutorPersona>> = Lazy::new(|| {
    vec![
        TutorPersona::new(
            "air-diving-fundamentals",
            "Chief Rigger Dan",
            "Topside here. What do you want to run through before the dive?",
            "Good question. Check the dive manual section on surface-supplied \
             procedures, or ask me about the standby diver, umbilicals or bailout.",
        )
        .with_rule(
            &["standby", "rescue"],
            "The standby diver stays dressed in, checked out and ready to deploy \
             the whole time your diver is wet. No exceptions.",
        )
        .with_rule(
            &["umbilical", "hose"],
            "Walk the umbilical end to end before every dive: kinks, chafe, \
             fittings tight, pneumo clear, comms continuity checked.",
        )
        .with_rule(
            &["bailout", "emergency"],
            "Bailout goes on every surface-supplied dive, charged and whipped in, \
             whatever the depth. Test the changeover before you leave surface.",
        ),
        TutorPersona::new(
            "dive-physics",
            "Doc Marina",
            "Physics desk. Which gas law is giving you trouble today?",
            "Let's keep it concrete: give me a depth or a gas and I'll walk you \
             through the numbers.",
        )
        .with_rule(
            &["boyle", "volume", "pressure"],
            "Boyle's law: at constant temperature, pressure times volume stays \
             constant. Halve the volume, double the pressure.",
        )
        .with_rule(
            &["dalton", "partial"],
            "Dalton's law: total pressure is the sum of the partial pressures. \
             Each gas contributes its fraction of the mix times the absolute pressure.",
        )
        .with_rule(
            &["buoyancy", "lift"],
            "Buoyancy is the weight of displaced water. A 100 litre bag in seawater \
             gives you roughly 100 kg of lift at depth, growing as it ascends.",
        ),
        TutorPersona::new(
            "underwater-welding",
            "Welder Sofia",
            "Weld shack here. Polarity, procedure or defects, what'll it be?",
            "If it isn't in the weld procedure specification, don't improvise it. \
             Ask me about polarity, the knife switch or electrode technique.",
        )
        .with_rule(
            &["polarity", "current"],
            "DC electrode negative, always. AC underwater is a hard no; it won't \
             let go of you.",
        )
        .with_rule(
            &["knife", "switch", "safety"],
            "Switch open unless the rod is actually burning. Call 'make it hot' \
             and 'make it cold' and wait for topside to confirm.",
        )
        .with_rule(
            &["hydrogen", "crack", "defect"],
            "The arc splits water into hydrogen and oxygen; the hydrogen soaks \
             into the quenched weld metal and embrittles it. Tight beads, short arcs.",
        ),
    ]
});

pub static FALLBACK_PERSONA: Lazy<TutorPersona> = Lazy::new(|| {
    TutorPersona::new(
        "general",
        "Training Desk",
        "Training desk here. Which track are you working on?",
        "I don't have a specialist for that track yet. Pick a track from the \
         catalog and I'll connect you with its tutor.",
    )
});
