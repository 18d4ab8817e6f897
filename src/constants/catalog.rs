//! Static track catalog shown on the course-content pages.

use once_cell::sync::Lazy;

use crate::models::domain::Track;

pub static TRACKS: Lazy<Vec<Track>> = Lazy::new(|| {
    vec![
        Track::new(
            "air-diving-fundamentals",
            "Air Diving Fundamentals",
            "Surface-supplied air diving procedures, crew roles and equipment checks.",
            &[
                "Dive team roles and responsibilities",
                "Surface-supplied equipment",
                "Umbilical management",
                "Emergency procedures",
            ],
        ),
        Track::new(
            "dive-physics",
            "Dive Physics",
            "Pressure, gas laws and buoyancy as they apply to working dives.",
            &[
                "Pressure and depth",
                "Boyle's and Dalton's laws",
                "Gas density and work of breathing",
                "Buoyancy and lift calculations",
            ],
        ),
        Track::new(
            "underwater-welding",
            "Underwater Welding",
            "Wet welding technique, electrical safety and weld quality.",
            &[
                "Welding circuit and polarity",
                "Knife switch discipline",
                "Electrode handling",
                "Weld defects and hydrogen embrittlement",
            ],
        ),
    ]
});
