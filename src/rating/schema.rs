//! Role-to-category-set mapping and the discrete score scale.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Maximum mark per category.
pub const MAX_CATEGORY_SCORE: u8 = 10;

/// Categories assessed by platoon-level raters (max total 50).
pub const PLATOON_CATEGORIES: &[&str] = &[
    "appearance",
    "punctuality",
    "discipline",
    "participation",
    "general_conduct",
];

/// Categories assessed by squad instructors (max total 90).
pub const SQUAD_CATEGORIES: &[&str] = &[
    "appearance_bearing",
    "punctuality_regularity",
    "camp_civics",
    "civil_orientation",
    "sense_of_duty",
    "initiative_resourcefulness",
    "team_work",
    "command_leadership",
    "discipline",
];

/// The category set a rater role assesses, or `None` for reviewer roles.
pub fn categories(role: Role) -> Option<&'static [&'static str]> {
    match role {
        Role::PlatoonInstructor | Role::ManOWar => Some(PLATOON_CATEGORIES),
        Role::SquadInstructor => Some(SQUAD_CATEGORIES),
        Role::Commandant | Role::Soldier => None,
    }
}

/// Highest total the role's category set can reach.
pub fn max_total(role: Role) -> Option<u32> {
    categories(role).map(|set| set.len() as u32 * MAX_CATEGORY_SCORE as u32)
}

/// A single category mark on the fixed discrete scale.
///
/// Zero is not a score: it is the stored sentinel for "not yet rated"
/// and only appears at the persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Score {
    Poor = 2,
    Fair = 4,
    Good = 6,
    VeryGood = 8,
    Excellent = 10,
}

impl Score {
    pub const ALL: [Score; 5] = [
        Score::Poor,
        Score::Fair,
        Score::Good,
        Score::VeryGood,
        Score::Excellent,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Score::Poor => "Poor",
            Score::Fair => "Fair",
            Score::Good => "Good",
            Score::VeryGood => "Very Good",
            Score::Excellent => "Excellent",
        }
    }

    pub fn from_value(value: u8) -> Option<Score> {
        match value {
            2 => Some(Score::Poor),
            4 => Some(Score::Fair),
            6 => Some(Score::Good),
            8 => Some(Score::VeryGood),
            10 => Some(Score::Excellent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.value())
    }
}
