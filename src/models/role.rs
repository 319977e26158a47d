use serde::{Deserialize, Serialize};

/// Every role that can log in to the system.
///
/// Rater roles enter category ratings and are usually bound to a single
/// platoon; reviewer roles see the whole camp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    PlatoonInstructor,
    ManOWar,
    SquadInstructor,
    Commandant,
    Soldier,
}

impl Role {
    /// Roles that submit category ratings.
    pub fn is_rater(self) -> bool {
        matches!(
            self,
            Role::PlatoonInstructor | Role::ManOWar | Role::SquadInstructor
        )
    }

    /// Roles that review the whole camp regardless of platoon.
    pub fn is_reviewer(self) -> bool {
        matches!(self, Role::Commandant | Role::Soldier)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::PlatoonInstructor => write!(f, "Platoon Instructor"),
            Role::ManOWar => write!(f, "Man O'War Instructor"),
            Role::SquadInstructor => write!(f, "Squad Instructor"),
            Role::Commandant => write!(f, "Commandant"),
            Role::Soldier => write!(f, "Soldier"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::PlatoonInstructor).unwrap();
        assert_eq!(json, "\"platoon_instructor\"");

        let role: Role = serde_json::from_str("\"man_o_war\"").unwrap();
        assert_eq!(role, Role::ManOWar);
    }

    #[test]
    fn test_rater_and_reviewer_split() {
        assert!(Role::PlatoonInstructor.is_rater());
        assert!(Role::ManOWar.is_rater());
        assert!(Role::SquadInstructor.is_rater());
        assert!(!Role::Commandant.is_rater());

        assert!(Role::Commandant.is_reviewer());
        assert!(Role::Soldier.is_reviewer());
        assert!(!Role::SquadInstructor.is_reviewer());
    }
}
