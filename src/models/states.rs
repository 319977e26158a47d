//! Registration enumerations: camp states, batches, and states of origin.

use serde::{Deserialize, Serialize};

/// The two states that host an orientation camp.
///
/// Each camp state has its own state-code prefix; the full prefix also
/// carries the camp year code (for example `LA/25C/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CampState {
    Lagos,
    Ondo,
}

impl CampState {
    /// Two-letter abbreviation used in state registration codes.
    pub fn abbreviation(self) -> &'static str {
        match self {
            CampState::Lagos => "LA",
            CampState::Ondo => "OD",
        }
    }

    /// Full state-code prefix for a given camp year code,
    /// e.g. `LA/25C/` for Lagos in year code `25C`.
    pub fn state_code_prefix(self, year_code: &str) -> String {
        format!("{}/{}/", self.abbreviation(), year_code)
    }

    pub const ALL: [CampState; 2] = [CampState::Lagos, CampState::Ondo];
}

impl std::fmt::Display for CampState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampState::Lagos => write!(f, "Lagos"),
            CampState::Ondo => write!(f, "Ondo"),
        }
    }
}

/// Reporting period covered by the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Batch {
    #[serde(rename = "Batch A")]
    A,
    #[serde(rename = "Batch B")]
    B,
    #[serde(rename = "Batch C")]
    C,
}

impl Batch {
    pub const ALL: [Batch; 3] = [Batch::A, Batch::B, Batch::C];
}

impl std::fmt::Display for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Batch::A => write!(f, "Batch A"),
            Batch::B => write!(f, "Batch B"),
            Batch::C => write!(f, "Batch C"),
        }
    }
}

/// The 36 Nigerian states plus the FCT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateOfOrigin {
    Abia,
    Adamawa,
    #[serde(rename = "Akwa Ibom")]
    AkwaIbom,
    Anambra,
    Bauchi,
    Bayelsa,
    Benue,
    Borno,
    #[serde(rename = "Cross River")]
    CrossRiver,
    Delta,
    Ebonyi,
    Edo,
    Ekiti,
    Enugu,
    #[serde(rename = "FCT")]
    Fct,
    Gombe,
    Imo,
    Jigawa,
    Kaduna,
    Kano,
    Katsina,
    Kebbi,
    Kogi,
    Kwara,
    Lagos,
    Nasarawa,
    Niger,
    Ogun,
    Ondo,
    Osun,
    Oyo,
    Plateau,
    Rivers,
    Sokoto,
    Taraba,
    Yobe,
    Zamfara,
}

impl StateOfOrigin {
    pub const ALL: [StateOfOrigin; 37] = [
        StateOfOrigin::Abia,
        StateOfOrigin::Adamawa,
        StateOfOrigin::AkwaIbom,
        StateOfOrigin::Anambra,
        StateOfOrigin::Bauchi,
        StateOfOrigin::Bayelsa,
        StateOfOrigin::Benue,
        StateOfOrigin::Borno,
        StateOfOrigin::CrossRiver,
        StateOfOrigin::Delta,
        StateOfOrigin::Ebonyi,
        StateOfOrigin::Edo,
        StateOfOrigin::Ekiti,
        StateOfOrigin::Enugu,
        StateOfOrigin::Fct,
        StateOfOrigin::Gombe,
        StateOfOrigin::Imo,
        StateOfOrigin::Jigawa,
        StateOfOrigin::Kaduna,
        StateOfOrigin::Kano,
        StateOfOrigin::Katsina,
        StateOfOrigin::Kebbi,
        StateOfOrigin::Kogi,
        StateOfOrigin::Kwara,
        StateOfOrigin::Lagos,
        StateOfOrigin::Nasarawa,
        StateOfOrigin::Niger,
        StateOfOrigin::Ogun,
        StateOfOrigin::Ondo,
        StateOfOrigin::Osun,
        StateOfOrigin::Oyo,
        StateOfOrigin::Plateau,
        StateOfOrigin::Rivers,
        StateOfOrigin::Sokoto,
        StateOfOrigin::Taraba,
        StateOfOrigin::Yobe,
        StateOfOrigin::Zamfara,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StateOfOrigin::Abia => "Abia",
            StateOfOrigin::Adamawa => "Adamawa",
            StateOfOrigin::AkwaIbom => "Akwa Ibom",
            StateOfOrigin::Anambra => "Anambra",
            StateOfOrigin::Bauchi => "Bauchi",
            StateOfOrigin::Bayelsa => "Bayelsa",
            StateOfOrigin::Benue => "Benue",
            StateOfOrigin::Borno => "Borno",
            StateOfOrigin::CrossRiver => "Cross River",
            StateOfOrigin::Delta => "Delta",
            StateOfOrigin::Ebonyi => "Ebonyi",
            StateOfOrigin::Edo => "Edo",
            StateOfOrigin::Ekiti => "Ekiti",
            StateOfOrigin::Enugu => "Enugu",
            StateOfOrigin::Fct => "FCT",
            StateOfOrigin::Gombe => "Gombe",
            StateOfOrigin::Imo => "Imo",
            StateOfOrigin::Jigawa => "Jigawa",
            StateOfOrigin::Kaduna => "Kaduna",
            StateOfOrigin::Kano => "Kano",
            StateOfOrigin::Katsina => "Katsina",
            StateOfOrigin::Kebbi => "Kebbi",
            StateOfOrigin::Kogi => "Kogi",
            StateOfOrigin::Kwara => "Kwara",
            StateOfOrigin::Lagos => "Lagos",
            StateOfOrigin::Nasarawa => "Nasarawa",
            StateOfOrigin::Niger => "Niger",
            StateOfOrigin::Ogun => "Ogun",
            StateOfOrigin::Ondo => "Ondo",
            StateOfOrigin::Osun => "Osun",
            StateOfOrigin::Oyo => "Oyo",
            StateOfOrigin::Plateau => "Plateau",
            StateOfOrigin::Rivers => "Rivers",
            StateOfOrigin::Sokoto => "Sokoto",
            StateOfOrigin::Taraba => "Taraba",
            StateOfOrigin::Yobe => "Yobe",
            StateOfOrigin::Zamfara => "Zamfara",
        }
    }
}

impl std::fmt::Display for StateOfOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for StateOfOrigin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateOfOrigin::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("'{}' is not a Nigerian state", s))
    }
}
