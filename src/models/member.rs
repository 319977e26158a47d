use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Batch, CampState, Role, StateOfOrigin};
use crate::rating::RatingRecord;

/// Highest platoon number in an orientation camp.
pub const MAX_PLATOON: u8 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("platoon must be between 1 and {MAX_PLATOON}")]
pub struct PlatoonRangeError;

/// A camp subdivision, numbered 1 through 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Platoon(u8);

impl Platoon {
    pub fn new(number: u8) -> Result<Self, PlatoonRangeError> {
        if (1..=MAX_PLATOON).contains(&number) {
            Ok(Platoon(number))
        } else {
            Err(PlatoonRangeError)
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// All platoons in order, for dropdowns and per-platoon statistics.
    pub fn all() -> impl Iterator<Item = Platoon> {
        (1..=MAX_PLATOON).map(Platoon)
    }
}

impl TryFrom<u8> for Platoon {
    type Error = PlatoonRangeError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Platoon::new(number)
    }
}

impl From<Platoon> for u8 {
    fn from(platoon: Platoon) -> u8 {
        platoon.0
    }
}

impl std::fmt::Display for Platoon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Platoon {}", self.0)
    }
}

/// One higher-institution row from the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Institution {
    pub name: String,
    #[serde(default)]
    pub year: String,
}

impl Institution {
    /// Blank rows are the default form state and are dropped at finalization.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Lifecycle state of a member record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Submitted,
    Rated,
}

/// A free-text assessment left by a reviewer role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
}

/// A corps member as stored in the datastore: the accepted registration
/// plus any ratings and reviewer comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpsMember {
    pub id: String,
    pub state_code: String,
    pub platoon: Platoon,
    pub call_up_no: String,
    pub surname: String,
    pub other_names: Option<String>,
    #[serde(default)]
    pub change_of_name: Option<String>,
    pub state_of_origin: StateOfOrigin,
    pub state_of_deployment: CampState,
    #[serde(rename = "period_covered")]
    pub batch: Batch,
    pub phone: Option<String>,
    pub qualification: String,
    pub specialization: String,
    #[serde(default)]
    pub institutions: Vec<Institution>,
    pub status: MemberStatus,
    #[serde(default)]
    pub ratings: Vec<RatingRecord>,
    #[serde(default)]
    pub comments: BTreeMap<Role, Comment>,
}

impl CorpsMember {
    pub fn full_name(&self) -> String {
        match self.other_names.as_deref().filter(|n| !n.is_empty()) {
            Some(other) => format!("{} {}", self.surname, other),
            None => self.surname.clone(),
        }
    }

    /// The rating entered by the given rater role, if any.
    pub fn rating_for(&self, role: Role) -> Option<&RatingRecord> {
        self.ratings.iter().find(|r| r.role == role)
    }

    /// Whether the given rater role has entered a complete rating.
    pub fn is_rated_by(&self, role: Role) -> bool {
        self.rating_for(role).map(|r| r.complete).unwrap_or(false)
    }

    /// The given rater role's total, for dashboard listings.
    pub fn total_for(&self, role: Role) -> Option<u32> {
        self.rating_for(role).map(|r| r.total)
    }

    /// Record a rating, overwriting any existing rating from the same role.
    pub fn apply_rating(&mut self, record: RatingRecord) {
        self.ratings.retain(|r| r.role != record.role);
        self.ratings.push(record);
        self.status = MemberStatus::Rated;
    }

    /// Composite score across two rater roles, available only once both
    /// have committed a complete rating.
    pub fn composite(&self, first: Role, second: Role) -> Option<f64> {
        crate::rating::combine(self.rating_for(first)?, self.rating_for(second)?)
    }

    /// The comment left by the given reviewer role, if any.
    pub fn comment_for(&self, role: Role) -> Option<&Comment> {
        self.comments.get(&role)
    }

    /// Record a reviewer comment, overwriting any existing comment from
    /// the same role. Comments from different roles are independent.
    pub fn set_comment(&mut self, role: Role, author: impl Into<String>, text: impl Into<String>) {
        self.comments.insert(
            role,
            Comment {
                author: author.into(),
                text: text.into(),
            },
        );
    }
}
