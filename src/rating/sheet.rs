use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Role;
use crate::rating::schema::{self, Score};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// Caller passed a mark outside the fixed discrete scale.
    #[error("{0} is not a valid score - award 2, 4, 6, 8 or 10")]
    InvalidScore(u8),

    /// Caller used a category key that does not belong to this role's set.
    #[error("'{0}' is not a rating category for {1}")]
    UnknownCategory(String, Role),

    /// The role has no category set (reviewer roles do not rate).
    #[error("{0} does not enter category ratings")]
    NotARater(Role),

    /// Commit was attempted before every category was marked.
    #[error("Please rate all categories before saving")]
    Incomplete,
}

/// In-progress category marks for one rater and subject.
///
/// The category set is fixed by the rater's role. Unset categories are
/// held as `None`; the stored zero sentinel exists only at the
/// persistence boundary (see [`RatingSheet::from_saved`]).
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSheet {
    role: Role,
    rater_name: String,
    marks: BTreeMap<&'static str, Option<Score>>,
}

impl RatingSheet {
    /// Start an empty sheet for a rater role.
    pub fn new(role: Role, rater_name: impl Into<String>) -> Result<Self, RatingError> {
        let set = schema::categories(role).ok_or(RatingError::NotARater(role))?;
        Ok(Self {
            role,
            rater_name: rater_name.into(),
            marks: set.iter().map(|key| (*key, None)).collect(),
        })
    }

    /// Rebuild a sheet from stored values, where `0` means unset.
    ///
    /// Any other value outside the scale, or a key outside the role's
    /// category set, is rejected rather than clamped or ignored.
    pub fn from_saved(
        role: Role,
        rater_name: impl Into<String>,
        saved: &BTreeMap<String, u8>,
    ) -> Result<Self, RatingError> {
        let mut sheet = Self::new(role, rater_name)?;
        for (key, value) in saved {
            if *value == 0 {
                continue;
            }
            sheet.set(key, *value)?;
        }
        Ok(sheet)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn rater_name(&self) -> &str {
        &self.rater_name
    }

    /// The fixed category set for this sheet's role.
    pub fn categories(&self) -> &'static [&'static str] {
        schema::categories(self.role).unwrap_or(&[])
    }

    /// Award a mark for one category. Rejects values outside the scale
    /// and keys outside the role's category set.
    pub fn set(&mut self, category: &str, value: u8) -> Result<(), RatingError> {
        let score = Score::from_value(value).ok_or(RatingError::InvalidScore(value))?;
        match self.marks.get_mut(category) {
            Some(slot) => {
                *slot = Some(score);
                Ok(())
            }
            None => Err(RatingError::UnknownCategory(
                category.to_string(),
                self.role,
            )),
        }
    }

    pub fn get(&self, category: &str) -> Option<Score> {
        self.marks.get(category).copied().flatten()
    }

    /// Running total; unset categories contribute zero.
    pub fn total(&self) -> u32 {
        self.marks
            .values()
            .map(|mark| mark.map(|s| s.value() as u32).unwrap_or(0))
            .sum()
    }

    pub fn max_total(&self) -> u32 {
        self.marks.len() as u32 * schema::MAX_CATEGORY_SCORE as u32
    }

    /// True only once every category holds a mark.
    pub fn is_complete(&self) -> bool {
        self.marks.values().all(Option::is_some)
    }

    /// Finalize the sheet into a persistable record. Fails while any
    /// category is still unset.
    pub fn commit(&self) -> Result<RatingRecord, RatingError> {
        if !self.is_complete() {
            return Err(RatingError::Incomplete);
        }
        let scores: BTreeMap<String, u8> = self
            .marks
            .iter()
            .map(|(key, mark)| {
                // is_complete guarantees every mark is Some
                (key.to_string(), mark.map(Score::value).unwrap_or(0))
            })
            .collect();
        Ok(RatingRecord {
            role: self.role,
            rater_name: self.rater_name.clone(),
            total: self.total(),
            complete: true,
            scores,
            rated_at: Utc::now(),
        })
    }
}

/// A committed rating as written to the subject's stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub role: Role,
    pub rater_name: String,
    pub scores: BTreeMap<String, u8>,
    pub total: u32,
    pub complete: bool,
    pub rated_at: DateTime<Utc>,
}
