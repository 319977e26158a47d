//! Per-section validation of the registration form.
//!
//! Each section is checked independently and reports the first failing
//! rule only; the caller routes the user back to the offending step with
//! that message. All three sections must pass before final submission.

use thiserror::Error;

use crate::form::registration::RegistrationForm;
use crate::form::{CALL_UP_PREFIX, PHONE_COUNTRY_CODE, PHONE_LOCAL_DIGITS, STATE_CODE_DIGITS};

/// The three steps of the registration form, in fill-in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    CampPlatoon,
    Personal,
    Education,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::CampPlatoon, Section::Personal, Section::Education];
}

/// A single corrective message for the first rule a section fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select your camp state")]
    CampStateUnset,

    #[error("State Code must be in format: {0}0000 (exactly 4 digits)")]
    StateCodeFormat(String),

    #[error("Please select your platoon")]
    PlatoonUnset,

    #[error("NYSC Call Up Number must start with NYSC/")]
    CallUpPrefix,

    #[error("Please enter your surname")]
    SurnameMissing,

    #[error("Please select your state of origin")]
    StateOfOriginUnset,

    #[error("Please select your batch")]
    BatchUnset,

    #[error("Phone number must be in format: +234XXXXXXXXXX (10 digits after +234)")]
    PhoneFormat,

    #[error("Please enter your qualification")]
    QualificationMissing,

    #[error("Please enter your area of specialisation")]
    SpecializationMissing,
}

impl ValidationError {
    /// Format errors describe malformed input; everything else is a
    /// missing required field. Both are recoverable by the user.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ValidationError::StateCodeFormat(_)
                | ValidationError::CallUpPrefix
                | ValidationError::PhoneFormat
        )
    }
}

impl RegistrationForm {
    /// Check one section, returning the first failing rule in declared
    /// order. Pure: reads form state only.
    pub fn validate_section(&self, section: Section) -> Result<(), ValidationError> {
        match section {
            Section::CampPlatoon => {
                let state = self.camp_state.ok_or(ValidationError::CampStateUnset)?;
                let prefix = state.state_code_prefix(self.year_code());
                if !is_valid_state_code(&self.state_code, &prefix) {
                    return Err(ValidationError::StateCodeFormat(prefix));
                }
                if self.platoon.is_none() {
                    return Err(ValidationError::PlatoonUnset);
                }
            }
            Section::Personal => {
                if !self.call_up_no.starts_with(CALL_UP_PREFIX) {
                    return Err(ValidationError::CallUpPrefix);
                }
                if self.surname.trim().is_empty() {
                    return Err(ValidationError::SurnameMissing);
                }
                if self.state_of_origin.is_none() {
                    return Err(ValidationError::StateOfOriginUnset);
                }
                if self.batch.is_none() {
                    return Err(ValidationError::BatchUnset);
                }
                if !self.phone.is_empty() && !is_valid_phone(&self.phone) {
                    return Err(ValidationError::PhoneFormat);
                }
            }
            Section::Education => {
                if self.qualification.trim().is_empty() {
                    return Err(ValidationError::QualificationMissing);
                }
                if self.specialization.trim().is_empty() {
                    return Err(ValidationError::SpecializationMissing);
                }
                // Institution rows never fail validation; blank rows are
                // dropped at finalization instead.
            }
        }
        Ok(())
    }

    /// Check every section in order; required before final submission.
    pub fn validate_all(&self) -> Result<(), ValidationError> {
        for section in Section::ALL {
            self.validate_section(section)?;
        }
        Ok(())
    }
}

/// `<prefix>` followed by exactly four digits.
fn is_valid_state_code(code: &str, prefix: &str) -> bool {
    match code.strip_prefix(prefix) {
        Some(digits) => {
            digits.len() == STATE_CODE_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// `+234` followed by exactly ten digits.
fn is_valid_phone(phone: &str) -> bool {
    match phone.strip_prefix(PHONE_COUNTRY_CODE) {
        Some(digits) => {
            digits.len() == PHONE_LOCAL_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
