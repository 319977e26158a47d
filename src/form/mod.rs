//! Corps-member registration form: state, validation, finalization.
//!
//! The form is filled in three sections (camp/platoon, personal identity,
//! education). Each section validates independently and blocks
//! advancement; finalization re-validates everything and produces the
//! record handed to the datastore. Input normalization (call-up prefix,
//! phone country code) happens as values are set, upstream of validation.

pub mod registration;
pub mod validate;

pub use registration::{RegistrationForm, RegistrationRecord};
pub use validate::{Section, ValidationError};

/// Literal prefix every call-up number must carry.
pub const CALL_UP_PREFIX: &str = "NYSC/";

/// Country code phone numbers are normalized to.
pub const PHONE_COUNTRY_CODE: &str = "+234";

/// Digits expected after the country code.
pub const PHONE_LOCAL_DIGITS: usize = 10;

/// Digits expected after the state-code prefix.
pub const STATE_CODE_DIGITS: usize = 4;

/// Camp year code used in state-code prefixes unless configured otherwise.
pub const DEFAULT_YEAR_CODE: &str = "25C";
