use serde::{Deserialize, Serialize};

use crate::form::{ValidationError, DEFAULT_YEAR_CODE};
use crate::models::{Batch, CampState, Institution, MemberStatus, Platoon, StateOfOrigin};
use crate::utils::{normalize_call_up, normalize_phone};

/// In-progress registration form state.
///
/// Selection fields stay `None` until the user picks a value; free-text
/// fields hold whatever was typed and are trimmed at validation time.
/// There is no partial-save state: the form either finalizes fully valid
/// or not at all.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub camp_state: Option<CampState>,
    pub state_code: String,
    pub platoon: Option<Platoon>,
    pub call_up_no: String,
    pub surname: String,
    pub other_names: String,
    pub change_of_name: String,
    pub state_of_origin: Option<StateOfOrigin>,
    pub batch: Option<Batch>,
    pub phone: String,
    pub qualification: String,
    pub specialization: String,
    pub institutions: Vec<Institution>,
    year_code: String,
}

impl RegistrationForm {
    /// Empty form for the given camp year code, with the default single
    /// blank institution row.
    pub fn new(year_code: impl Into<String>) -> Self {
        Self {
            camp_state: None,
            state_code: String::new(),
            platoon: None,
            call_up_no: String::new(),
            surname: String::new(),
            other_names: String::new(),
            change_of_name: String::new(),
            state_of_origin: None,
            batch: None,
            phone: String::new(),
            qualification: String::new(),
            specialization: String::new(),
            institutions: vec![Institution::default()],
            year_code: year_code.into(),
        }
    }

    pub fn year_code(&self) -> &str {
        &self.year_code
    }

    /// Select the camp state. Resets the state code to the matching
    /// prefix for the user to complete; deployment state is derived from
    /// this selection at finalization.
    pub fn set_camp_state(&mut self, state: CampState) {
        self.camp_state = Some(state);
        self.state_code = state.state_code_prefix(&self.year_code);
    }

    /// Expected state-code prefix for the selected camp state.
    pub fn state_code_prefix(&self) -> Option<String> {
        self.camp_state
            .map(|state| state.state_code_prefix(&self.year_code))
    }

    /// Set the call-up number, prefixing `NYSC/` when missing.
    pub fn set_call_up(&mut self, input: &str) {
        self.call_up_no = normalize_call_up(input);
    }

    /// Set the phone number, normalizing toward `+234XXXXXXXXXX`.
    pub fn set_phone(&mut self, input: &str) {
        self.phone = normalize_phone(input);
    }

    /// Append a blank institution row.
    pub fn add_institution(&mut self) {
        self.institutions.push(Institution::default());
    }

    /// Remove an institution row by index. The last remaining row is
    /// never removed; out-of-range indexes are ignored.
    pub fn remove_institution(&mut self, index: usize) -> bool {
        if self.institutions.len() > 1 && index < self.institutions.len() {
            self.institutions.remove(index);
            true
        } else {
            false
        }
    }

    /// Re-validate all three sections and produce the persistable record.
    ///
    /// Names are uppercased and blank institution rows dropped, matching
    /// what the evaluation sheet prints.
    pub fn finalize(&self) -> Result<RegistrationRecord, ValidationError> {
        self.validate_all()?;

        let camp_state = self.camp_state.ok_or(ValidationError::CampStateUnset)?;
        let other_names = self.other_names.trim().to_uppercase();
        let change_of_name = self.change_of_name.trim().to_string();

        Ok(RegistrationRecord {
            state_code: self.state_code.clone(),
            platoon: self.platoon.ok_or(ValidationError::PlatoonUnset)?,
            call_up_no: self.call_up_no.clone(),
            surname: self.surname.trim().to_uppercase(),
            other_names: (!other_names.is_empty()).then_some(other_names),
            change_of_name: (!change_of_name.is_empty()).then_some(change_of_name),
            state_of_origin: self
                .state_of_origin
                .ok_or(ValidationError::StateOfOriginUnset)?,
            state_of_deployment: camp_state,
            batch: self.batch.ok_or(ValidationError::BatchUnset)?,
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            qualification: self.qualification.trim().to_string(),
            specialization: self.specialization.trim().to_string(),
            institutions: self
                .institutions
                .iter()
                .filter(|inst| !inst.is_blank())
                .cloned()
                .collect(),
            status: MemberStatus::Submitted,
        })
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(DEFAULT_YEAR_CODE)
    }
}

/// A fully validated registration, shaped for insertion into the
/// datastore. Created once per corps member; there is no edit path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub state_code: String,
    pub platoon: Platoon,
    pub call_up_no: String,
    pub surname: String,
    pub other_names: Option<String>,
    pub change_of_name: Option<String>,
    pub state_of_origin: StateOfOrigin,
    pub state_of_deployment: CampState,
    #[serde(rename = "period_covered")]
    pub batch: Batch,
    pub phone: Option<String>,
    pub qualification: String,
    pub specialization: String,
    pub institutions: Vec<Institution>,
    pub status: MemberStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.set_camp_state(CampState::Lagos);
        form.state_code.push_str("0042");
        form.platoon = Platoon::new(3).ok();
        form.set_call_up("LA/2025/123456");
        form.surname = "Adebayo".to_string();
        form.other_names = "Funke mary".to_string();
        form.state_of_origin = Some(StateOfOrigin::Ogun);
        form.batch = Some(Batch::B);
        form.set_phone("08012345678");
        form.qualification = "B.Sc.".to_string();
        form.specialization = "Computer Science".to_string();
        form.institutions[0] = Institution {
            name: "University of Ibadan".to_string(),
            year: "2023".to_string(),
        };
        form
    }

    #[test]
    fn test_camp_state_selection_seeds_state_code() {
        let mut form = RegistrationForm::default();
        form.set_camp_state(CampState::Lagos);
        assert_eq!(form.state_code, "LA/25C/");

        form.set_camp_state(CampState::Ondo);
        assert_eq!(form.state_code, "OD/25C/");
        assert_eq!(form.state_code_prefix().as_deref(), Some("OD/25C/"));
    }

    #[test]
    fn test_setters_normalize_input() {
        let mut form = RegistrationForm::default();
        form.set_call_up("12345");
        assert_eq!(form.call_up_no, "NYSC/12345");

        form.set_phone("0801 234 5678");
        assert_eq!(form.phone, "+2348012345678");
    }

    #[test]
    fn test_institution_rows_keep_minimum_of_one() {
        let mut form = RegistrationForm::default();
        assert_eq!(form.institutions.len(), 1);
        assert!(!form.remove_institution(0));

        form.add_institution();
        assert!(form.remove_institution(1));
        assert_eq!(form.institutions.len(), 1);
        assert!(!form.remove_institution(5));
    }

    #[test]
    fn test_finalize_shapes_the_record() {
        let mut form = filled_form();
        form.add_institution(); // left blank, must be dropped

        let record = form.finalize().unwrap();
        assert_eq!(record.surname, "ADEBAYO");
        assert_eq!(record.other_names.as_deref(), Some("FUNKE MARY"));
        assert_eq!(record.change_of_name, None);
        assert_eq!(record.state_of_deployment, CampState::Lagos);
        assert_eq!(record.batch, Batch::B);
        assert_eq!(record.phone.as_deref(), Some("+2348012345678"));
        assert_eq!(record.institutions.len(), 1);
        assert_eq!(record.status, MemberStatus::Submitted);
    }

    #[test]
    fn test_record_serializes_to_stored_columns() {
        let record = filled_form().finalize().unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["state_code"], "LA/25C/0042");
        assert_eq!(json["platoon"], 3);
        assert_eq!(json["period_covered"], "Batch B");
        assert_eq!(json["status"], "submitted");
    }

    #[test]
    fn test_optional_phone_left_empty() {
        let mut form = filled_form();
        form.phone.clear();
        let record = form.finalize().unwrap();
        assert_eq!(record.phone, None);
    }
}
