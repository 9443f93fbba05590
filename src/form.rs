// src/form.rs
//! Patient registration: the form snapshot, its validation rules and the
//! screening outcome produced on a successful submit.
//!
//! Submission is all-or-nothing. `validate` runs every rule and returns all
//! failures; `submit` only scores the form when there are none.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::classify::screening::{assess_screening, ScreeningAssessment, ScreeningFactors, Symptoms};
use crate::classify::is_abnormal_tsh;
use crate::config::consts::{NOTES_MAX_CHARS, PATIENT_ID_PREFIX};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormGender {
    #[default]
    Female,
    Male,
    Other,
    PreferNotToSay,
}

impl FormGender {
    pub const ALL: [FormGender; 4] =
        [FormGender::Female, FormGender::Male, FormGender::Other, FormGender::PreferNotToSay];

    pub fn label(self) -> &'static str {
        match self {
            FormGender::Female => "Female",
            FormGender::Male => "Male",
            FormGender::Other => "Other",
            FormGender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// One optional lab value: entered only when `available` is ticked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionalLab {
    pub available: bool,
    pub value: f64,
}

impl OptionalLab {
    pub const fn new(value: f64) -> Self {
        Self { available: false, value }
    }

    pub fn get(&self) -> Option<f64> {
        self.available.then_some(self.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationForm {
    // Personal
    pub first_name: String,
    pub last_name: String,
    pub patient_id: String,
    pub birth_date: NaiveDate,
    pub gender: FormGender,
    pub phone: String,
    pub emergency_contact: String,
    pub insurance_id: String,

    // Clinical
    pub symptoms: Symptoms,
    pub family_history: bool,
    pub previous_thyroid: bool,
    pub medications: bool,
    pub autoimmune: bool,
    pub tsh: OptionalLab,
    pub t3: OptionalLab,
    pub t4: OptionalLab,
    pub smoking: bool,
    pub pregnancy: bool,
    pub radiation: bool,
    pub iodine_deficiency: bool,
    pub notes: String,

    // Consent
    pub consent_treatment: bool,
    pub consent_data: bool,
    pub consent_contact: bool,
    pub newsletter: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            first_name: s!(),
            last_name: s!(),
            patient_id: s!(),
            birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap_or_default(),
            gender: FormGender::Female,
            phone: s!(),
            emergency_contact: s!(),
            insurance_id: s!(),
            symptoms: Symptoms::default(),
            family_history: false,
            previous_thyroid: false,
            medications: false,
            autoimmune: false,
            tsh: OptionalLab::new(2.5),
            t3: OptionalLab::new(1.8),
            t4: OptionalLab::new(9.5),
            smoking: false,
            pregnancy: false,
            radiation: false,
            iodine_deficiency: false,
            notes: s!(),
            consent_treatment: false,
            consent_data: false,
            consent_contact: false,
            newsletter: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("First name is required")]
    FirstNameMissing,
    #[error("Last name is required")]
    LastNameMissing,
    #[error("Patient ID is required")]
    PatientIdMissing,
    #[error("Patient ID must start with 'THY-'")]
    PatientIdPrefix,
    #[error("Treatment consent is required")]
    TreatmentConsentMissing,
    #[error("Data storage consent is required")]
    DataConsentMissing,
    #[error("Contact consent is required")]
    ContactConsentMissing,
    #[error("Additional notes must be at most 1000 characters")]
    NotesTooLong,
}

pub fn validate(form: &RegistrationForm) -> Result<(), Vec<FormError>> {
    let mut errors = Vec::new();
    if form.first_name.trim().is_empty() {
        errors.push(FormError::FirstNameMissing);
    }
    if form.last_name.trim().is_empty() {
        errors.push(FormError::LastNameMissing);
    }
    let id = form.patient_id.trim();
    if id.is_empty() {
        errors.push(FormError::PatientIdMissing);
    } else if !id.starts_with(PATIENT_ID_PREFIX) {
        errors.push(FormError::PatientIdPrefix);
    }
    if !form.consent_treatment {
        errors.push(FormError::TreatmentConsentMissing);
    }
    if !form.consent_data {
        errors.push(FormError::DataConsentMissing);
    }
    if !form.consent_contact {
        errors.push(FormError::ContactConsentMissing);
    }
    if form.notes.chars().count() > NOTES_MAX_CHARS {
        errors.push(FormError::NotesTooLong);
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

impl RegistrationForm {
    /// Scoring inputs. A TSH of exactly 0 counts as not entered.
    pub fn screening_factors(&self) -> ScreeningFactors {
        ScreeningFactors {
            family_history: self.family_history,
            previous_thyroid: self.previous_thyroid,
            autoimmune: self.autoimmune,
            smoking: self.smoking,
            radiation: self.radiation,
            pregnancy: self.pregnancy,
            symptoms: self.symptoms,
            tsh: self.tsh.get().filter(|t| *t > 0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScreeningOutcome {
    pub full_name: String,
    pub patient_id: String,
    /// Calendar-year difference; birthdays are not considered.
    pub age_years: i32,
    pub gender: FormGender,
    pub assessment: ScreeningAssessment,
    /// `TSH: 2.5 mIU/L - NORMAL`, `T3: 1.8 ng/dL`, ... Whole numbers keep
    /// their decimal point (`7.0`).
    pub lab_lines: Vec<String>,
}

impl ScreeningOutcome {
    pub fn recommendations(&self) -> &'static [&'static str] {
        self.assessment.recommendations()
    }
}

pub fn submit(form: &RegistrationForm, today: NaiveDate) -> Result<ScreeningOutcome, Vec<FormError>> {
    validate(form)?;

    let assessment = assess_screening(&form.screening_factors());

    let mut lab_lines = Vec::new();
    if let Some(tsh) = form.tsh.get() {
        let status = if tsh > 0.0 && is_abnormal_tsh(tsh) { "ABNORMAL" } else { "NORMAL" };
        lab_lines.push(format!("TSH: {tsh:?} mIU/L - {status}"));
    }
    if let Some(t3) = form.t3.get() {
        lab_lines.push(format!("T3: {t3:?} ng/dL"));
    }
    if let Some(t4) = form.t4.get() {
        lab_lines.push(format!("T4: {t4:?} μg/dL"));
    }

    let outcome = ScreeningOutcome {
        full_name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
        patient_id: s!(form.patient_id.trim()),
        age_years: today.year() - form.birth_date.year(),
        gender: form.gender,
        assessment,
        lab_lines,
    };
    logf!(
        "Form: submitted {} score={}/{} {}",
        outcome.patient_id,
        assessment.risk.score,
        assessment.risk.max,
        assessment.risk.level
    );
    Ok(outcome)
}
