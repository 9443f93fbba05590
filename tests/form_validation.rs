// tests/form_validation.rs
//
// Registration form: all rules are collected; submit is all-or-nothing.

use chrono::NaiveDate;

use thyro_dash::classify::screening::{Fatigue, Symptoms, WeightChange};
use thyro_dash::form::{submit, validate, FormError, FormGender, OptionalLab, RegistrationForm};
use thyro_dash::model::RiskLevel;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        patient_id: "THY-0042".into(),
        birth_date: NaiveDate::from_ymd_opt(1980, 12, 31).unwrap(),
        gender: FormGender::PreferNotToSay,
        consent_treatment: true,
        consent_data: true,
        consent_contact: true,
        ..RegistrationForm::default()
    }
}

#[test]
fn empty_form_reports_every_missing_field() {
    let errors = validate(&RegistrationForm::default()).unwrap_err();
    assert_eq!(
        errors,
        vec![
            FormError::FirstNameMissing,
            FormError::LastNameMissing,
            FormError::PatientIdMissing,
            FormError::TreatmentConsentMissing,
            FormError::DataConsentMissing,
            FormError::ContactConsentMissing,
        ]
    );
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(messages.contains(&"First name is required".to_string()));
    assert!(messages.contains(&"Contact consent is required".to_string()));
}

#[test]
fn whitespace_names_count_as_blank() {
    let form = RegistrationForm { first_name: "   ".into(), ..valid_form() };
    assert_eq!(validate(&form), Err(vec![FormError::FirstNameMissing]));
}

#[test]
fn wrong_prefix_is_its_own_error() {
    let form = RegistrationForm { patient_id: "PAT-0001".into(), ..valid_form() };
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors, vec![FormError::PatientIdPrefix]);
    assert_eq!(errors[0].to_string(), "Patient ID must start with 'THY-'");
}

#[test]
fn long_notes_are_rejected() {
    let form = RegistrationForm { notes: "x".repeat(1001), ..valid_form() };
    assert_eq!(validate(&form), Err(vec![FormError::NotesTooLong]));
    let form = RegistrationForm { notes: "x".repeat(1000), ..valid_form() };
    assert!(validate(&form).is_ok());
}

#[test]
fn submit_rejects_without_scoring() {
    let form = RegistrationForm { consent_data: false, ..valid_form() };
    assert_eq!(submit(&form, today()), Err(vec![FormError::DataConsentMissing]));
}

#[test]
fn submit_builds_outcome() {
    let form = RegistrationForm {
        family_history: true,
        autoimmune: true,
        symptoms: Symptoms { fatigue: Fatigue::Moderate, weight_change: WeightChange::Gain, ..Default::default() },
        tsh: OptionalLab { available: true, value: 2.5 },
        t4: OptionalLab { available: true, value: 9.5 },
        ..valid_form()
    };
    let out = submit(&form, today()).unwrap();
    assert_eq!(out.full_name, "Ada Lovelace");
    assert_eq!(out.patient_id, "THY-0042");
    // calendar-year difference
    assert_eq!(out.age_years, 44);
    assert_eq!(out.gender.label(), "Prefer not to say");
    assert_eq!(out.assessment.risk.score, 6);
    assert_eq!(out.assessment.risk.level, RiskLevel::Medium);
    assert_eq!(out.lab_lines, vec!["TSH: 2.5 mIU/L - NORMAL", "T4: 9.5 μg/dL"]);
    assert_eq!(out.recommendations()[0], "Schedule thyroid function tests");
}

#[test]
fn abnormal_tsh_adds_three_and_urgent_referral() {
    let form = RegistrationForm { tsh: OptionalLab { available: true, value: 7.0 }, ..valid_form() };
    let out = submit(&form, today()).unwrap();
    assert_eq!(out.assessment.risk.score, 3);
    assert!(out.assessment.lab_abnormal);
    assert_eq!(out.lab_lines, vec!["TSH: 7.0 mIU/L - ABNORMAL"]);
    assert_eq!(out.recommendations()[0], "Urgent endocrinology referral recommended");
}

#[test]
fn whole_lab_values_print_with_decimal_point() {
    let form = RegistrationForm {
        tsh: OptionalLab { available: true, value: 2.0 },
        t3: OptionalLab { available: true, value: 1.0 },
        t4: OptionalLab { available: true, value: 10.0 },
        ..valid_form()
    };
    let out = submit(&form, today()).unwrap();
    assert_eq!(out.lab_lines, vec!["TSH: 2.0 mIU/L - NORMAL", "T3: 1.0 ng/dL", "T4: 10.0 μg/dL"]);
}

#[test]
fn zero_tsh_counts_as_not_entered() {
    let form = RegistrationForm { tsh: OptionalLab { available: true, value: 0.0 }, ..valid_form() };
    let out = submit(&form, today()).unwrap();
    assert!(!out.assessment.lab_abnormal);
    assert_eq!(out.assessment.risk.score, 0);
}
