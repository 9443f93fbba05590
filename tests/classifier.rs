// tests/classifier.rs
//
// Diagnosis thresholds and the two additive risk scores.

use proptest::prelude::*;

use thyro_dash::classify::lab::LAB_SCORE_MAX;
use thyro_dash::classify::screening::{Fatigue, HeartRate, Symptoms, SCREENING_SCORE_MAX};
use thyro_dash::classify::{assess_lab_entry, assess_screening, is_abnormal_tsh, LabEntry, LabRiskFactors, ScreeningFactors};
use thyro_dash::model::{Diagnosis, RiskLevel};

fn lab(tsh: f64) -> LabRiskFactors {
    LabRiskFactors { tsh, goitre: false, tumor_history: false, age: 45, psych_symptoms: false }
}

#[test]
fn diagnosis_boundaries_are_strict() {
    assert_eq!(Diagnosis::from_tsh(0.39), Diagnosis::Hyperthyroid);
    assert_eq!(Diagnosis::from_tsh(0.4), Diagnosis::Normal);
    assert_eq!(Diagnosis::from_tsh(4.0), Diagnosis::Normal);
    assert_eq!(Diagnosis::from_tsh(4.01), Diagnosis::Hypothyroid);
    assert_eq!(Diagnosis::Normal.banner(), "NORMAL RANGE");
    assert_eq!(Diagnosis::Hypothyroid.status(), "ABNORMAL");
}

#[test]
fn lab_abnormal_tsh_with_tumor_is_high() {
    let r = assess_lab_entry(&LabRiskFactors { tumor_history: true, ..lab(5.0) });
    assert_eq!(r.score, 4);
    assert_eq!(r.level, RiskLevel::High);
    assert_eq!(r.banner(), "HIGH RISK");
}

#[test]
fn lab_medium_and_low_tiers() {
    let r = assess_lab_entry(&LabRiskFactors { goitre: true, age: 61, ..lab(2.5) });
    assert_eq!((r.score, r.level), (2, RiskLevel::Medium));

    let r = assess_lab_entry(&LabRiskFactors { psych_symptoms: true, age: 60, ..lab(2.5) });
    assert_eq!((r.score, r.level), (1, RiskLevel::Low));
}

#[test]
fn lab_everything_hits_max() {
    let r = assess_lab_entry(&LabRiskFactors { tsh: 0.2, goitre: true, tumor_history: true, age: 70, psych_symptoms: true });
    assert_eq!(r.score, LAB_SCORE_MAX);
    assert_eq!(LAB_SCORE_MAX, 7);
}

#[test]
fn lab_entry_recommendations_follow_diagnosis() {
    let entry = LabEntry { tsh: 6.0, ..LabEntry::default() };
    assert_eq!(entry.diagnosis(), Diagnosis::Hypothyroid);
    assert_eq!(entry.recommendations()[0], "Consider thyroid hormone replacement");
    let rows = entry.result_rows();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], vec!["TSH", "6.00", "mIU/L", "0.4-4.0"]);
}

#[test]
fn screening_tiers() {
    let high = assess_screening(&ScreeningFactors {
        previous_thyroid: true,
        family_history: true,
        autoimmune: true,
        smoking: true,
        ..Default::default()
    });
    assert_eq!((high.risk.score, high.risk.level), (8, RiskLevel::High));

    let medium = assess_screening(&ScreeningFactors { family_history: true, autoimmune: true, ..Default::default() });
    assert_eq!((medium.risk.score, medium.risk.level), (4, RiskLevel::Medium));

    let low = assess_screening(&ScreeningFactors { previous_thyroid: true, ..Default::default() });
    assert_eq!((low.risk.score, low.risk.level), (3, RiskLevel::Low));
    assert_eq!(low.recommendations()[0], "Routine annual screening");
}

#[test]
fn screening_symptoms_count_once_each() {
    let symptoms = Symptoms { fatigue: Fatigue::Mild, heart_rate: HeartRate::Fast, ..Default::default() };
    assert_eq!(symptoms.scored(), 1);
    let symptoms = Symptoms { fatigue: Fatigue::Severe, ..symptoms };
    assert_eq!(symptoms.scored(), 2);
}

#[test]
fn abnormal_lab_escalates_recommendations() {
    let a = assess_screening(&ScreeningFactors { tsh: Some(6.2), ..Default::default() });
    assert!(a.lab_abnormal);
    assert_eq!(a.risk.score, 3);
    assert_eq!(a.risk.level, RiskLevel::Low);
    assert_eq!(a.recommendations()[0], "Urgent endocrinology referral recommended");
    assert_eq!(a.risk.max, SCREENING_SCORE_MAX);
}

proptest! {
    #[test]
    fn lab_score_is_bounded_and_tiered(
        tsh in 0.1f64..50.0,
        goitre: bool,
        tumor: bool,
        age in 1u32..=120,
        psych: bool,
    ) {
        let r = assess_lab_entry(&LabRiskFactors { tsh, goitre, tumor_history: tumor, age, psych_symptoms: psych });
        prop_assert!(r.score <= LAB_SCORE_MAX);
        let expected = if r.score >= 4 { RiskLevel::High } else if r.score >= 2 { RiskLevel::Medium } else { RiskLevel::Low };
        prop_assert_eq!(r.level, expected);
        prop_assert_eq!(is_abnormal_tsh(tsh), Diagnosis::from_tsh(tsh) != Diagnosis::Normal);
    }

    #[test]
    fn screening_score_never_exceeds_max(
        flags in proptest::collection::vec(any::<bool>(), 6),
        tsh in proptest::option::of(0.1f64..50.0),
    ) {
        let a = assess_screening(&ScreeningFactors {
            family_history: flags[0],
            previous_thyroid: flags[1],
            autoimmune: flags[2],
            smoking: flags[3],
            radiation: flags[4],
            pregnancy: flags[5],
            symptoms: Symptoms::default(),
            tsh,
        });
        prop_assert!(a.risk.score <= SCREENING_SCORE_MAX);
    }
}
