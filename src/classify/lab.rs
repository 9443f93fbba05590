// src/classify/lab.rs
//! Lab-entry panel: live diagnosis + risk score from the current input snapshot.

use std::ops::RangeInclusive;

use crate::model::{Diagnosis, Gender};

use super::{diagnosis::is_abnormal_tsh, tier, weighted_sum, RiskAssessment};

const W_ABNORMAL_TSH: u32 = 2;
const W_GOITRE: u32 = 1;
const W_TUMOR: u32 = 2;
const W_AGE_OVER_60: u32 = 1;
const W_PSYCH: u32 = 1;

pub const LAB_SCORE_MAX: u32 = W_ABNORMAL_TSH + W_GOITRE + W_TUMOR + W_AGE_OVER_60 + W_PSYCH;

/// Accepted manual-entry input; the lab panel's widgets are bounded to these.
pub const TSH_INPUT: RangeInclusive<f64> = 0.1..=20.0;
pub const AGE_INPUT: RangeInclusive<u32> = 1..=120;

const HIGH_AT: u32 = 4;
const MEDIUM_AT: u32 = 2;

/// Inputs the lab-entry score looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabRiskFactors {
    pub tsh: f64,
    pub goitre: bool,
    pub tumor_history: bool,
    pub age: u32,
    pub psych_symptoms: bool,
}

pub fn assess_lab_entry(f: &LabRiskFactors) -> RiskAssessment {
    let score = weighted_sum(&[
        (is_abnormal_tsh(f.tsh), W_ABNORMAL_TSH),
        (f.goitre, W_GOITRE),
        (f.tumor_history, W_TUMOR),
        (f.age > 60, W_AGE_OVER_60),
        (f.psych_symptoms, W_PSYCH),
    ]);
    RiskAssessment { score, max: LAB_SCORE_MAX, level: tier(score, HIGH_AT, MEDIUM_AT) }
}

/// Full manual-entry snapshot. Widget ranges bound the values.
#[derive(Clone, Debug, PartialEq)]
pub struct LabEntry {
    pub patient_id: String,
    pub age: u32,
    pub gender: Gender,
    pub tsh: f64,
    pub t3: f64,
    pub t4: f64,
    pub t4u: f64,
    pub fti: f64,
    pub goitre: bool,
    pub tumor_history: bool,
    pub hypopituitary: bool,
    pub psych_symptoms: bool,
}

impl Default for LabEntry {
    fn default() -> Self {
        Self {
            patient_id: s!("THY-0001"),
            age: 45,
            gender: Gender::Female,
            tsh: 2.5,
            t3: 1.8,
            t4: 9.5,
            t4u: 1.0,
            fti: 9.5,
            goitre: false,
            tumor_history: false,
            hypopituitary: false,
            psych_symptoms: false,
        }
    }
}

/// (test, unit, reference range)
const PANEL: [(&str, &str, &str); 5] = [
    ("TSH", "mIU/L", "0.4-4.0"),
    ("T3", "ng/dL", "0.8-2.8"),
    ("T4", "μg/dL", "4.5-12.0"),
    ("T4U", "ratio", "0.8-1.2"),
    ("FTI", "index", "4.5-12.0"),
];

pub const LAB_TABLE_HEADERS: [&str; 4] = ["Test", "Value", "Unit", "Reference"];

impl LabEntry {
    pub fn diagnosis(&self) -> Diagnosis {
        Diagnosis::from_tsh(self.tsh)
    }

    pub fn risk_factors(&self) -> LabRiskFactors {
        LabRiskFactors {
            tsh: self.tsh,
            goitre: self.goitre,
            tumor_history: self.tumor_history,
            age: self.age,
            psych_symptoms: self.psych_symptoms,
        }
    }

    pub fn assess(&self) -> RiskAssessment {
        assess_lab_entry(&self.risk_factors())
    }

    /// Follow-up hints keyed on the diagnosis only.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self.diagnosis() {
            Diagnosis::Hyperthyroid => &[
                "Recommend endocrinology referral",
                "Consider anti-thyroid medication",
                "Monitor cardiovascular function",
            ],
            Diagnosis::Hypothyroid => &[
                "Consider thyroid hormone replacement",
                "Recheck levels in 6-8 weeks",
                "Monitor for hypothyroid symptoms",
            ],
            Diagnosis::Normal => &[
                "Continue routine monitoring",
                "Annual thyroid screening",
                "Maintain healthy lifestyle",
            ],
        }
    }

    /// Five-row lab result table.
    pub fn result_rows(&self) -> Vec<Vec<String>> {
        let values = [self.tsh, self.t3, self.t4, self.t4u, self.fti];
        PANEL
            .iter()
            .zip(values)
            .map(|((test, unit, reference), v)| row![*test, format!("{v:.2}"), *unit, *reference])
            .collect()
    }
}
