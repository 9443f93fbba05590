// src/classify/screening.rs
//! Registration-form screening score. Separate weight table and thresholds
//! from the lab-entry rule in `lab.rs`.

use crate::model::RiskLevel;

use super::{diagnosis::is_abnormal_tsh, tier, weighted_sum, RiskAssessment};

const W_FAMILY_HISTORY: u32 = 2;
const W_PREVIOUS_THYROID: u32 = 3;
const W_AUTOIMMUNE: u32 = 2;
const W_SMOKING: u32 = 1;
const W_RADIATION: u32 = 2;
const W_PREGNANCY: u32 = 1;
const W_SYMPTOM: u32 = 1;
const W_ABNORMAL_TSH: u32 = 3;

pub const SCREENING_SCORE_MAX: u32 = W_FAMILY_HISTORY
    + W_PREVIOUS_THYROID
    + W_AUTOIMMUNE
    + W_SMOKING
    + W_RADIATION
    + W_PREGNANCY
    + 4 * W_SYMPTOM
    + W_ABNORMAL_TSH;

const HIGH_AT: u32 = 8;
const MEDIUM_AT: u32 = 4;

/* ---------------- Symptoms ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Fatigue {
    #[default]
    No,
    Mild,
    Moderate,
    Severe,
}

impl Fatigue {
    pub const ALL: [Fatigue; 4] = [Fatigue::No, Fatigue::Mild, Fatigue::Moderate, Fatigue::Severe];

    pub fn label(self) -> &'static str {
        match self {
            Fatigue::No => "No",
            Fatigue::Mild => "Mild",
            Fatigue::Moderate => "Moderate",
            Fatigue::Severe => "Severe",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WeightChange {
    #[default]
    No,
    Gain,
    Loss,
}

impl WeightChange {
    pub const ALL: [WeightChange; 3] = [WeightChange::No, WeightChange::Gain, WeightChange::Loss];

    pub fn label(self) -> &'static str {
        match self {
            WeightChange::No => "No",
            WeightChange::Gain => "Weight gain",
            WeightChange::Loss => "Weight loss",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeartRate {
    #[default]
    No,
    Slow,
    Fast,
}

impl HeartRate {
    pub const ALL: [HeartRate; 3] = [HeartRate::No, HeartRate::Slow, HeartRate::Fast];

    pub fn label(self) -> &'static str {
        match self {
            HeartRate::No => "No",
            HeartRate::Slow => "Slow heart rate",
            HeartRate::Fast => "Fast heart rate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TemperatureSensitivity {
    #[default]
    No,
    Cold,
    Heat,
}

impl TemperatureSensitivity {
    pub const ALL: [TemperatureSensitivity; 3] =
        [TemperatureSensitivity::No, TemperatureSensitivity::Cold, TemperatureSensitivity::Heat];

    pub fn label(self) -> &'static str {
        match self {
            TemperatureSensitivity::No => "No",
            TemperatureSensitivity::Cold => "Cold sensitivity",
            TemperatureSensitivity::Heat => "Heat sensitivity",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Symptoms {
    pub fatigue: Fatigue,
    pub weight_change: WeightChange,
    pub heart_rate: HeartRate,
    pub temperature: TemperatureSensitivity,
}

impl Symptoms {
    /// Number of symptoms that count toward the score (fatigue only when moderate or severe).
    pub fn scored(&self) -> u32 {
        [
            matches!(self.fatigue, Fatigue::Moderate | Fatigue::Severe),
            self.weight_change != WeightChange::No,
            self.heart_rate != HeartRate::No,
            self.temperature != TemperatureSensitivity::No,
        ]
        .into_iter()
        .filter(|hit| *hit)
        .count() as u32
    }
}

/* ---------------- Score ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScreeningFactors {
    pub family_history: bool,
    pub previous_thyroid: bool,
    pub autoimmune: bool,
    pub smoking: bool,
    pub radiation: bool,
    pub pregnancy: bool,
    pub symptoms: Symptoms,
    /// `None` when no TSH result was entered.
    pub tsh: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreeningAssessment {
    pub risk: RiskAssessment,
    /// A supplied TSH value fell outside 0.4..=4.0.
    pub lab_abnormal: bool,
}

pub fn assess_screening(f: &ScreeningFactors) -> ScreeningAssessment {
    let lab_abnormal = f.tsh.is_some_and(is_abnormal_tsh);
    let score = weighted_sum(&[
        (f.family_history, W_FAMILY_HISTORY),
        (f.previous_thyroid, W_PREVIOUS_THYROID),
        (f.autoimmune, W_AUTOIMMUNE),
        (f.smoking, W_SMOKING),
        (f.radiation, W_RADIATION),
        (f.pregnancy, W_PREGNANCY),
        (lab_abnormal, W_ABNORMAL_TSH),
    ]) + f.symptoms.scored() * W_SYMPTOM;

    ScreeningAssessment {
        risk: RiskAssessment { score, max: SCREENING_SCORE_MAX, level: tier(score, HIGH_AT, MEDIUM_AT) },
        lab_abnormal,
    }
}

impl ScreeningAssessment {
    /// An abnormal lab result escalates to urgent regardless of the score.
    pub fn recommendations(&self) -> &'static [&'static str] {
        if self.risk.level == RiskLevel::High || self.lab_abnormal {
            &["Urgent endocrinology referral recommended", "Schedule comprehensive thyroid panel"]
        } else if self.risk.level == RiskLevel::Medium {
            &["Schedule thyroid function tests", "Follow-up in 3-6 months"]
        } else {
            &["Routine annual screening", "Maintain healthy lifestyle"]
        }
    }
}
