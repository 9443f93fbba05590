// src/classify/mod.rs
//! Rule-based classification.
//!
//! - `diagnosis`: TSH → Hyperthyroid / Normal / Hypothyroid.
//! - `lab`: risk score for the manual lab-entry panel (weights max 7, tiers ≥4 / ≥2).
//! - `screening`: risk score for the registration form (tiers ≥8 / ≥4).
//!
//! The two scoring rules use different inputs, weights and thresholds and are
//! kept as separate functions.

pub mod diagnosis;
pub mod lab;
pub mod screening;

use crate::model::RiskLevel;

pub use diagnosis::{is_abnormal_tsh, TSH_HIGH, TSH_LOW};
pub use lab::{assess_lab_entry, LabEntry, LabRiskFactors};
pub use screening::{assess_screening, ScreeningAssessment, ScreeningFactors};

/// Additive score with its tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u32,
    pub max: u32,
    pub level: RiskLevel,
}

impl RiskAssessment {
    /// `HIGH RISK`, `MEDIUM RISK`, ...
    pub fn banner(&self) -> String {
        format!("{} RISK", self.level)
    }
}

/// Sum of weights for the triggered conditions.
fn weighted_sum(rules: &[(bool, u32)]) -> u32 {
    rules.iter().filter(|(hit, _)| *hit).map(|(_, w)| *w).sum()
}

/// `score >= high` → High, `score >= medium` → Medium, else Low.
fn tier(score: u32, high: u32, medium: u32) -> RiskLevel {
    if score >= high {
        RiskLevel::High
    } else if score >= medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
