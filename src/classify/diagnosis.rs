// src/classify/diagnosis.rs
use crate::model::Diagnosis;

/// Below this TSH (strict) → Hyperthyroid.
pub const TSH_LOW: f64 = 0.4;
/// Above this TSH (strict) → Hypothyroid.
pub const TSH_HIGH: f64 = 4.0;

impl Diagnosis {
    /// Both thresholds are strict, so exactly 0.4 and exactly 4.0 are Normal.
    pub fn from_tsh(tsh: f64) -> Self {
        if tsh < TSH_LOW {
            Diagnosis::Hyperthyroid
        } else if tsh > TSH_HIGH {
            Diagnosis::Hypothyroid
        } else {
            Diagnosis::Normal
        }
    }

    pub fn is_abnormal(self) -> bool {
        self != Diagnosis::Normal
    }

    /// Lab-entry banner text.
    pub fn banner(self) -> &'static str {
        match self {
            Diagnosis::Hyperthyroid => "HYPERTHYROID",
            Diagnosis::Hypothyroid => "HYPOTHYROID",
            Diagnosis::Normal => "NORMAL RANGE",
        }
    }

    pub fn status(self) -> &'static str {
        if self.is_abnormal() { "ABNORMAL" } else { "NORMAL" }
    }
}

pub fn is_abnormal_tsh(tsh: f64) -> bool {
    Diagnosis::from_tsh(tsh).is_abnormal()
}
