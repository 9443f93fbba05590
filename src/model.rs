// src/model.rs
//! Domain types shared by the generator, classifiers, analysis and export.
//!
//! `PatientRecord` serializes with the dashboard's column names, so the CSV
//! header row is `PatientID,Age,TSH,T3,T4,T4U,FTI,Gender,Goitre,...`.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const PATIENT_HEADERS: [&str; 14] = [
    "PatientID", "Age", "TSH", "T3", "T4", "T4U", "FTI",
    "Gender", "Goitre", "Tumor", "Hypopituitary", "Psych",
    "Diagnosis", "Risk_Level",
];

/* ---------------- Categorical fields ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self { Gender::Male => "Male", Gender::Female => "Female" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn label(self) -> &'static str {
        match self { YesNo::Yes => "Yes", YesNo::No => "No" }
    }
}

/// Three-way label derived from TSH alone (see `classify::diagnosis`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    Hyperthyroid,
    Normal,
    Hypothyroid,
}

impl Diagnosis {
    pub const ALL: [Diagnosis; 3] = [Diagnosis::Hyperthyroid, Diagnosis::Normal, Diagnosis::Hypothyroid];

    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::Hyperthyroid => "Hyperthyroid",
            Diagnosis::Normal => "Normal",
            Diagnosis::Hypothyroid => "Hypothyroid",
        }
    }
}

/// LOW / MEDIUM / HIGH. Sampled per record in the generator, computed by the
/// two scoring rules in `classify`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn label(self) -> &'static str {
        match self { RiskLevel::Low => "Low", RiskLevel::Medium => "Medium", RiskLevel::High => "High" }
    }
}

/// Banner form used by the assessment panels: `LOW`, `MEDIUM`, `HIGH`.
impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        })
    }
}

/* ---------------- Record ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(rename = "PatientID")]
    pub patient_id: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "TSH")]
    pub tsh: f64,
    #[serde(rename = "T3")]
    pub t3: f64,
    #[serde(rename = "T4")]
    pub t4: f64,
    #[serde(rename = "T4U")]
    pub t4u: f64,
    #[serde(rename = "FTI")]
    pub fti: f64,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Goitre")]
    pub goitre: YesNo,
    #[serde(rename = "Tumor")]
    pub tumor: YesNo,
    #[serde(rename = "Hypopituitary")]
    pub hypopituitary: YesNo,
    #[serde(rename = "Psych")]
    pub psych: YesNo,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: Diagnosis,
    #[serde(rename = "Risk_Level")]
    pub risk_level: RiskLevel,
}

impl PatientRecord {
    /// Display row for the table view (two decimals for hormone values).
    pub fn display_row(&self) -> Vec<String> {
        row![
            self.patient_id.as_str(),
            self.age.to_string(),
            format!("{:.2}", self.tsh),
            format!("{:.2}", self.t3),
            format!("{:.2}", self.t4),
            format!("{:.2}", self.t4u),
            format!("{:.2}", self.fti),
            self.gender.label(),
            self.goitre.label(),
            self.tumor.label(),
            self.hypopituitary.label(),
            self.psych.label(),
            self.diagnosis.label(),
            self.risk_level.label(),
        ]
    }
}
