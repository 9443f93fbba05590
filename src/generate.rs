// src/generate.rs
//! Synthetic patient table.
//!
//! Every numeric column is drawn from a named distribution and clamped to a
//! closed interval (Age is truncated to an integer first). Categorical columns
//! use literal class probabilities that must sum to 1. Columns are sampled one
//! after another in table order from a single seeded `StdRng`, so a fixed seed
//! and count always give the same table.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{LogNormal, Normal};

use crate::config::consts::PATIENT_ID_PREFIX;
use crate::config::options::GeneratorOptions;
use crate::error::GenerateError;
use crate::model::{Diagnosis, Gender, PatientRecord, RiskLevel, YesNo};

const WEIGHT_TOLERANCE: f64 = 1e-9;

/* ---------------- Numeric columns ---------------- */

#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Normal { mean: f64, std_dev: f64 },
    /// Parameters of the underlying normal (numpy's `lognormal(mean, sigma)`).
    LogNormal { mu: f64, sigma: f64 },
}

#[derive(Clone, Copy, Debug)]
pub struct NumericField {
    pub name: &'static str,
    pub shape: Shape,
    pub lo: f64,
    pub hi: f64,
    /// Truncate toward zero before clamping.
    pub integral: bool,
}

impl NumericField {
    pub fn sample_n(&self, rng: &mut StdRng, n: usize) -> Result<Vec<f64>, GenerateError> {
        let err = |source| GenerateError::Distribution { field: self.name, source };
        let raw: Vec<f64> = match self.shape {
            Shape::Normal { mean, std_dev } => {
                let d = Normal::new(mean, std_dev).map_err(err)?;
                (0..n).map(|_| d.sample(&mut *rng)).collect()
            }
            Shape::LogNormal { mu, sigma } => {
                let d = LogNormal::new(mu, sigma).map_err(err)?;
                (0..n).map(|_| d.sample(&mut *rng)).collect()
            }
        };
        Ok(raw.into_iter().map(|x| self.finish(x)).collect())
    }

    fn finish(&self, x: f64) -> f64 {
        let x = if self.integral { x.trunc() } else { x };
        x.clamp(self.lo, self.hi)
    }
}

pub const AGE: NumericField = NumericField {
    name: "Age",
    shape: Shape::Normal { mean: 45.0, std_dev: 15.0 },
    lo: 18.0,
    hi: 80.0,
    integral: true,
};

pub const TSH: NumericField = NumericField {
    name: "TSH",
    shape: Shape::LogNormal { mu: 0.5, sigma: 0.8 },
    lo: 0.1,
    hi: 50.0,
    integral: false,
};

pub const T3: NumericField = NumericField {
    name: "T3",
    shape: Shape::Normal { mean: 1.8, std_dev: 0.4 },
    lo: 0.5,
    hi: 4.0,
    integral: false,
};

pub const T4: NumericField = NumericField {
    name: "T4",
    shape: Shape::Normal { mean: 9.5, std_dev: 2.0 },
    lo: 4.0,
    hi: 18.0,
    integral: false,
};

pub const T4U: NumericField = NumericField {
    name: "T4U",
    shape: Shape::Normal { mean: 1.0, std_dev: 0.15 },
    lo: 0.6,
    hi: 1.5,
    integral: false,
};

pub const FTI: NumericField = NumericField {
    name: "FTI",
    shape: Shape::Normal { mean: 9.5, std_dev: 2.2 },
    lo: 4.0,
    hi: 18.0,
    integral: false,
};

/* ---------------- Categorical columns ---------------- */

#[derive(Clone, Copy, Debug)]
pub struct Categorical<T: 'static> {
    pub name: &'static str,
    pub classes: &'static [(T, f64)],
}

impl<T: Copy + 'static> Categorical<T> {
    pub fn sample_n(&self, rng: &mut StdRng, n: usize) -> Result<Vec<T>, GenerateError> {
        let sum: f64 = self.classes.iter().map(|(_, p)| p).sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(GenerateError::WeightSum { field: self.name, sum });
        }
        let index = WeightedIndex::new(self.classes.iter().map(|(_, p)| *p))
            .map_err(|source| GenerateError::Weights { field: self.name, source })?;
        Ok((0..n).map(|_| self.classes[index.sample(&mut *rng)].0).collect())
    }
}

pub const GENDER: Categorical<Gender> = Categorical {
    name: "Gender",
    classes: &[(Gender::Male, 0.3), (Gender::Female, 0.7)],
};

pub const GOITRE: Categorical<YesNo> = Categorical {
    name: "Goitre",
    classes: &[(YesNo::Yes, 0.2), (YesNo::No, 0.8)],
};

pub const TUMOR: Categorical<YesNo> = Categorical {
    name: "Tumor",
    classes: &[(YesNo::Yes, 0.1), (YesNo::No, 0.9)],
};

pub const HYPOPITUITARY: Categorical<YesNo> = Categorical {
    name: "Hypopituitary",
    classes: &[(YesNo::Yes, 0.05), (YesNo::No, 0.95)],
};

pub const PSYCH: Categorical<YesNo> = Categorical {
    name: "Psych",
    classes: &[(YesNo::Yes, 0.15), (YesNo::No, 0.85)],
};

/// Sampled independently; not reconciled with diagnosis or any risk score.
pub const RISK_LEVEL: Categorical<RiskLevel> = Categorical {
    name: "Risk_Level",
    classes: &[(RiskLevel::Low, 0.6), (RiskLevel::Medium, 0.3), (RiskLevel::High, 0.1)],
};

/* ---------------- Table ---------------- */

/// `THY-0001`, `THY-0002`, ...
pub fn patient_id(n: usize) -> String {
    format!("{PATIENT_ID_PREFIX}{n:04}")
}

pub fn generate(opts: &GeneratorOptions) -> Result<Vec<PatientRecord>, GenerateError> {
    let n = opts.count;
    let mut rng = StdRng::seed_from_u64(opts.seed);

    let age = AGE.sample_n(&mut rng, n)?;
    let tsh = TSH.sample_n(&mut rng, n)?;
    let t3 = T3.sample_n(&mut rng, n)?;
    let t4 = T4.sample_n(&mut rng, n)?;
    let t4u = T4U.sample_n(&mut rng, n)?;
    let fti = FTI.sample_n(&mut rng, n)?;
    let gender = GENDER.sample_n(&mut rng, n)?;
    let goitre = GOITRE.sample_n(&mut rng, n)?;
    let tumor = TUMOR.sample_n(&mut rng, n)?;
    let hypopituitary = HYPOPITUITARY.sample_n(&mut rng, n)?;
    let psych = PSYCH.sample_n(&mut rng, n)?;
    let risk_level = RISK_LEVEL.sample_n(&mut rng, n)?;

    let records = (0..n)
        .map(|i| PatientRecord {
            patient_id: patient_id(i + 1),
            age: age[i] as u32,
            tsh: tsh[i],
            t3: t3[i],
            t4: t4[i],
            t4u: t4u[i],
            fti: fti[i],
            gender: gender[i],
            goitre: goitre[i],
            tumor: tumor[i],
            hypopituitary: hypopituitary[i],
            psych: psych[i],
            diagnosis: Diagnosis::from_tsh(tsh[i]),
            risk_level: risk_level[i],
        })
        .collect();
    Ok(records)
}
