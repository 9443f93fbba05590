// src/analysis.rs
//! Cohort filtering, headline metrics and the aggregates behind the charts.
//!
//! Everything here takes the full record slice plus a list of row positions
//! (`row_ix`) so that filtered views never copy records.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Diagnosis, Gender, PatientRecord, RiskLevel};

/* ---------------- Filter ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientFilter {
    /// Inclusive
    pub age_min: u32,
    /// Inclusive
    pub age_max: u32,
    pub genders: BTreeSet<Gender>,
    pub diagnoses: BTreeSet<Diagnosis>,
    pub risk_levels: BTreeSet<RiskLevel>,
}

impl PatientFilter {
    /// Selects everything in `records`: observed age range, observed categories.
    pub fn spanning(records: &[PatientRecord]) -> Self {
        let age_min = records.iter().map(|r| r.age).min().unwrap_or(0);
        let age_max = records.iter().map(|r| r.age).max().unwrap_or(0);
        Self {
            age_min,
            age_max,
            genders: records.iter().map(|r| r.gender).collect(),
            diagnoses: records.iter().map(|r| r.diagnosis).collect(),
            risk_levels: records.iter().map(|r| r.risk_level).collect(),
        }
    }

    pub fn matches(&self, r: &PatientRecord) -> bool {
        r.age >= self.age_min
            && r.age <= self.age_max
            && self.genders.contains(&r.gender)
            && self.diagnoses.contains(&r.diagnosis)
            && self.risk_levels.contains(&r.risk_level)
    }
}

pub fn filter_indices(records: &[PatientRecord], filter: &PatientFilter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| filter.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/* ---------------- Headline metrics ---------------- */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CohortSummary {
    pub total: usize,
    /// `None` for an empty selection.
    pub avg_tsh: Option<f64>,
    /// Diagnosis other than Normal.
    pub abnormal: usize,
    /// Sampled risk level High.
    pub high_risk: usize,
}

pub fn summarize(records: &[PatientRecord], row_ix: &[usize]) -> CohortSummary {
    let selected: Vec<&PatientRecord> = select(records, row_ix).collect();
    let total = selected.len();
    let avg_tsh = (total > 0).then(|| selected.iter().map(|r| r.tsh).sum::<f64>() / total as f64);
    CohortSummary {
        total,
        avg_tsh,
        abnormal: selected.iter().filter(|r| r.diagnosis.is_abnormal()).count(),
        high_risk: selected.iter().filter(|r| r.risk_level == RiskLevel::High).count(),
    }
}

fn select<'a>(records: &'a [PatientRecord], row_ix: &'a [usize]) -> impl Iterator<Item = &'a PatientRecord> + 'a {
    row_ix.iter().filter_map(move |&ix| records.get(ix))
}

/* ---------------- TSH distribution ---------------- */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width bins over the selection's TSH range. The last bin is closed.
pub fn tsh_histogram(records: &[PatientRecord], row_ix: &[usize], bins: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = select(records, row_ix).map(|r| r.tsh).collect();
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if hi > lo { (hi - lo) / bins as f64 } else { 1.0 };

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|b| HistogramBin { lo: lo + b as f64 * width, hi: lo + (b + 1) as f64 * width, count: 0 })
        .collect();
    for v in values {
        let b = (((v - lo) / width) as usize).min(bins - 1);
        out[b].count += 1;
    }
    out
}

/* ---------------- Correlation ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Correlation {
    #[default]
    Pearson,
    Spearman,
}

impl Correlation {
    pub fn label(self) -> &'static str {
        match self { Correlation::Pearson => "pearson", Correlation::Spearman => "spearman" }
    }
}

pub const CORRELATION_FIELDS: [&str; 6] = ["TSH", "T3", "T4", "T4U", "FTI", "Age"];

fn correlation_columns(records: &[PatientRecord], row_ix: &[usize]) -> [Vec<f64>; 6] {
    let mut cols: [Vec<f64>; 6] = Default::default();
    for r in select(records, row_ix) {
        for (c, v) in cols.iter_mut().zip([r.tsh, r.t3, r.t4, r.t4u, r.fti, r.age as f64]) {
            c.push(v);
        }
    }
    cols
}

/// 6×6 matrix in `CORRELATION_FIELDS` order. Undefined entries (constant
/// column, fewer than two rows) are NaN.
pub fn correlation_matrix(records: &[PatientRecord], row_ix: &[usize], method: Correlation) -> Vec<Vec<f64>> {
    let mut cols = correlation_columns(records, row_ix);
    if method == Correlation::Spearman {
        for c in cols.iter_mut() {
            *c = ranks(c);
        }
    }
    cols.iter()
        .map(|a| cols.iter().map(|b| pearson(a, b)).collect())
        .collect()
}

pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n < 2 {
        return f64::NAN;
    }
    let mean_a = a[..n].iter().sum::<f64>() / n as f64;
    let mean_b = b[..n].iter().sum::<f64>() / n as f64;
    let (mut cov, mut var_a, mut var_b) = (0.0, 0.0, 0.0);
    for i in 0..n {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    if var_a == 0.0 || var_b == 0.0 {
        return f64::NAN;
    }
    cov / (var_a.sqrt() * var_b.sqrt())
}

/// 1-based ranks; ties share their average rank.
pub fn ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    let mut out = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let avg = (i + j) as f64 / 2.0 + 1.0;
        for &k in &order[i..=j] {
            out[k] = avg;
        }
        i = j + 1;
    }
    out
}

/* ---------------- Cross tabulations ---------------- */

fn crosstab<A, B>(
    records: &[PatientRecord],
    row_ix: &[usize],
    fa: impl Fn(&PatientRecord) -> A,
    fb: impl Fn(&PatientRecord) -> B,
) -> BTreeMap<(A, B), usize>
where
    A: Ord,
    B: Ord,
{
    let mut out = BTreeMap::new();
    for r in select(records, row_ix) {
        *out.entry((fa(r), fb(r))).or_insert(0) += 1;
    }
    out
}

/// Patient counts per (risk level, diagnosis); absent pairs are omitted.
pub fn risk_diagnosis_counts(records: &[PatientRecord], row_ix: &[usize]) -> BTreeMap<(RiskLevel, Diagnosis), usize> {
    crosstab(records, row_ix, |r| r.risk_level, |r| r.diagnosis)
}

pub fn gender_diagnosis_counts(records: &[PatientRecord], row_ix: &[usize]) -> BTreeMap<(Gender, Diagnosis), usize> {
    crosstab(records, row_ix, |r| r.gender, |r| r.diagnosis)
}

/// Decade the age falls in: 18 → 10, 45 → 40, 80 → 80.
pub fn age_band(age: u32) -> u32 {
    age / 10 * 10
}

pub fn age_band_diagnosis_counts(records: &[PatientRecord], row_ix: &[usize]) -> BTreeMap<(u32, Diagnosis), usize> {
    crosstab(records, row_ix, |r| age_band(r.age), |r| r.diagnosis)
}
