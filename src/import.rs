// src/import.rs
//! Uploaded lab results: parse any CSV into a `DataSet`, then summarize it.
//!
//! Cells are kept as strings. Column types are inferred the way a dataframe
//! loader would: all values integral → `int64`, all numeric (or missing) →
//! `float64`, anything else → `object`. An integer column with gaps becomes
//! `float64`.

use std::fs;
use std::path::Path;

use crate::classify::is_abnormal_tsh;
use crate::config::consts::{HORMONE_COLUMNS, PREVIEW_ROWS};
use crate::csv_io::parse_table;
use crate::data::DataSet;
use crate::error::ImportError;

/// Cell values counted as missing.
pub const NA_TOKENS: [&str; 7] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

pub fn is_missing(cell: &str) -> bool {
    NA_TOKENS.contains(&cell.trim())
}

pub fn import_csv_path(path: &Path) -> Result<DataSet, ImportError> {
    let bytes = fs::read(path)?;
    let ds = import_csv_bytes(&bytes)?;
    logf!("Import: {} rows × {} cols from {}", ds.row_count(), ds.column_count(), path.display());
    Ok(ds)
}

pub fn import_csv_bytes(bytes: &[u8]) -> Result<DataSet, ImportError> {
    let ds = parse_table(bytes, b',')?;
    if ds.header_count() == 0 {
        return Err(ImportError::Empty);
    }
    Ok(ds)
}

/* ---------------- Report ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Int64,
    Float64,
    Object,
}

impl ColumnType {
    pub fn label(self) -> &'static str {
        match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::Object => "object",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1); NaN below two values.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// `None` when the column has no numeric values.
    pub fn describe(column: &str, values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = if n < 2 {
            f64::NAN
        } else {
            (sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
        };
        Some(Self {
            column: s!(column),
            count: n,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.50),
            q75: quantile(&sorted, 0.75),
            max: sorted[n - 1],
        })
    }

    /// Rows for the statistics table: `count, mean, std, min, 25%, 50%, 75%, max`.
    pub fn labelled(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Linear interpolation between closest ranks over sorted values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[derive(Clone, Debug, PartialEq)]
pub struct MissingColumn {
    pub column: String,
    pub count: usize,
    /// Share of rows, rounded to two decimals.
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportReport {
    pub rows: usize,
    pub columns: usize,
    pub column_types: Vec<(String, ColumnType)>,
    pub hormone_columns: Vec<String>,
    pub hormone_stats: Vec<ColumnStats>,
    /// Present only when a numeric `TSH` column exists.
    pub abnormal_tsh: Option<usize>,
    /// Columns with at least one missing cell.
    pub missing: Vec<MissingColumn>,
    pub preview: DataSet,
}

impl ImportReport {
    pub fn from_dataset(ds: &DataSet) -> Self {
        let headers: Vec<String> = ds.headers.clone().unwrap_or_default();
        let rows = ds.row_count();

        let column_types: Vec<(String, ColumnType)> = headers
            .iter()
            .enumerate()
            .map(|(ci, h)| (h.clone(), infer_type(ds.column(ci))))
            .collect();

        let hormone_columns: Vec<String> = HORMONE_COLUMNS
            .iter()
            .filter(|c| headers.iter().any(|h| h.as_str() == **c))
            .map(|c| s!(*c))
            .collect();

        let numeric = |name: &str| -> Option<Vec<f64>> {
            let ci = ds.column_index(name)?;
            if column_types[ci].1 == ColumnType::Object {
                return None;
            }
            Some(ds.column(ci).filter(|c| !is_missing(c)).filter_map(|c| c.trim().parse().ok()).collect())
        };

        let hormone_stats = hormone_columns
            .iter()
            .filter_map(|c| numeric(c).and_then(|v| ColumnStats::describe(c, &v)))
            .collect();

        let abnormal_tsh = numeric("TSH").map(|v| v.into_iter().filter(|&t| is_abnormal_tsh(t)).count());

        let missing = headers
            .iter()
            .enumerate()
            .filter_map(|(ci, h)| {
                let count = ds.column(ci).filter(|c| is_missing(c)).count();
                (count > 0).then(|| MissingColumn {
                    column: h.clone(),
                    count,
                    percent: round2(count as f64 / rows as f64 * 100.0),
                })
            })
            .collect();

        Self {
            rows,
            columns: headers.len(),
            column_types,
            hormone_columns,
            hormone_stats,
            abnormal_tsh,
            missing,
            preview: ds.head(PREVIEW_ROWS),
        }
    }

    pub fn missing_total(&self) -> usize {
        self.missing.iter().map(|m| m.count).sum()
    }
}

fn infer_type<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut all_int = true;
    let mut any_missing = false;
    let mut any_value = false;
    for c in cells {
        if is_missing(c) {
            any_missing = true;
            continue;
        }
        any_value = true;
        let c = c.trim();
        if c.parse::<i64>().is_ok() {
            continue;
        }
        if c.parse::<f64>().is_ok() {
            all_int = false;
            continue;
        }
        return ColumnType::Object;
    }
    match (any_value, any_missing) {
        (false, false) => ColumnType::Object,
        (true, false) if all_int => ColumnType::Int64,
        _ => ColumnType::Float64,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
