// src/data.rs
//
// String tables and index views over them.
//
// - DataSet: untyped headers + rows. Imported CSV files, the scraped table and
//            the patient table (for display) all flow through this shape.
// - TableView: positions of kept rows in a DataSet; filtering never copies rows.

use crate::model::{PatientRecord, PATIENT_HEADERS};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    /// Widest of header row and data rows.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).chain(std::iter::once(self.header_count())).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of the column whose header equals `name` (exact match).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }

    /// Cells of one column; short rows yield `""`.
    pub fn column(&self, ci: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |r| r.get(ci).map(String::as_str).unwrap_or(""))
    }

    pub fn head(&self, n: usize) -> DataSet {
        DataSet { headers: self.headers.clone(), rows: self.rows.iter().take(n).cloned().collect() }
    }

    /// Display table for generated patients.
    pub fn from_patients(records: &[PatientRecord]) -> Self {
        DataSet {
            headers: headers!(PATIENT_HEADERS),
            rows: records.iter().map(PatientRecord::display_row).collect(),
        }
    }
}

/// Zero-copy filtered view.
#[derive(Clone, Debug)]
pub struct TableView<'a> {
    /// Positions of kept rows in the raw dataset
    pub row_ix: Vec<usize>,
    raw: &'a DataSet,
}

impl<'a> TableView<'a> {
    pub fn all(raw: &'a DataSet) -> Self {
        Self { row_ix: (0..raw.rows.len()).collect(), raw }
    }

    pub fn from_indices(raw: &'a DataSet, row_ix: Vec<usize>) -> Self {
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    pub fn headers(&self) -> &Option<Vec<String>> { &self.raw.headers }

    /// Borrow a single row by projected index (no cloning).
    pub fn row(&self, i: usize) -> Option<&[String]> {
        self.row_ix.get(i).and_then(|&ix| self.raw.rows.get(ix).map(|r| r.as_slice()))
    }
}
