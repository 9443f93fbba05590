// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::config::options::ExportOptions;
use crate::csv_io::{write_patients, write_table};
use crate::data::DataSet;
use crate::error::ExportError;
use crate::model::PatientRecord;

/// Write the filtered patient view to `thyroid_patients_<timestamp>.<ext>`.
/// `row_ix` are positions into `records` (see `analysis::filter_indices`).
/// An empty view still gets a file with just the header row.
pub fn export_patients(
    export: &ExportOptions,
    records: &[PatientRecord],
    row_ix: &[usize],
    at: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    let path = export.filtered_path(at);
    let out = create_file(&path)?;
    let selected = row_ix.iter().filter_map(|&ix| records.get(ix));
    write_patients(out, selected, export.include_headers, export.format.delim())?;

    logf!("Export: patients rows={} → {}", row_ix.len(), path.display());
    Ok(path)
}

/// Write the full generated table to the fixed sample file name.
pub fn export_sample(export: &ExportOptions, records: &[PatientRecord]) -> Result<PathBuf, ExportError> {
    export_sample_to(&export.sample_path(), export, records)
}

/// Full generated table to an explicit path (CLI `generate -o`).
pub fn export_sample_to(path: &Path, export: &ExportOptions, records: &[PatientRecord]) -> Result<PathBuf, ExportError> {
    let out = create_file(path)?;
    write_patients(out, records, export.include_headers, export.format.delim())?;

    logf!("Export: sample rows={} → {}", records.len(), path.display());
    Ok(path.to_path_buf())
}

/// Write any string table (scraped, imported) to `<out_dir>/<stem>.<ext>`.
pub fn export_table(export: &ExportOptions, stem: &str, ds: &DataSet) -> Result<PathBuf, ExportError> {
    export_table_to(&export.stem_path(stem), export, ds)
}

/// Same as `export_table` with an explicit target path (CLI `-o`).
pub fn export_table_to(path: &Path, export: &ExportOptions, ds: &DataSet) -> Result<PathBuf, ExportError> {
    if ds.is_empty() {
        return Err(ExportError::Empty);
    }
    let out = create_file(path)?;
    write_table(out, &ds.headers, &ds.rows, export.include_headers, export.format.delim())?;

    logf!("Export: table rows={} → {}", ds.row_count(), path.display());
    Ok(path.to_path_buf())
}

/// Ensure parent dir exists; create/truncate file.
fn create_file(path: &Path) -> Result<BufWriter<File>, ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}
