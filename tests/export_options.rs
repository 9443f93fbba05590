// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic.
//
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thyro_dash::config::options::{ExportFormat, ExportOptions};

fn norm(p: &Path) -> PathBuf { p.components().collect() }

#[test]
fn filtered_name_is_timestamped() {
    let opts = ExportOptions::default();
    let at = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(7, 5, 30).unwrap();
    let p = opts.filtered_path(at);
    assert_eq!(p.file_name().unwrap(), "thyroid_patients_20240309_070530.csv");
    assert_eq!(norm(p.parent().unwrap()), norm(Path::new("out")));
}

#[test]
fn extension_follows_format() {
    let mut opts = ExportOptions::default();
    assert!(opts.sample_path().to_string_lossy().ends_with("sample_thyroid_data.csv"));
    opts.format = ExportFormat::Tsv;
    assert!(opts.sample_path().to_string_lossy().ends_with("sample_thyroid_data.tsv"));
    assert!(opts.stem_path("hockey_teams").to_string_lossy().ends_with("hockey_teams.tsv"));
}

#[test]
fn blank_dir_restores_default() {
    let mut opts = ExportOptions::default();
    opts.set_dir("exports/today");
    assert_eq!(norm(opts.out_dir()), norm(Path::new("exports/today")));
    opts.set_dir("   ");
    assert_eq!(norm(opts.out_dir()), norm(Path::new("out")));
}

#[test]
fn format_parse_is_case_insensitive() {
    assert_eq!(ExportFormat::parse("TSV"), Some(ExportFormat::Tsv));
    assert_eq!(ExportFormat::parse("csv"), Some(ExportFormat::Csv));
    assert_eq!(ExportFormat::parse("xlsx"), None);
    assert_eq!(ExportFormat::Tsv.delim(), b'\t');
}
