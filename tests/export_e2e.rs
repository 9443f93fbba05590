// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use thyro_dash::analysis::{filter_indices, PatientFilter};
use thyro_dash::config::options::{AppOptions, ExportFormat, GeneratorOptions};
use thyro_dash::csv_io::parse_patients;
use thyro_dash::data::DataSet;
use thyro_dash::error::ExportError;
use thyro_dash::file;
use thyro_dash::generate::generate;
use thyro_dash::model::Gender;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("thyro_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn filtered_export_writes_only_the_view() {
    let dir = tmp_dir("filtered");
    let mut opts = AppOptions::default();
    opts.export.set_dir(dir.to_str().unwrap());

    let records = generate(&GeneratorOptions { seed: 42, count: 200 }).unwrap();
    let mut filter = PatientFilter::spanning(&records);
    filter.genders.remove(&Gender::Male);
    let row_ix = filter_indices(&records, &filter);

    let at = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
    let path = file::export_patients(&opts.export, &records, &row_ix, at).unwrap();
    assert_eq!(path, dir.join("thyroid_patients_20240102_030405.csv"));

    let back = parse_patients(&fs::read(&path).unwrap(), b',').unwrap();
    assert_eq!(back.len(), row_ix.len());
    assert!(back.iter().all(|r| r.gender == Gender::Female));
    assert_eq!(back[0], records[row_ix[0]]);
}

#[test]
fn sample_export_as_tsv() {
    let dir = tmp_dir("sample_tsv");
    let mut opts = AppOptions::default();
    opts.export.set_dir(dir.to_str().unwrap());
    opts.export.format = ExportFormat::Tsv;

    let records = generate(&GeneratorOptions { seed: 3, count: 10 }).unwrap();
    let path = file::export_sample(&opts.export, &records).unwrap();
    assert!(path.ends_with("sample_thyroid_data.tsv"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("PatientID\tAge\tTSH"));
    assert_eq!(text.lines().count(), 11);
}

#[test]
fn headers_can_be_left_out() {
    let dir = tmp_dir("no_headers");
    let mut opts = AppOptions::default();
    opts.export.include_headers = false;

    let ds = DataSet::new(
        Some(vec!["Team Name".into(), "Year".into(), "Wins".into()]),
        vec![vec!["Boston Bruins".into(), "1990".into(), "44".into()]],
    );
    let path = file::export_table_to(&dir.join("teams.csv"), &opts.export, &ds).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "Boston Bruins,1990,44\n");
}

const HEADER_LINE: &str =
    "PatientID,Age,TSH,T3,T4,T4U,FTI,Gender,Goitre,Tumor,Hypopituitary,Psych,Diagnosis,Risk_Level\n";

#[test]
fn empty_view_exports_header_only() {
    let dir = tmp_dir("empty");
    let mut opts = AppOptions::default();
    opts.export.set_dir(dir.to_str().unwrap());
    let records = generate(&GeneratorOptions { seed: 1, count: 5 }).unwrap();
    let at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let path = file::export_patients(&opts.export, &records, &[], at).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), HEADER_LINE);
}

#[test]
fn zero_patient_sample_keeps_header() {
    let dir = tmp_dir("count_zero");
    let opts = AppOptions::default();
    let records = generate(&GeneratorOptions { seed: 42, count: 0 }).unwrap();
    assert!(records.is_empty());
    let path = file::export_sample_to(&dir.join("empty.csv"), &opts.export, &records).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), HEADER_LINE);
    assert!(parse_patients(&fs::read(&path).unwrap(), b',').unwrap().is_empty());
}

#[test]
fn empty_table_is_not_exported() {
    let dir = tmp_dir("empty_table");
    let opts = AppOptions::default();
    let ds = DataSet::new(Some(vec!["Team Name".into()]), Vec::new());
    assert!(matches!(file::export_table_to(&dir.join("t.csv"), &opts.export, &ds), Err(ExportError::Empty)));
}

#[test]
fn file_in_place_of_dir_is_reported() {
    let dir = tmp_dir("not_a_dir");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = AppOptions::default();
    opts.export.set_dir(blocker.to_str().unwrap());
    let records = generate(&GeneratorOptions { seed: 1, count: 5 }).unwrap();
    assert!(matches!(file::export_sample(&opts.export, &records), Err(ExportError::NotADirectory(_))));
}
