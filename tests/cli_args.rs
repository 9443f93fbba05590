// tests/cli_args.rs
//
// Argument parsing only; nothing is executed.

use std::path::PathBuf;

use thyro_dash::cli::{parse_args, Command, FilterArgs};
use thyro_dash::config::options::{ExportFormat, GeneratorOptions, RowMode};
use thyro_dash::model::{Diagnosis, Gender, RiskLevel};

fn parse(args: &[&str]) -> Result<Command, String> {
    parse_args(args.iter().map(|s| s.to_string())).map_err(|e| e.to_string())
}

#[test]
fn no_args_is_help() {
    assert_eq!(parse(&[]).unwrap(), Command::Help);
    assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
}

#[test]
fn generate_defaults_and_overrides() {
    assert_eq!(
        parse(&["generate"]).unwrap(),
        Command::Generate { generator: GeneratorOptions::default(), format: ExportFormat::Csv, out: None }
    );
    assert_eq!(
        parse(&["generate", "--seed", "7", "--count", "20", "--format", "tsv", "-o", "x.tsv"]).unwrap(),
        Command::Generate {
            generator: GeneratorOptions { seed: 7, count: 20 },
            format: ExportFormat::Tsv,
            out: Some(PathBuf::from("x.tsv")),
        }
    );
}

#[test]
fn export_filters() {
    let cmd = parse(&["export", "--age", "30-60", "--gender", "female", "--diagnosis", "Hypothyroid,normal", "--risk", "High"]).unwrap();
    let Command::Export { filter, .. } = cmd else { panic!("expected export") };
    assert_eq!(
        filter,
        FilterArgs {
            age: Some((30, 60)),
            genders: Some(vec![Gender::Female]),
            diagnoses: Some(vec![Diagnosis::Hypothyroid, Diagnosis::Normal]),
            risk_levels: Some(vec![RiskLevel::High]),
        }
    );
}

#[test]
fn bad_values_are_errors() {
    assert!(parse(&["export", "--age", "60-30"]).unwrap_err().contains("Invalid range"));
    assert!(parse(&["export", "--gender", "robot"]).unwrap_err().contains("Unknown value"));
    assert!(parse(&["generate", "--format", "xlsx"]).unwrap_err().contains("Unknown format"));
    assert!(parse(&["generate", "--seed"]).unwrap_err().contains("Missing value for --seed"));
    assert!(parse(&["frobnicate"]).unwrap_err().contains("Unknown command"));
}

#[test]
fn lab_requires_tsh() {
    assert!(parse(&["lab", "--age", "70"]).is_err());
    let Command::Lab(entry) = parse(&["lab", "--tsh", "5.5", "--age", "70", "--tumor"]).unwrap() else {
        panic!("expected lab")
    };
    assert_eq!((entry.tsh, entry.age, entry.tumor_history, entry.goitre), (5.5, 70, true, false));
    assert_eq!(entry.assess().score, 5);
}

#[test]
fn lab_values_outside_panel_ranges_are_rejected() {
    for tsh in ["NaN", "inf", "-5", "0", "20.5"] {
        let err = parse(&["lab", "--tsh", tsh]).unwrap_err();
        assert!(err.contains("Invalid value for --tsh"), "{tsh}: {err}");
    }
    assert!(parse(&["lab", "--tsh", "2.5", "--age", "0"]).unwrap_err().contains("Invalid value for --age"));
    assert!(parse(&["lab", "--tsh", "2.5", "--age", "121"]).unwrap_err().contains("Invalid value for --age"));
    assert!(parse(&["lab", "--tsh", "0.1", "--age", "1"]).is_ok());
    assert!(parse(&["lab", "--tsh", "20", "--age", "120"]).is_ok());
}

#[test]
fn scrape_flags() {
    assert_eq!(
        parse(&["scrape", "--repeat-last-row", "-o", "teams.csv"]).unwrap(),
        Command::Scrape { url: None, row_mode: RowMode::LastRowRepeated, out: Some(PathBuf::from("teams.csv")) }
    );
}

#[test]
fn import_takes_one_path() {
    assert_eq!(parse(&["import", "a.csv"]).unwrap(), Command::Import(PathBuf::from("a.csv")));
    assert!(parse(&["import"]).is_err());
    assert!(parse(&["import", "a.csv", "b.csv"]).is_err());
}
