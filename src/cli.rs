// src/cli.rs
//! Headless front end. Hand-rolled argument parsing; see `cli_help.txt`.

use std::{error::Error, path::PathBuf};

use chrono::Local;

use crate::analysis::{filter_indices, summarize, PatientFilter};
use crate::classify::lab::{AGE_INPUT, TSH_INPUT};
use crate::classify::{LabEntry, TSH_HIGH, TSH_LOW};
use crate::config::options::{AppOptions, ExportFormat, GeneratorOptions, RowMode};
use crate::csv_io::table_to_string;
use crate::import::{import_csv_path, ImportReport};
use crate::model::{Diagnosis, Gender, RiskLevel};
use crate::progress::StderrProgress;
use crate::{file, generate, scrape};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Generate {
        generator: GeneratorOptions,
        format: ExportFormat,
        out: Option<PathBuf>,
    },
    Export {
        generator: GeneratorOptions,
        filter: FilterArgs,
        format: ExportFormat,
        out_dir: Option<PathBuf>,
    },
    Lab(LabEntry),
    Import(PathBuf),
    Scrape {
        url: Option<String>,
        row_mode: RowMode,
        out: Option<PathBuf>,
    },
    Help,
}

/// Filter overrides; `None` keeps the spanning default for that field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterArgs {
    pub age: Option<(u32, u32)>,
    pub genders: Option<Vec<Gender>>,
    pub diagnoses: Option<Vec<Diagnosis>>,
    pub risk_levels: Option<Vec<RiskLevel>>,
}

impl FilterArgs {
    pub fn apply(&self, mut filter: PatientFilter) -> PatientFilter {
        if let Some((lo, hi)) = self.age {
            filter.age_min = lo;
            filter.age_max = hi;
        }
        if let Some(v) = &self.genders {
            filter.genders = v.iter().copied().collect();
        }
        if let Some(v) = &self.diagnoses {
            filter.diagnoses = v.iter().copied().collect();
        }
        if let Some(v) = &self.risk_levels {
            filter.risk_levels = v.iter().copied().collect();
        }
        filter
    }
}

pub fn run<I: IntoIterator<Item = String>>(args: I) -> CliResult<()> {
    let cmd = parse_args(args)?;
    logd!("CLI: {:?}", cmd);
    execute(cmd)
}

/* ---------------- Parsing ---------------- */

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> CliResult<Command> {
    let mut args = args.into_iter();
    let Some(sub) = args.next() else { return Ok(Command::Help) };

    match sub.as_str() {
        "generate" => {
            let mut generator = GeneratorOptions::default();
            let mut format = ExportFormat::Csv;
            let mut out = None;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "--seed" => generator.seed = value(&mut args, &a)?.parse()?,
                    "--count" => generator.count = value(&mut args, &a)?.parse()?,
                    "--format" => format = parse_format(&value(&mut args, &a)?)?,
                    "-o" | "--out" => out = Some(PathBuf::from(value(&mut args, &a)?)),
                    _ => return Err(format!("Unknown arg: {}", a).into()),
                }
            }
            Ok(Command::Generate { generator, format, out })
        }
        "export" => {
            let mut generator = GeneratorOptions::default();
            let mut filter = FilterArgs::default();
            let mut format = ExportFormat::Csv;
            let mut out_dir = None;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "--seed" => generator.seed = value(&mut args, &a)?.parse()?,
                    "--count" => generator.count = value(&mut args, &a)?.parse()?,
                    "--age" => filter.age = Some(parse_age_range(&value(&mut args, &a)?)?),
                    "--gender" => filter.genders = Some(parse_list(&value(&mut args, &a)?, &Gender::ALL, |g| g.label())?),
                    "--diagnosis" => {
                        filter.diagnoses = Some(parse_list(&value(&mut args, &a)?, &Diagnosis::ALL, |d| d.label())?)
                    }
                    "--risk" => {
                        filter.risk_levels = Some(parse_list(&value(&mut args, &a)?, &RiskLevel::ALL, |r| r.label())?)
                    }
                    "--format" => format = parse_format(&value(&mut args, &a)?)?,
                    "-o" | "--out" => out_dir = Some(PathBuf::from(value(&mut args, &a)?)),
                    _ => return Err(format!("Unknown arg: {}", a).into()),
                }
            }
            Ok(Command::Export { generator, filter, format, out_dir })
        }
        "lab" => {
            let mut entry = LabEntry::default();
            let mut tsh = None;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "--tsh" => tsh = Some(value(&mut args, &a)?.parse::<f64>()?),
                    "--age" => entry.age = value(&mut args, &a)?.parse()?,
                    "--goitre" => entry.goitre = true,
                    "--tumor" => entry.tumor_history = true,
                    "--psych" => entry.psych_symptoms = true,
                    _ => return Err(format!("Unknown arg: {}", a).into()),
                }
            }
            entry.tsh = tsh.ok_or("Missing value for --tsh")?;
            // NaN fails `contains`, so non-finite input is rejected too.
            if !TSH_INPUT.contains(&entry.tsh) {
                return Err(format!(
                    "Invalid value for --tsh: {} (expected {}-{})",
                    entry.tsh,
                    TSH_INPUT.start(),
                    TSH_INPUT.end()
                )
                .into());
            }
            if !AGE_INPUT.contains(&entry.age) {
                return Err(format!(
                    "Invalid value for --age: {} (expected {}-{})",
                    entry.age,
                    AGE_INPUT.start(),
                    AGE_INPUT.end()
                )
                .into());
            }
            Ok(Command::Lab(entry))
        }
        "import" => {
            let path = args.next().ok_or("Missing file for import")?;
            if let Some(extra) = args.next() {
                return Err(format!("Unknown arg: {}", extra).into());
            }
            Ok(Command::Import(PathBuf::from(path)))
        }
        "scrape" => {
            let mut url = None;
            let mut row_mode = RowMode::PerRow;
            let mut out = None;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "--url" => url = Some(value(&mut args, &a)?),
                    "--repeat-last-row" => row_mode = RowMode::LastRowRepeated,
                    "-o" | "--out" => out = Some(PathBuf::from(value(&mut args, &a)?)),
                    _ => return Err(format!("Unknown arg: {}", a).into()),
                }
            }
            Ok(Command::Scrape { url, row_mode, out })
        }
        "-h" | "--help" | "help" => Ok(Command::Help),
        other => Err(format!("Unknown command: {}", other).into()),
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> CliResult<String> {
    Ok(args.next().ok_or_else(|| format!("Missing value for {}", flag))?)
}

fn parse_format(v: &str) -> CliResult<ExportFormat> {
    Ok(ExportFormat::parse(v).ok_or_else(|| format!("Unknown format: {}", v))?)
}

/// `30-60` → (30, 60); a single number selects one age.
fn parse_age_range(s: &str) -> CliResult<(u32, u32)> {
    let (a, b) = match s.split_once('-') {
        Some((a, b)) => (a.trim().parse()?, b.trim().parse()?),
        None => {
            let v: u32 = s.trim().parse()?;
            (v, v)
        }
    };
    if a > b {
        return Err(format!("Invalid range: {}", s).into());
    }
    Ok((a, b))
}

/// Comma-separated labels, matched case-insensitively.
fn parse_list<T: Copy>(s: &str, all: &[T], label: impl Fn(T) -> &'static str) -> CliResult<Vec<T>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        let hit = all
            .iter()
            .copied()
            .find(|v| label(*v).eq_ignore_ascii_case(part))
            .ok_or_else(|| format!("Unknown value: {}", part))?;
        out.push(hit);
    }
    Ok(out)
}

/* ---------------- Execution ---------------- */

pub fn execute(cmd: Command) -> CliResult<()> {
    let mut opts = AppOptions::default();

    match cmd {
        Command::Help => {
            println!("{}", include_str!("cli_help.txt"));
        }
        Command::Generate { generator, format, out } => {
            opts.export.format = format;
            let records = generate::generate(&generator)?;
            logf!("Generate: seed={} count={}", generator.seed, records.len());
            let path = match out {
                Some(p) => file::export_sample_to(&p, &opts.export, &records)?,
                None => file::export_sample(&opts.export, &records)?,
            };
            println!("Wrote {} patients to {}", records.len(), path.display());
        }
        Command::Export { generator, filter, format, out_dir } => {
            opts.export.format = format;
            if let Some(dir) = out_dir {
                opts.export.set_dir(&dir.to_string_lossy());
            }
            let records = generate::generate(&generator)?;
            logf!("Generate: seed={} count={}", generator.seed, records.len());
            let filter = filter.apply(PatientFilter::spanning(&records));
            let row_ix = filter_indices(&records, &filter);
            let summary = summarize(&records, &row_ix);
            println!(
                "Selected {} of {} patients; abnormal {}, high risk {}",
                summary.total,
                records.len(),
                summary.abnormal,
                summary.high_risk
            );
            let path = file::export_patients(&opts.export, &records, &row_ix, Local::now().naive_local())?;
            println!("Wrote {}", path.display());
        }
        Command::Lab(entry) => print_lab(&entry),
        Command::Import(path) => {
            let ds = import_csv_path(&path)?;
            print_report(&ImportReport::from_dataset(&ds))?;
        }
        Command::Scrape { url, row_mode, out } => {
            if let Some(u) = url {
                opts.scrape.url = u;
            }
            opts.scrape.row_mode = row_mode;
            let mut progress = StderrProgress;
            let ds = scrape::collect_teams(&opts.scrape, Some(&mut progress))?;
            match out {
                Some(p) => {
                    let path = file::export_table_to(&p, &opts.export, &ds)?;
                    println!("Wrote {} rows to {}", ds.row_count(), path.display());
                }
                None => print!("{}", table_to_string(&ds.headers, &ds.rows, true, b',')?),
            }
        }
    }
    Ok(())
}

fn print_lab(entry: &LabEntry) {
    let diagnosis = entry.diagnosis();
    let risk = entry.assess();
    println!("Diagnosis: {} ({})", diagnosis.banner(), diagnosis.status());
    println!("TSH {:.2} mIU/L (normal {TSH_LOW}-{TSH_HIGH})", entry.tsh);
    println!("{}: score {}/{}", risk.banner(), risk.score, risk.max);
    for r in entry.recommendations() {
        println!("  - {r}");
    }
}

fn print_report(report: &ImportReport) -> CliResult<()> {
    println!("Patients: {}", report.rows);
    println!("Data fields: {}", report.columns);
    println!();
    println!("Column types:");
    for (col, ty) in &report.column_types {
        println!("  {col}: {}", ty.label());
    }

    if !report.hormone_columns.is_empty() {
        println!();
        println!("Hormone columns: {}", report.hormone_columns.join(", "));
        for st in &report.hormone_stats {
            let cells: Vec<String> = st.labelled().iter().map(|(k, v)| format!("{k}={v:.3}")).collect();
            println!("  {}: {}", st.column, cells.join(" "));
        }
        if let Some(n) = report.abnormal_tsh.filter(|n| *n > 0) {
            println!("Abnormal TSH: {n} patients");
        }
    }

    println!();
    if report.missing.is_empty() {
        println!("No missing values detected");
    } else {
        println!("Missing values:");
        for m in &report.missing {
            println!("  {}: {} ({:.2}%)", m.column, m.count, m.percent);
        }
    }

    println!();
    println!("Preview:");
    print!("{}", table_to_string(&report.preview.headers, &report.preview.rows, true, b',')?);
    Ok(())
}
