// src/csv_io.rs
use std::io::Write;

use csv::{ReaderBuilder, WriterBuilder};

use crate::data::DataSet;
use crate::model::{PatientRecord, PATIENT_HEADERS};

/* ---------------- Parsing ---------------- */

/// Read delimited text into a DataSet. The first record is the header row;
/// ragged rows are kept as-is. Invalid UTF-8 is an error.
pub fn parse_table(bytes: &[u8], delim: u8) -> Result<DataSet, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(rec?.iter().map(str::to_string).collect());
    }

    let headers = if headers.is_empty() { None } else { Some(headers) };
    Ok(DataSet { headers, rows })
}

/// Typed read of a patient export (round-trips `write_patients`).
pub fn parse_patients(bytes: &[u8], delim: u8) -> Result<Vec<PatientRecord>, csv::Error> {
    let mut rdr = ReaderBuilder::new().delimiter(delim).from_reader(bytes);
    rdr.deserialize().collect()
}

/* ---------------- Writing ---------------- */

/// Write headers (optional) and rows to any writer.
pub fn write_table<W: Write>(
    w: W,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    delim: u8,
) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().delimiter(delim).flexible(true).from_writer(w);
    if include_headers {
        if let Some(h) = headers {
            wtr.write_record(h)?;
        }
    }
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serialize patient records with their column names as the header row.
/// The header is written even when there are no records.
pub fn write_patients<'a, W, I>(w: W, records: I, include_headers: bool, delim: u8) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let mut wtr = WriterBuilder::new().delimiter(delim).has_headers(false).from_writer(w);
    if include_headers {
        wtr.write_record(PATIENT_HEADERS)?;
    }
    for rec in records {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

/* ---------------- Convenience: in-memory strings (clipboard, tests) ---------------- */

pub fn table_to_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    delim: u8,
) -> Result<String, csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, headers, rows, include_headers, delim)?;
    Ok(into_string(buf))
}

pub fn patients_to_string<'a, I>(records: I, include_headers: bool, delim: u8) -> Result<String, csv::Error>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let mut buf: Vec<u8> = Vec::new();
    write_patients(&mut buf, records, include_headers, delim)?;
    Ok(into_string(buf))
}

fn into_string(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
