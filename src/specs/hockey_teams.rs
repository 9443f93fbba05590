// src/specs/hockey_teams.rs
//! Hockey team table on the scraping practice site's "forms" page.
//!
//! Layout: one `<table>`; the first `<tr>` is the header row, every other
//! `<tr>` is a team. The first three `<td>` cells are name, year and wins.
//! Omitted `</tr>`/`</td>` end tags are tolerated. Cell text is kept as
//! trimmed strings; nothing is parsed as a number.

use crate::config::options::RowMode;
use crate::core::html::element_blocks_ci;
use crate::core::sanitize::cell_text;
use crate::data::DataSet;
use crate::error::ScrapeError;

pub const HEADERS: [&str; 3] = ["Team Name", "Year", "Wins"];

/// One team row as it appears on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapedRow {
    pub team_name: String,
    pub year: String,
    pub wins: String,
}

/// All data rows in document order. `row` in `MissingCell` is 1-based over
/// data rows (header excluded).
pub fn parse_rows(doc: &str) -> Result<Vec<ScrapedRow>, ScrapeError> {
    element_blocks_ci(doc, "<tr", &["</tr", "</table"])
        .into_iter()
        .skip(1)
        .enumerate()
        .map(|(i, tr)| {
            let cells = element_blocks_ci(tr, "<td", &["</td", "</tr"]);
            if cells.len() < 3 {
                return Err(ScrapeError::MissingCell { row: i + 1, found: cells.len() });
            }
            Ok(ScrapedRow {
                team_name: cell_text(cells[0]),
                year: cell_text(cells[1]),
                wins: cell_text(cells[2]),
            })
        })
        .collect()
}

/// Assemble the display table.
pub fn to_dataset(rows: Vec<ScrapedRow>, mode: RowMode) -> DataSet {
    let last = rows.last().map(|r| (r.year.clone(), r.wins.clone()));
    let rows = rows
        .into_iter()
        .map(|r| match (mode, &last) {
            (RowMode::LastRowRepeated, Some((year, wins))) => row![r.team_name, year.as_str(), wins.as_str()],
            _ => row![r.team_name, r.year, r.wins],
        })
        .collect();
    DataSet::new(headers!(HEADERS), rows)
}

pub fn parse_doc(doc: &str, mode: RowMode) -> Result<DataSet, ScrapeError> {
    let rows = parse_rows(doc)?;
    if rows.is_empty() {
        logd!("Scrape: page has no team rows");
    }
    Ok(to_dataset(rows, mode))
}
