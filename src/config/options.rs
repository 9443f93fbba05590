// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub generator: GeneratorOptions,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/* ---------------- Generator ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub seed: u64,
    pub count: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED, count: DEFAULT_SAMPLE_COUNT }
    }
}

/* ---------------- Scrape ---------------- */

/// How Year/Wins are filled when the scraped rows are assembled into a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RowMode {
    /// Each row keeps its own Year and Wins.
    #[default]
    PerRow,
    /// Every row repeats the *last* row's Year and Wins (legacy output).
    LastRowRepeated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub row_mode: RowMode,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { url: s!(SCRAPE_URL), row_mode: RowMode::PerRow }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. Blank text restores the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(crate::file::normalize_separators(s))
        };
    }

    /// `thyroid_patients_YYYYMMDD_HHMMSS.<ext>` inside the output directory.
    pub fn filtered_path(&self, at: NaiveDateTime) -> PathBuf {
        let stamp = at.format(TIMESTAMP_FORMAT);
        self.out_dir.join(format!("{EXPORT_PREFIX}_{stamp}.{}", self.format.ext()))
    }

    /// Fixed-name file for the full sample dataset.
    pub fn sample_path(&self) -> PathBuf {
        self.stem_path(SAMPLE_STEM)
    }

    pub fn stem_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{stem}.{}", self.format.ext()))
    }
}
