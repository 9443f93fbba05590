// src/error.rs
//! Typed errors per domain. Front ends box them at their boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid sampling configuration for the synthetic generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid distribution for {field}: {source}")]
    Distribution {
        field: &'static str,
        #[source]
        source: rand_distr::NormalError,
    },

    #[error("invalid class weights for {field}: {source}")]
    Weights {
        field: &'static str,
        #[source]
        source: rand::distributions::WeightedError,
    },

    #[error("class probabilities for {field} sum to {sum}, expected 1")]
    WeightSum { field: &'static str, sum: f64 },
}

/// Fatal for a single scrape run. Nothing is retried.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("row {row} has {found} <td> cell(s), expected at least 3")]
    MissingCell { row: usize, found: usize },
}

/// Contained to the import panel; the dashboard stays usable.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("no columns to parse from file")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export failed: {0}")]
    Io(#[from] io::Error),

    #[error("export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("nothing to export")]
    Empty,
}
