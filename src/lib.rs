// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod model;

pub mod classify;
pub mod generate;
pub mod analysis;
pub mod form;

pub mod data;
pub mod csv_io;
pub mod file;
pub mod import;

pub mod core;
pub mod specs;
pub mod scrape;
pub mod progress;

pub mod cli;
pub mod gui;
