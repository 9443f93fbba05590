// src/specs/mod.rs
//! Page-specific parsing. A spec knows where the data lives in one page's HTML
//! and how to lift it into a `DataSet`; fetching, progress and export live in
//! `scrape` and `file`.
//!
//! Specs are pure over the document text so they can be tested offline
//! against saved fixtures.

pub mod hockey_teams;
