// src/config/consts.rs

// Synthetic data
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_SAMPLE_COUNT: usize = 500;
pub const PATIENT_ID_PREFIX: &str = "THY-";

// Lab panel columns looked for in imported files
pub const HORMONE_COLUMNS: [&str; 5] = ["TSH", "T3", "T4", "T4U", "FTI"];

// Scrape
pub const SCRAPE_URL: &str = "https://www.scrapethissite.com/pages/forms/";
pub const USER_AGENT: &str = "thyro_dash/0.3";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_PREFIX: &str = "thyroid_patients";
pub const SAMPLE_STEM: &str = "sample_thyroid_data";
pub const SCRAPE_STEM: &str = "hockey_teams";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Form
pub const NOTES_MAX_CHARS: usize = 1000;

// Import
pub const PREVIEW_ROWS: usize = 10;

// Logging
pub const LOG_FILE: &str = ".thyro/debug.log";
