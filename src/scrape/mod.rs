// src/scrape/mod.rs
//! Fetch + parse entry points shared by the GUI worker and the CLI.

use crate::config::options::ScrapeOptions;
use crate::core::net;
use crate::data::DataSet;
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::specs;

/// One GET of `opts.url`, parsed into the three-column team table.
pub fn collect_teams(
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, ScrapeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log(&format!("Fetching {}…", opts.url));
    }

    let result = net::http_get(&opts.url).and_then(|doc| specs::hockey_teams::parse_doc(&doc, opts.row_mode));

    match &result {
        Ok(ds) => {
            logf!("Scrape: {} rows from {}", ds.row_count(), opts.url);
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(ds.row_count());
            }
        }
        Err(e) => loge!("Scrape failed: {}", e),
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}
