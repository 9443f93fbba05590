// src/core/net.rs
// Blocking HTTP GET. The body is returned whatever the status code; the
// scraper treats a page without rows as an empty table.

use crate::config::consts::USER_AGENT;
use crate::error::ScrapeError;

pub fn http_get(url: &str) -> Result<String, ScrapeError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    let body = resp.text()?;
    logd!("HTTP GET {} → {} ({} bytes)", url, status, body.len());
    Ok(body)
}
