// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::patients::PAGE,
    &pages::lab_entry::PAGE,
    &pages::charts::PAGE,
    &pages::registration::PAGE,
    &pages::import::PAGE,
    &pages::scraper::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
