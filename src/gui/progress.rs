// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Writes scrape status into the shared status line (worker thread side).
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    rows: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, rows: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, items: usize) {
        self.rows = items;
        self.set_status(format!("Parsed {items} rows"));
    }
    fn finish(&mut self) {
        self.set_status(format!("Fetch complete ({} rows)", self.rows));
    }
}
