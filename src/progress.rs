// src/progress.rs
/// Status reporting for long-running operations (the scrape).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of steps (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a step completes; `items` is how many rows it produced.
    fn item_done(&mut self, _items: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints status lines to stderr (CLI).
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, items: usize) {
        eprintln!("  {items} rows");
    }
}
