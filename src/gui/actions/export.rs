// src/gui/actions/export.rs
use std::path::PathBuf;

use chrono::Local;

use crate::{data::DataSet, error::ExportError, file, gui::app::App};

/// Apply a pending output-directory edit before writing.
fn sync_out_dir(app: &mut App) {
    let gui = &mut app.state.gui;
    if gui.out_dir_dirty {
        app.state.options.export.set_dir(&gui.out_dir_text);
        gui.out_dir_text = app.state.options.export.out_dir().to_string_lossy().into_owned();
        gui.out_dir_dirty = false;
        logf!("Export: Out dir set → {}", app.state.options.export.out_dir().display());
    }
}

fn report(app: &App, what: &str, res: Result<PathBuf, ExportError>) {
    match res {
        Ok(path) => app.status(format!("Exported {what} → {}", path.display())),
        Err(e) => {
            loge!("Export: {} failed: {}", what, e);
            app.status(format!("Export error: {e}"));
        }
    }
}

/// Current filtered patient view, timestamped file name.
pub fn export_filtered(app: &mut App) {
    sync_out_dir(app);
    let res = file::export_patients(&app.state.options.export, &app.records, &app.row_ix, Local::now().naive_local());
    report(app, "filtered patients", res);
}

/// Whole generated cohort under the fixed sample name.
pub fn export_sample(app: &mut App) {
    sync_out_dir(app);
    let res = file::export_sample(&app.state.options.export, &app.records);
    report(app, "sample data", res);
}

pub fn export_table(app: &mut App, stem: &str, ds: &DataSet) {
    sync_out_dir(app);
    let res = file::export_table(&app.state.options.export, stem, ds);
    report(app, stem, res);
}
