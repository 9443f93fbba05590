// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv_io, data::DataSet, gui::app::App};

pub fn copy_patients(app: &App, ui_ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }
    let export = &app.state.options.export;
    let selected = app.row_ix.iter().filter_map(|&ix| app.records.get(ix));
    match csv_io::patients_to_string(selected, export.include_headers, export.format.delim()) {
        Ok(txt) => {
            logf!("Copy: patients rows={}", app.row_ix.len());
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => app.status(format!("Copy error: {e}")),
    }
}

pub fn copy_table(app: &App, ui_ctx: &egui::Context, ds: &DataSet) {
    if ds.is_empty() {
        app.status("Nothing to copy");
        return;
    }
    let export = &app.state.options.export;
    match csv_io::table_to_string(&ds.headers, &ds.rows, export.include_headers, export.format.delim()) {
        Ok(txt) => {
            logf!("Copy: table rows={}", ds.row_count());
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => app.status(format!("Copy error: {e}")),
    }
}
