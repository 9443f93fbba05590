// src/gui/pages/import.rs
//
// CSV upload: type a path or drop a file onto the window. A failed import
// shows the error here and leaves the rest of the dashboard untouched.

use std::path::PathBuf;

use eframe::egui;

use crate::data::DataSet;
use crate::gui::{app::App, components::data_table};
use crate::import::{import_csv_bytes, import_csv_path, ImportReport};
use crate::error::ImportError;

use super::{heading, Page};

pub struct ImportPage;
pub static PAGE: ImportPage = ImportPage;

fn load(app: &mut App, label: String, res: Result<DataSet, ImportError>) {
    match res {
        Ok(ds) => {
            let report = ImportReport::from_dataset(&ds);
            app.status(format!("Imported {label}: {} rows", report.rows));
            app.imported = Some((ds, report));
            app.import_error = None;
        }
        Err(e) => {
            loge!("Import: {} failed: {}", label, e);
            app.status("Import failed");
            app.imported = None;
            app.import_error = Some(e.to_string());
        }
    }
}

fn draw_report(ui: &mut egui::Ui, app: &mut App) {
    let Some((_, report)) = &app.imported else { return };

    ui.columns(2, |cols| {
        let ui = &mut cols[0];
        heading(ui, "Dataset information");
        ui.label(format!("Patients: {}", report.rows));
        ui.label(format!("Data fields: {}", report.columns));

        let ui = &mut cols[1];
        heading(ui, "Column analysis");
        egui::Grid::new("import_types").striped(true).show(ui, |ui| {
            ui.label(egui::RichText::new("Column").strong());
            ui.label(egui::RichText::new("Type").strong());
            ui.end_row();
            for (c, t) in &report.column_types {
                ui.label(c);
                ui.label(t.label());
                ui.end_row();
            }
        });
    });

    heading(ui, "Data preview");
    data_table::draw_all(ui, "import_preview", &report.preview);

    if !report.hormone_columns.is_empty() {
        heading(ui, "Thyroid hormone analysis");
        ui.label(format!("Found hormone data columns: {}", report.hormone_columns.join(", ")));
        ui.checkbox(&mut app.show_hormone_stats, "Show hormone statistics");
        if app.show_hormone_stats {
            egui::Grid::new("import_stats").striped(true).show(ui, |ui| {
                ui.label("");
                for st in &report.hormone_stats {
                    ui.label(egui::RichText::new(&st.column).strong());
                }
                ui.end_row();
                for (i, name) in ["count", "mean", "std", "min", "25%", "50%", "75%", "max"].iter().enumerate() {
                    ui.label(egui::RichText::new(*name).strong());
                    for st in &report.hormone_stats {
                        let v = st.labelled()[i].1;
                        ui.label(if v.is_nan() { s!("-") } else { format!("{v:.3}") });
                    }
                    ui.end_row();
                }
            });
            if let Some(n) = report.abnormal_tsh.filter(|n| *n > 0) {
                ui.colored_label(egui::Color32::from_rgb(255, 68, 68), format!("⚠ {n} patients with abnormal TSH levels"));
            }
        }
    }

    ui.checkbox(&mut app.show_missing, "Check missing values");
    if app.show_missing {
        if report.missing.is_empty() {
            ui.label("✓ No missing values detected");
        } else {
            egui::Grid::new("import_missing").striped(true).show(ui, |ui| {
                ui.label(egui::RichText::new("Column").strong());
                ui.label(egui::RichText::new("Missing").strong());
                ui.label(egui::RichText::new("Percentage").strong());
                ui.end_row();
                for m in &report.missing {
                    ui.label(&m.column);
                    ui.label(m.count.to_string());
                    ui.label(format!("{:.2}%", m.percent));
                    ui.end_row();
                }
            });
        }
    }
}

impl Page for ImportPage {
    fn title(&self) -> &'static str { "Import" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        heading(ui, "Import thyroid lab results (CSV)");

        let mut open = false;
        ui.horizontal(|ui| {
            ui.label("File:");
            ui.add(egui::TextEdit::singleline(&mut app.import_path_text).hint_text("path/to/results.csv"));
            open = ui.button("Load").clicked();
        });
        ui.label("…or drop a CSV file onto the window.");

        if open {
            let path = PathBuf::from(app.import_path_text.trim());
            let res = import_csv_path(&path);
            load(app, path.display().to_string(), res);
        }

        let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
        if let Some(f) = dropped.into_iter().next() {
            if let Some(bytes) = f.bytes.as_deref() {
                load(app, f.name.clone(), import_csv_bytes(bytes));
            } else if let Some(path) = f.path {
                app.import_path_text = path.display().to_string();
                let res = import_csv_path(&path);
                load(app, path.display().to_string(), res);
            }
        }

        if let Some(err) = &app.import_error {
            ui.colored_label(egui::Color32::from_rgb(255, 68, 68), format!("File processing error: {err}"));
        }

        draw_report(ui, app);
    }
}
