// src/gui/components/export_bar.rs
//
// Format, header toggle, output directory and the Copy/Export buttons.
// The bar only reports which button was pressed; the page decides what to export.

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::gui::app::App;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarAction {
    Copy,
    Export,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App, export_label: &str) -> Option<BarAction> {
    let mut action = None;
    let export = &mut app.state.options.export;
    let gui = &mut app.state.gui;

    ui.horizontal(|ui| {
        let before = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != before {
            logf!("UI: Export format → {:?}", export.format);
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.label("Output dir:");
        if ui
            .add(egui::TextEdit::singleline(&mut gui.out_dir_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", gui.out_dir_text);
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            action = Some(BarAction::Copy);
        }
        if ui.button(export_label).clicked() {
            action = Some(BarAction::Export);
        }
    });

    action
}
