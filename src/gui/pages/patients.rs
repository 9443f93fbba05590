// src/gui/pages/patients.rs
//
// Data analysis: sidebar-style filters, metrics for the filtered view, the
// table itself and export of the view.

use eframe::egui;

use crate::analysis::summarize;
use crate::config::consts::EXPORT_PREFIX;
use crate::data::TableView;
use crate::gui::components::{data_table, export_bar::{self, BarAction}};
use crate::gui::{actions, app::App};
use crate::model::{Diagnosis, Gender, RiskLevel};

use super::{heading, Page};

pub struct PatientsPage;
pub static PAGE: PatientsPage = PatientsPage;

/// Checkbox per value; returns true when any box changed.
fn set_checkboxes<T: Copy + Ord>(
    ui: &mut egui::Ui,
    set: &mut std::collections::BTreeSet<T>,
    all: &[T],
    label: impl Fn(T) -> &'static str,
) -> bool {
    let mut changed = false;
    for &v in all {
        let mut on = set.contains(&v);
        if ui.checkbox(&mut on, label(v)).changed() {
            if on { set.insert(v); } else { set.remove(&v); }
            changed = true;
        }
    }
    changed
}

impl Page for PatientsPage {
    fn title(&self) -> &'static str { "Patients" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        heading(ui, "Filters");

        let mut changed = false;
        let f = &mut app.filter;
        ui.horizontal(|ui| {
            ui.label("Age:");
            changed |= ui.add(egui::DragValue::new(&mut f.age_min).range(0..=f.age_max)).changed();
            ui.label("to");
            changed |= ui.add(egui::DragValue::new(&mut f.age_max).range(f.age_min..=120)).changed();
        });
        ui.horizontal(|ui| {
            ui.label("Gender:");
            changed |= set_checkboxes(ui, &mut f.genders, &Gender::ALL, Gender::label);
        });
        ui.horizontal(|ui| {
            ui.label("Diagnosis:");
            changed |= set_checkboxes(ui, &mut f.diagnoses, &Diagnosis::ALL, Diagnosis::label);
        });
        ui.horizontal(|ui| {
            ui.label("Risk level:");
            changed |= set_checkboxes(ui, &mut f.risk_levels, &RiskLevel::ALL, RiskLevel::label);
        });
        if changed {
            app.refilter();
        }

        let summary = summarize(&app.records, &app.row_ix);
        ui.horizontal(|ui| {
            ui.label(format!("Patients: {}", summary.total));
            ui.separator();
            let avg = summary.avg_tsh.map(|t| format!("{t:.2}")).unwrap_or_else(|| s!("-"));
            ui.label(format!("Avg TSH: {avg}"));
            ui.separator();
            ui.label(format!("Abnormal: {}", summary.abnormal));
            ui.separator();
            ui.label(format!("High risk: {}", summary.high_risk));
        });

        ui.separator();
        match export_bar::draw(ui, app, "Export filtered") {
            Some(BarAction::Copy) => actions::copy::copy_patients(app, ui.ctx()),
            Some(BarAction::Export) => actions::export::export_filtered(app),
            None => {}
        }
        ui.label(format!("Files are named {EXPORT_PREFIX}_YYYYMMDD_HHMMSS.<ext>"));

        ui.separator();
        let view = TableView::from_indices(&app.patients_table, app.row_ix.clone());
        data_table::draw(ui, "patients_table", &view);
    }
}
