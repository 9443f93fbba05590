// src/gui/pages/home.rs
//
// Overview: cohort generator controls and headline numbers for the whole cohort.

use eframe::egui;

use crate::analysis::summarize;
use crate::gui::{actions, app::App};
use crate::model::Diagnosis;

use super::{heading, Page};

pub struct HomePage;
pub static PAGE: HomePage = HomePage;

impl Page for HomePage {
    fn title(&self) -> &'static str { "Overview" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        heading(ui, "Synthetic thyroid cohort");

        let generator = &mut app.state.options.generator;
        let mut regenerate = false;
        ui.horizontal(|ui| {
            ui.label("Seed:");
            ui.add(egui::DragValue::new(&mut generator.seed));
            ui.label("Patients:");
            ui.add(egui::DragValue::new(&mut generator.count).range(1..=100_000));
            regenerate = ui.button("Regenerate").clicked();
        });
        if regenerate {
            app.regenerate();
        }

        let all: Vec<usize> = (0..app.records.len()).collect();
        let summary = summarize(&app.records, &all);

        egui::Grid::new("overview_metrics").num_columns(2).striped(true).show(ui, |ui| {
            ui.label("Total patients");
            ui.label(summary.total.to_string());
            ui.end_row();
            ui.label("Average TSH");
            ui.label(summary.avg_tsh.map(|t| format!("{t:.2} mIU/L")).unwrap_or_else(|| s!("-")));
            ui.end_row();
            ui.label("Abnormal diagnosis");
            ui.label(summary.abnormal.to_string());
            ui.end_row();
            ui.label("High risk");
            ui.label(summary.high_risk.to_string());
            ui.end_row();
        });

        heading(ui, "Diagnoses");
        egui::Grid::new("overview_diagnoses").num_columns(2).show(ui, |ui| {
            for d in Diagnosis::ALL {
                ui.label(d.label());
                ui.label(app.records.iter().filter(|r| r.diagnosis == d).count().to_string());
                ui.end_row();
            }
        });

        ui.add_space(8.0);
        if ui.button("Export sample data").clicked() {
            actions::export::export_sample(app);
        }
    }
}
