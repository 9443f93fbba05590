// src/gui/pages/lab_entry.rs
//
// Manual lab entry. Diagnosis and risk are recomputed from the inputs on
// every frame.

use eframe::egui;

use crate::classify::lab::{AGE_INPUT, LAB_TABLE_HEADERS, TSH_INPUT};
use crate::data::DataSet;
use crate::gui::{app::App, components::data_table};
use crate::model::{Gender, RiskLevel};

use super::{heading, risk_color, Page};

pub struct LabEntryPage;
pub static PAGE: LabEntryPage = LabEntryPage;

fn yes_no(ui: &mut egui::Ui, value: &mut bool, label: &str) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.radio_value(value, false, "No");
        ui.radio_value(value, true, "Yes");
    });
}

impl Page for LabEntryPage {
    fn title(&self) -> &'static str { "Lab Entry" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let lab = &mut app.lab;

        ui.columns(2, |cols| {
            let ui = &mut cols[0];
            heading(ui, "Patient");
            ui.horizontal(|ui| {
                ui.label("Patient ID");
                ui.add(egui::TextEdit::singleline(&mut lab.patient_id).hint_text("THY-XXXX"));
            });
            ui.horizontal(|ui| {
                ui.label("Age");
                ui.add(egui::DragValue::new(&mut lab.age).range(AGE_INPUT));
            });
            egui::ComboBox::from_label("Gender")
                .selected_text(lab.gender.label())
                .show_ui(ui, |ui| {
                    for g in [Gender::Female, Gender::Male] {
                        ui.selectable_value(&mut lab.gender, g, g.label());
                    }
                });

            heading(ui, "Hormone levels");
            ui.add(egui::Slider::new(&mut lab.tsh, TSH_INPUT).step_by(0.1).text("TSH (mIU/L)"));
            ui.add(egui::Slider::new(&mut lab.t3, 0.5..=4.0).step_by(0.1).text("T3 (ng/dL)"));
            ui.add(egui::Slider::new(&mut lab.t4, 4.0..=18.0).step_by(0.1).text("T4 (μg/dL)"));
            ui.add(egui::Slider::new(&mut lab.t4u, 0.6..=1.5).step_by(0.01).text("T4U"));
            ui.add(egui::Slider::new(&mut lab.fti, 4.0..=18.0).step_by(0.1).text("FTI"));

            heading(ui, "Clinical indicators");
            yes_no(ui, &mut lab.goitre, "Goitre present?");
            yes_no(ui, &mut lab.tumor_history, "Tumor history?");
            yes_no(ui, &mut lab.hypopituitary, "Hypopituitary?");
            yes_no(ui, &mut lab.psych_symptoms, "Psychological symptoms?");

            let ui = &mut cols[1];
            let diagnosis = lab.diagnosis();
            let risk = lab.assess();

            heading(ui, "Diagnosis");
            let color = risk_color(if diagnosis.is_abnormal() { RiskLevel::High } else { RiskLevel::Low });
            ui.label(egui::RichText::new(diagnosis.banner()).color(color).strong().size(20.0));
            ui.label(format!("TSH status: {}", diagnosis.status()));

            heading(ui, "Risk assessment");
            ui.label(egui::RichText::new(risk.banner()).color(risk_color(risk.level)).strong().size(18.0));
            ui.label(format!("Risk score: {}/{}", risk.score, risk.max));

            heading(ui, "Lab results");
            let table = DataSet::new(headers!(LAB_TABLE_HEADERS), lab.result_rows());
            data_table::draw_all(ui, "lab_results", &table);

            heading(ui, "Recommendations");
            for r in lab.recommendations() {
                ui.label(format!("• {r}"));
            }
        });
    }
}
