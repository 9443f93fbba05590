// src/gui/pages/registration.rs
//
// Patient registration form. Nothing is scored until Submit; a rejected
// submit lists every failed rule.

use chrono::{Local, NaiveDate};
use eframe::egui;

use crate::classify::screening::{Fatigue, HeartRate, TemperatureSensitivity, WeightChange};
use crate::form::{submit, FormGender, OptionalLab};
use crate::gui::app::App;

use super::{heading, risk_color, Page};

pub struct RegistrationPage;
pub static PAGE: RegistrationPage = RegistrationPage;

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).hint_text(hint));
    });
}

fn radio_row<T: Copy + PartialEq>(ui: &mut egui::Ui, label: &str, value: &mut T, all: &[T], text: impl Fn(T) -> &'static str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(label);
        for &v in all {
            ui.radio_value(value, v, text(v));
        }
    });
}

fn optional_lab(ui: &mut egui::Ui, label: &str, unit: &str, lab: &mut OptionalLab, max: f64) {
    ui.horizontal(|ui| {
        ui.checkbox(&mut lab.available, format!("{label} result available"));
        if lab.available {
            ui.add(egui::DragValue::new(&mut lab.value).range(0.0..=max).speed(0.1).suffix(format!(" {unit}")));
        }
    });
}

impl Page for RegistrationPage {
    fn title(&self) -> &'static str { "Registration" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let form = &mut app.form;

        heading(ui, "Personal information");
        text_row(ui, "First name*", &mut form.first_name, "Enter patient's first name");
        text_row(ui, "Last name*", &mut form.last_name, "Enter patient's last name");
        text_row(ui, "Patient ID*", &mut form.patient_id, "THY-XXXX");
        ui.horizontal(|ui| {
            let (y, m, d) = &mut app.birth_ymd;
            ui.label("Date of birth*");
            ui.add(egui::DragValue::new(y).range(1900..=2100).prefix("Y "));
            ui.add(egui::DragValue::new(m).range(1..=12).prefix("M "));
            ui.add(egui::DragValue::new(d).range(1..=31).prefix("D "));
        });
        egui::ComboBox::from_label("Gender*")
            .selected_text(form.gender.label())
            .show_ui(ui, |ui| {
                for g in FormGender::ALL {
                    ui.selectable_value(&mut form.gender, g, g.label());
                }
            });
        text_row(ui, "Phone", &mut form.phone, "+1 (555) 123-4567");
        text_row(ui, "Emergency contact", &mut form.emergency_contact, "Name and phone");
        text_row(ui, "Insurance ID", &mut form.insurance_id, "Insurance number");

        heading(ui, "Symptoms");
        let sy = &mut form.symptoms;
        radio_row(ui, "Unusual fatigue?", &mut sy.fatigue, &Fatigue::ALL, Fatigue::label);
        radio_row(ui, "Recent weight changes?", &mut sy.weight_change, &WeightChange::ALL, WeightChange::label);
        radio_row(ui, "Heart rate irregularities?", &mut sy.heart_rate, &HeartRate::ALL, HeartRate::label);
        radio_row(ui, "Temperature sensitivity?", &mut sy.temperature, &TemperatureSensitivity::ALL, TemperatureSensitivity::label);

        heading(ui, "Medical history");
        ui.checkbox(&mut form.family_history, "Family history of thyroid disease");
        ui.checkbox(&mut form.previous_thyroid, "Previous thyroid problems");
        ui.checkbox(&mut form.medications, "Currently taking thyroid medications");
        ui.checkbox(&mut form.autoimmune, "History of autoimmune disorders");

        heading(ui, "Recent lab results");
        optional_lab(ui, "TSH", "mIU/L", &mut form.tsh, 50.0);
        optional_lab(ui, "T3", "ng/dL", &mut form.t3, 10.0);
        optional_lab(ui, "T4", "μg/dL", &mut form.t4, 20.0);

        heading(ui, "Risk factors");
        ui.checkbox(&mut form.smoking, "Current or former smoker");
        ui.checkbox(&mut form.pregnancy, "Currently pregnant or recently gave birth");
        ui.checkbox(&mut form.radiation, "History of radiation exposure");
        ui.checkbox(&mut form.iodine_deficiency, "Lives in iodine-deficient area");

        ui.label("Additional notes / symptoms");
        ui.add(egui::TextEdit::multiline(&mut form.notes).desired_rows(3));

        heading(ui, "Consent");
        ui.checkbox(&mut form.consent_treatment, "I consent to thyroid screening and treatment*");
        ui.checkbox(&mut form.consent_data, "I consent to data storage for medical records*");
        ui.checkbox(&mut form.consent_contact, "I consent to follow-up contact if needed*");
        ui.checkbox(&mut form.newsletter, "Send me thyroid health information");

        ui.add_space(8.0);
        if ui.button("SUBMIT PATIENT RECORD").clicked() {
            let (y, m, d) = app.birth_ymd;
            match NaiveDate::from_ymd_opt(y, m, d) {
                Some(date) => {
                    app.form.birth_date = date;
                    app.form_result = Some(submit(&app.form, Local::now().date_naive()));
                }
                None => app.status(format!("Invalid date of birth: {y}-{m:02}-{d:02}")),
            }
        }

        match &app.form_result {
            Some(Err(errors)) => {
                for e in errors {
                    ui.colored_label(egui::Color32::from_rgb(255, 68, 68), format!("✗ {e}"));
                }
            }
            Some(Ok(out)) => {
                heading(ui, "Patient record summary");
                ui.label(format!("Patient: {} (ID: {})", out.full_name, out.patient_id));
                ui.label(format!("Age: {} years", out.age_years));
                ui.label(format!("Gender: {}", out.gender.label()));

                let risk = out.assessment.risk;
                ui.label(egui::RichText::new(risk.banner()).color(risk_color(risk.level)).strong().size(18.0));
                ui.label(format!("Risk score: {}/{}", risk.score, risk.max));

                if !out.lab_lines.is_empty() {
                    ui.label(egui::RichText::new("Lab results").strong());
                    for l in &out.lab_lines {
                        ui.label(l);
                    }
                }
                ui.label(egui::RichText::new("Recommendations").strong());
                for r in out.recommendations() {
                    ui.label(format!("• {r}"));
                }
            }
            None => {}
        }
    }
}
