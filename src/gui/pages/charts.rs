// src/gui/pages/charts.rs
//
// Aggregates behind the dashboard charts, shown as tables and bars over the
// filtered view from the Patients tab.

use eframe::egui;

use crate::analysis::{
    age_band_diagnosis_counts, correlation_matrix, gender_diagnosis_counts, risk_diagnosis_counts,
    tsh_histogram, Correlation, CORRELATION_FIELDS,
};
use crate::classify::{TSH_HIGH, TSH_LOW};
use crate::gui::app::{App, ChartKind};
use crate::model::{Diagnosis, Gender, RiskLevel};

use super::{heading, Page};

pub struct ChartsPage;
pub static PAGE: ChartsPage = ChartsPage;

fn bar(ui: &mut egui::Ui, label: &str, count: usize, max: usize) {
    ui.horizontal(|ui| {
        ui.add_sized([120.0, 18.0], egui::Label::new(label));
        let frac = if max == 0 { 0.0 } else { count as f32 / max as f32 };
        ui.add(egui::ProgressBar::new(frac).desired_width(320.0).text(count.to_string()));
    });
}

fn crosstab_grid<A: Copy + Ord, B: Copy + Ord>(
    ui: &mut egui::Ui,
    id: &str,
    rows: &[(A, &'static str)],
    cols: &[(B, &'static str)],
    counts: &std::collections::BTreeMap<(A, B), usize>,
) {
    egui::Grid::new(id).striped(true).show(ui, |ui| {
        ui.label("");
        for (_, c) in cols {
            ui.label(egui::RichText::new(*c).strong());
        }
        ui.end_row();
        for (a, r) in rows {
            ui.label(egui::RichText::new(*r).strong());
            for (b, _) in cols {
                ui.label(counts.get(&(*a, *b)).copied().unwrap_or(0).to_string());
            }
            ui.end_row();
        }
    });
}

fn diagnosis_cols() -> Vec<(Diagnosis, &'static str)> {
    Diagnosis::ALL.iter().map(|d| (*d, d.label())).collect()
}

impl Page for ChartsPage {
    fn title(&self) -> &'static str { "Charts" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Chart")
                .selected_text(app.chart.label())
                .show_ui(ui, |ui| {
                    for k in ChartKind::ALL {
                        ui.selectable_value(&mut app.chart, k, k.label());
                    }
                });
            ui.label(format!("{} patients in view", app.row_ix.len()));
        });

        match app.chart {
            ChartKind::TshDistribution => {
                ui.horizontal(|ui| {
                    ui.add(egui::Slider::new(&mut app.hist_bins, 10..=50).text("Histogram bins"));
                    ui.checkbox(&mut app.show_normal_range, "Show normal range");
                });
                heading(ui, "TSH distribution");
                let bins = tsh_histogram(&app.records, &app.row_ix, app.hist_bins);
                let max = bins.iter().map(|b| b.count).max().unwrap_or(0);
                for b in &bins {
                    let in_range = b.hi > TSH_LOW && b.lo < TSH_HIGH;
                    let label = format!("{:.1}-{:.1}", b.lo, b.hi);
                    if app.show_normal_range && in_range {
                        ui.scope(|ui| {
                            ui.visuals_mut().selection.bg_fill = egui::Color32::from_rgb(0, 160, 60);
                            bar(ui, &label, b.count, max);
                        });
                    } else {
                        bar(ui, &label, b.count, max);
                    }
                }
            }
            ChartKind::Correlation => {
                ui.horizontal(|ui| {
                    ui.label("Method:");
                    ui.radio_value(&mut app.correlation, Correlation::Pearson, Correlation::Pearson.label());
                    ui.radio_value(&mut app.correlation, Correlation::Spearman, Correlation::Spearman.label());
                });
                heading(ui, "Hormone correlation matrix");
                let m = correlation_matrix(&app.records, &app.row_ix, app.correlation);
                egui::Grid::new("correlation").striped(true).show(ui, |ui| {
                    ui.label("");
                    for f in CORRELATION_FIELDS {
                        ui.label(egui::RichText::new(f).strong());
                    }
                    ui.end_row();
                    for (f, row) in CORRELATION_FIELDS.iter().zip(&m) {
                        ui.label(egui::RichText::new(*f).strong());
                        for v in row {
                            ui.label(if v.is_nan() { s!("-") } else { format!("{v:.2}") });
                        }
                        ui.end_row();
                    }
                });
            }
            ChartKind::RiskByDiagnosis => {
                heading(ui, "Risk level by diagnosis");
                let counts = risk_diagnosis_counts(&app.records, &app.row_ix);
                let rows: Vec<_> = RiskLevel::ALL.iter().map(|r| (*r, r.label())).collect();
                crosstab_grid(ui, "risk_by_diagnosis", &rows, &diagnosis_cols(), &counts);
            }
            ChartKind::Demographics => {
                ui.checkbox(&mut app.group_by_age, "Group by age ranges");
                heading(ui, "Gender by diagnosis");
                let counts = gender_diagnosis_counts(&app.records, &app.row_ix);
                let rows: Vec<_> = Gender::ALL.iter().map(|g| (*g, g.label())).collect();
                crosstab_grid(ui, "gender_by_diagnosis", &rows, &diagnosis_cols(), &counts);

                if app.group_by_age {
                    heading(ui, "Age band by diagnosis");
                    let counts = age_band_diagnosis_counts(&app.records, &app.row_ix);
                    let mut bands: Vec<u32> = counts.keys().map(|(b, _)| *b).collect();
                    bands.dedup();
                    let labels: Vec<String> = bands.iter().map(|b| format!("{}-{}", b, b + 9)).collect();
                    egui::Grid::new("age_by_diagnosis").striped(true).show(ui, |ui| {
                        ui.label("");
                        for d in Diagnosis::ALL {
                            ui.label(egui::RichText::new(d.label()).strong());
                        }
                        ui.end_row();
                        for (band, label) in bands.iter().zip(&labels) {
                            ui.label(egui::RichText::new(label).strong());
                            for d in Diagnosis::ALL {
                                ui.label(counts.get(&(*band, d)).copied().unwrap_or(0).to_string());
                            }
                            ui.end_row();
                        }
                    });
                }
            }
        }
    }
}
