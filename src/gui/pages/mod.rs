// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;

pub mod charts;
pub mod home;
pub mod import;
pub mod lab_entry;
pub mod patients;
pub mod registration;
pub mod scraper;

/// One dashboard tab. Pages are stateless; everything lives in `App`.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Draw the page body below the tab bar.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

/// Section heading used across pages.
pub(crate) fn heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(egui::RichText::new(text).strong().size(16.0));
    ui.add_space(2.0);
}

pub(crate) fn risk_color(level: crate::model::RiskLevel) -> egui::Color32 {
    use crate::model::RiskLevel::*;
    match level {
        High => egui::Color32::from_rgb(255, 68, 68),
        Medium => egui::Color32::from_rgb(255, 107, 53),
        Low => egui::Color32::from_rgb(0, 200, 65),
    }
}
