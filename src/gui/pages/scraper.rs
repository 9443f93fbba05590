// src/gui/pages/scraper.rs

use eframe::egui;

use crate::config::consts::SCRAPE_STEM;
use crate::config::options::RowMode;
use crate::gui::components::{data_table, export_bar::{self, BarAction}};
use crate::gui::{actions, app::App};

use super::{heading, Page};

pub struct ScraperPage;
pub static PAGE: ScraperPage = ScraperPage;

impl Page for ScraperPage {
    fn title(&self) -> &'static str { "Scraper" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        heading(ui, "Hockey team table");

        let scrape = &mut app.state.options.scrape;
        ui.horizontal(|ui| {
            ui.label("URL:");
            ui.add(egui::TextEdit::singleline(&mut scrape.url).desired_width(420.0));
        });
        ui.horizontal(|ui| {
            ui.radio_value(&mut scrape.row_mode, RowMode::PerRow, "Year/Wins per row");
            ui.radio_value(&mut scrape.row_mode, RowMode::LastRowRepeated, "Repeat last row's Year/Wins");
        });

        let running = app.scrape_rx.is_some();
        let red = egui::Color32::from_rgb(220, 30, 30);
        let button = egui::Button::new(egui::RichText::new("SCRAPE").color(egui::Color32::BLACK).strong()).fill(red);
        if ui.add_enabled(!running, button).clicked() {
            actions::scrape::start(app);
        }
        if running {
            ui.spinner();
        }

        let Some(ds) = app.scraped.clone() else {
            ui.label("Nothing scraped yet");
            return;
        };

        ui.separator();
        match export_bar::draw(ui, app, "Export table") {
            Some(BarAction::Copy) => actions::copy::copy_table(app, ui.ctx(), &ds),
            Some(BarAction::Export) => actions::export::export_table(app, SCRAPE_STEM, &ds),
            None => {}
        }
        ui.label(format!("{} teams", ds.row_count()));
        data_table::draw_all(ui, "scraped_table", &ds);
    }
}
