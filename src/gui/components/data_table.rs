// src/gui/components/data_table.rs
//
// Read-only string table. Rows are addressed through `row_ix` so filtered
// views draw straight from the backing dataset.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::data::{DataSet, TableView};

const ROW_HEIGHT: f32 = 20.0;
const MAX_HEIGHT: f32 = 420.0;

pub fn draw(ui: &mut egui::Ui, id: &str, view: &TableView) {
    let cols = view
        .headers()
        .as_ref()
        .map(|h| h.len())
        .or_else(|| view.row(0).map(|r| r.len()))
        .unwrap_or(0);
    if cols == 0 {
        ui.label("No data");
        return;
    }

    let mut table = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .max_scroll_height(MAX_HEIGHT)
        .min_scrolled_height(0.0);
    for _ in 0..cols {
        table = table.column(Column::auto().at_least(48.0).resizable(true).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for ci in 0..cols {
                let label = view
                    .headers()
                    .as_ref()
                    .and_then(|h| h.get(ci).cloned())
                    .unwrap_or_else(|| format!("Col {}", ci + 1));
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(label).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.len(), |mut row| {
                let cells = view.row(row.index()).unwrap_or(&[]);
                for ci in 0..cols {
                    row.col(|ui| {
                        ui.label(cells.get(ci).map(String::as_str).unwrap_or(""));
                    });
                }
            });
        });
}

/// Whole dataset, unfiltered.
pub fn draw_all(ui: &mut egui::Ui, id: &str, ds: &DataSet) {
    draw(ui, id, &TableView::all(ds));
}
