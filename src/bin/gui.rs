// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use thyro_dash::{config::state::GuiState, gui};

/// 64×64 butterfly-ish thyroid glyph: two green lobes joined by an isthmus.
fn app_icon() -> IconData {
    const N: u32 = 64;
    let lobe = |x: f32, y: f32, cx: f32| ((x - cx) / 14.0).powi(2) + ((y - 32.0) / 22.0).powi(2) <= 1.0;
    let img = RgbaImage::from_fn(N, N, |x, y| {
        let (xf, yf) = (x as f32, y as f32);
        let isthmus = (26.0..=38.0).contains(&xf) && (34.0..=42.0).contains(&yf);
        if lobe(xf, yf, 18.0) || lobe(xf, yf, 46.0) || isthmus {
            Rgba([0, 200, 65, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let (width, height) = img.dimensions();
    IconData { rgba: img.into_raw(), width, height }
}

fn main() {
    let gui = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui.window_w as f32, gui.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
