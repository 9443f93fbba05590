// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    analysis::{filter_indices, Correlation, PatientFilter},
    classify::LabEntry,
    config::state::AppState,
    data::DataSet,
    error::ScrapeError,
    form::{RegistrationForm, ScreeningOutcome, FormError},
    generate,
    import::ImportReport,
    model::PatientRecord,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Thyroid Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Chart selector on the charts page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    TshDistribution,
    Correlation,
    RiskByDiagnosis,
    Demographics,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] =
        [ChartKind::TshDistribution, ChartKind::Correlation, ChartKind::RiskByDiagnosis, ChartKind::Demographics];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::TshDistribution => "TSH Distribution",
            ChartKind::Correlation => "Hormone Correlation",
            ChartKind::RiskByDiagnosis => "Risk by Diagnosis",
            ChartKind::Demographics => "Demographics",
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // generated cohort + current filtered view
    pub records: Vec<PatientRecord>,
    pub patients_table: DataSet,
    pub filter: PatientFilter,
    pub row_ix: Vec<usize>,

    // lab entry + charts
    pub lab: LabEntry,
    pub chart: ChartKind,
    pub hist_bins: usize,
    pub correlation: Correlation,
    pub show_normal_range: bool,
    pub group_by_age: bool,

    // registration
    pub form: RegistrationForm,
    pub birth_ymd: (i32, u32, u32),
    pub form_result: Option<Result<ScreeningOutcome, Vec<FormError>>>,

    // import
    pub import_path_text: String,
    pub imported: Option<(DataSet, ImportReport)>,
    pub import_error: Option<String>,
    pub show_hormone_stats: bool,
    pub show_missing: bool,

    // scraper
    pub scraped: Option<DataSet>,
    pub scrape_rx: Option<Receiver<Result<DataSet, ScrapeError>>>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");
        let records = match generate::generate(&state.options.generator) {
            Ok(r) => r,
            Err(e) => {
                loge!("Init: generator failed: {}", e);
                status = format!("Generator error: {e}");
                Vec::new()
            }
        };
        logf!("Init: seed={} patients={}", state.options.generator.seed, records.len());

        let filter = PatientFilter::spanning(&records);
        let row_ix = filter_indices(&records, &filter);
        let patients_table = DataSet::from_patients(&records);

        let mut state = state;
        state.gui.out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        Self {
            state,
            records,
            patients_table,
            filter,
            row_ix,
            lab: LabEntry::default(),
            chart: ChartKind::default(),
            hist_bins: 25,
            correlation: Correlation::default(),
            show_normal_range: true,
            group_by_age: true,
            form: RegistrationForm::default(),
            birth_ymd: (1980, 1, 1),
            form_result: None,
            import_path_text: s!(),
            imported: None,
            import_error: None,
            show_hormone_stats: true,
            show_missing: false,
            scraped: None,
            scrape_rx: None,
            status: Arc::new(Mutex::new(status)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Regenerate the cohort from the generator options; resets the filter.
    pub fn regenerate(&mut self) {
        match generate::generate(&self.state.options.generator) {
            Ok(records) => {
                logf!("Generate: seed={} count={}", self.state.options.generator.seed, records.len());
                self.records = records;
                self.patients_table = DataSet::from_patients(&self.records);
                self.filter = PatientFilter::spanning(&self.records);
                self.refilter();
                self.status(format!("Generated {} patients", self.records.len()));
            }
            Err(e) => {
                loge!("Generate: {}", e);
                self.status(format!("Generator error: {e}"));
            }
        }
    }

    pub fn refilter(&mut self) {
        self.row_ix = filter_indices(&self.records, &self.filter);
        logd!("Filter: {} of {} rows", self.row_ix.len(), self.records.len());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::scrape::poll(self);
        if self.scrape_rx.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
            ui.separator();

            let page = self.current_page();
            egui::ScrollArea::vertical()
                .id_salt(("page", self.current_index()))
                .show(ui, |ui| page.draw(ui, self));
        });
    }
}
