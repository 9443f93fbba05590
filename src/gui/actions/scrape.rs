// src/gui/actions/scrape.rs
//
// The one blocking GET runs on a worker thread; the result comes back over a
// channel and is picked up by `poll` on the next frame.

use std::{sync::mpsc, thread};

use crate::{gui::app::App, gui::progress::GuiProgress, scrape};

pub fn start(app: &mut App) {
    if app.scrape_rx.is_some() {
        app.status("Scrape already running");
        return;
    }
    let opts = app.state.options.scrape.clone();
    logf!("Scrape: Begin url={} mode={:?}", opts.url, opts.row_mode);

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = scrape::collect_teams(&opts, Some(&mut prog));
        let _ = tx.send(res);
    });
    app.scrape_rx = Some(rx);
}

pub fn poll(app: &mut App) {
    let Some(rx) = app.scrape_rx.as_ref() else { return };
    let res = match rx.try_recv() {
        Ok(res) => res,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => {
            app.scrape_rx = None;
            app.status("Scrape worker stopped");
            return;
        }
    };
    app.scrape_rx = None;

    match res {
        Ok(ds) => {
            logf!("Scrape: OK rows={}", ds.row_count());
            app.status(format!("Scraped {} teams", ds.row_count()));
            app.scraped = Some(ds);
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
