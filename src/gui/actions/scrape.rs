// src/gui/actions/scrape.rs
use crate::{gui::app::App, page::PageSource};

/// Scrape button. The bridge decides between now and on-ready.
pub fn scrape(app: &mut App) {
    if app.bridge.surface().is_none() {
        logd!("Scrape: Clicked, but there's no page");
        app.status("No page to scrape");
        return;
    }

    logf!("Scrape: Begin ready={} source={}", app.bridge.is_ready(), app.page.source);
    app.bridge.request_extraction();

    if app.bridge.extraction_pending() {
        app.status("Waiting for the page to finish loading…");
    } else {
        app.status("Scraping…");
    }
}

/// Address bar → new document in the page context.
pub fn navigate(app: &mut App) {
    let Some(source) = PageSource::parse(&app.state.gui.address_text) else {
        app.status("Enter a URL or a saved page path");
        return;
    };

    let Some(handle) = app.bridge.surface() else {
        app.status("No page");
        return;
    };

    logf!("UI: Navigate → {source}");
    let base = app.state.options.scrape.base_url.clone();
    let sent = handle.navigate_with_base(source.clone(), base);
    match sent {
        Ok(()) => app.state.options.scrape.start = Some(source),
        Err(e) => {
            loge!("UI: Navigate failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn open_devtools(app: &mut App) {
    app.state.gui.devtools_open = true;
    app.bridge.open_devtools();
    logd!("UI: Dev tools opened");
}
