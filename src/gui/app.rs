// src/gui/app.rs
use std::sync::{Arc, mpsc::Receiver};

use eframe::egui;

use crate::{
    bridge::Bridge,
    config::state::{AppState, Tab},
    error::{Error, Result},
    extract::SelectorReport,
    page::{self, PageEvent, PageHandle},
    present::Presenter,
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<()> {
    eframe::run_native(
        "AliExpress Orders",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )
    .map_err(|e| Error::Gui(e.to_string()))
}

/// What the host knows about the embedded page, built from its events.
#[derive(Clone, Debug, Default)]
pub struct PageView {
    pub source: String,
    pub title: String,
    pub outline: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PageView {
    fn observe(&mut self, event: &PageEvent) {
        match event {
            PageEvent::DidStartLoading { source } => {
                *self = PageView { source: source.clone(), loading: true, ..PageView::default() };
            }
            PageEvent::LoadFailed { error } => self.error = Some(error.clone()),
            PageEvent::DomReady { title, outline } => {
                self.loading = false;
                self.title = title.clone();
                self.outline = outline.clone();
            }
            PageEvent::Message(_) | PageEvent::Inspection(_) => {}
        }
    }

    /// Status text for an event already passed to `observe`. A load error
    /// stays on screen until the next navigation.
    fn status_line(&self, event: &PageEvent, extraction_pending: bool) -> Option<String> {
        match event {
            PageEvent::DidStartLoading { source } => Some(format!("Loading {source}…")),
            PageEvent::LoadFailed { error } => Some(format!("Load failed: {error}")),
            PageEvent::DomReady { .. } if self.error.is_none() && !extraction_pending => {
                Some(s!("Page ready"))
            }
            _ => None,
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // embedded page + readiness
    pub bridge: Bridge<PageHandle>,
    events: Option<Receiver<PageEvent>>,
    pub page: PageView,

    // records + display table
    pub presenter: Presenter,

    // last dev tools report
    pub report: Option<SelectorReport>,

    pub status: String,
}

impl App {
    pub fn new(ctx: &egui::Context, mut state: AppState) -> Self {
        let mut bridge = Bridge::new();
        let mut events = None;
        let mut status = s!("Idle");

        let repaint_ctx = ctx.clone();
        let waker: page::Waker = Arc::new(move || repaint_ctx.request_repaint());

        match page::spawn(Some(waker)) {
            Ok((handle, rx)) => {
                if let Some(start) = state.options.scrape.start.clone() {
                    state.gui.address_text = start.to_string();
                    let base = state.options.scrape.base_url.clone();
                    if let Err(e) = handle.navigate_with_base(start, base) {
                        loge!("Init: Start page not sent: {e}");
                    }
                }
                bridge.attach(handle);
                events = Some(rx);
            }
            Err(e) => {
                loge!("Init: Page context failed to start: {e}");
                status = format!("Error: {e}");
            }
        }

        state.gui.out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();
        logf!("Init: tab={:?} out={}", state.gui.current_tab, state.gui.out_dir_text);

        Self {
            state,
            bridge,
            events,
            page: PageView::default(),
            presenter: Presenter::new(),
            report: None,
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_tab(&self) -> Tab { self.state.gui.current_tab }

    #[inline]
    pub fn set_tab(&mut self, tab: Tab) { self.state.gui.current_tab = tab; }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Drain page events in delivery order.
    fn pump_events(&mut self) {
        while let Some(event) = self.events.as_ref().and_then(|rx| rx.try_recv().ok()) {
            self.page.observe(&event);

            if let PageEvent::Inspection(report) = &event {
                self.report = Some(report.clone());
            }
            if let Some(msg) = self.page.status_line(&event, self.bridge.extraction_pending()) {
                self.status(msg);
            }

            if let Some(orders) = self.bridge.handle_event(&event) {
                self.status(format!("Scraped {} order(s)", orders.len()));
                self.presenter.replace(orders);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_events();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            components::action_buttons::draw(ui, self);
            ui.separator();
            components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.page.loading {
                    ui.add(egui::Spinner::new());
                }
                ui.label(&self.status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab() {
            Tab::Store => components::surface::draw(ui, self),
            Tab::Catalog => components::data_table::draw(ui, self),
        });

        components::devtools::draw(ctx, self);
    }
}
