// src/page/context.rs
use std::fs;
use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};
use std::thread;

use scraper::Html;
use url::Url;

use super::{PageCommand, PageEvent, PageMessage, PageSource};
use crate::{
    bridge::Surface,
    config::consts::OUTLINE_LINES,
    core::{html, net},
    error::{Error, Result},
    extract::{self, ExtractRules},
};

/// Called after every posted event (e.g. to request a GUI repaint).
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Host-side handle to a running page context. Dropping it closes the page.
pub struct PageHandle {
    tx: Sender<PageCommand>,
}

impl PageHandle {
    pub fn navigate(&self, source: PageSource) -> Result<()> {
        self.navigate_with_base(source, None)
    }

    pub fn navigate_with_base(&self, source: PageSource, base: Option<Url>) -> Result<()> {
        self.send(PageCommand::Navigate { source, base })
    }

    pub fn extract(&self) -> Result<()> {
        self.send(PageCommand::Extract)
    }

    pub fn inspect(&self) -> Result<()> {
        self.send(PageCommand::Inspect)
    }

    fn send(&self, cmd: PageCommand) -> Result<()> {
        self.tx.send(cmd).map_err(|_| Error::PageClosed)
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        let _ = self.tx.send(PageCommand::Close);
    }
}

impl Surface for PageHandle {
    fn run_extractor(&self) {
        if let Err(e) = self.extract() {
            loge!("Page: Extract not delivered: {e}");
        }
    }

    fn inspect(&self) {
        if let Err(e) = PageHandle::inspect(self) {
            loge!("Page: Inspect not delivered: {e}");
        }
    }
}

/// Start a page context on its own thread. It begins on an empty document.
pub fn spawn(waker: Option<Waker>) -> Result<(PageHandle, Receiver<PageEvent>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<PageCommand>();
    let (ev_tx, ev_rx) = mpsc::channel::<PageEvent>();

    thread::Builder::new()
        .name(s!("page-context"))
        .spawn(move || PageContext::new(ev_tx, waker).run(cmd_rx))?;

    Ok((PageHandle { tx: cmd_tx }, ev_rx))
}

/// Lives on the page thread only; `Html` never crosses it.
struct PageContext {
    events: Sender<PageEvent>,
    waker: Option<Waker>,
    doc: Html,
    base: Option<Url>,
    rules: ExtractRules,
}

impl PageContext {
    fn new(events: Sender<PageEvent>, waker: Option<Waker>) -> Self {
        Self {
            events,
            waker,
            doc: Html::new_document(),
            base: None,
            rules: ExtractRules::default(),
        }
    }

    fn run(mut self, commands: Receiver<PageCommand>) {
        logd!("Page: Context started");
        for cmd in commands {
            let alive = match cmd {
                PageCommand::Navigate { source, base } => self.load(source, base),
                PageCommand::Extract => self.extract(),
                PageCommand::Inspect => {
                    let report = extract::inspect(&self.doc, &self.rules);
                    self.post(PageEvent::Inspection(report))
                }
                PageCommand::Close => false,
            };
            if !alive {
                break;
            }
        }
        logd!("Page: Context closed");
    }

    /// Send to the host. Returns false once the host has gone away.
    fn post(&self, event: PageEvent) -> bool {
        let delivered = self.events.send(event).is_ok();
        if let Some(wake) = &self.waker {
            wake();
        }
        delivered
    }

    fn load(&mut self, source: PageSource, base: Option<Url>) -> bool {
        logf!("Page: Navigate → {source}");
        if !self.post(PageEvent::DidStartLoading { source: source.to_string() }) {
            return false;
        }

        self.doc = match fetch(&source) {
            Ok(text) => Html::parse_document(&text),
            Err(e) => {
                loge!("Page: Load failed {source}: {e}");
                if !self.post(PageEvent::LoadFailed { error: e.to_string() }) {
                    return false;
                }
                Html::new_document()
            }
        };

        let location = base.or_else(|| source.location());
        self.base = html::document_base(&self.doc, location.as_ref());

        self.post(PageEvent::DomReady {
            title: html::document_title(&self.doc),
            outline: html::text_outline(&self.doc, OUTLINE_LINES),
        })
    }

    fn extract(&mut self) -> bool {
        let orders = extract::extract_orders(&self.doc, self.base.as_ref(), &self.rules);
        logf!("Page: Extraction pass → {} order(s)", orders.len());
        self.post(PageEvent::Message(PageMessage::OrdersData { orders }.to_value()))
    }
}

fn fetch(source: &PageSource) -> Result<String> {
    match source {
        PageSource::Url(url) => net::http_get(url),
        PageSource::File(path) => Ok(fs::read_to_string(path)?),
        PageSource::Inline(html) => Ok(html.clone()),
    }
}
