// src/runner.rs
//! Headless pipeline: page context → bridge → records → artifacts.
//! The CLI is a thin shell over this; the GUI drives the same pieces frame
//! by frame instead.

use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use url::Url;

use crate::{
    bridge::Bridge,
    config::options::{ExportFormat, ExportOptions},
    error::{Error, Result},
    file,
    order::OrderRecord,
    page::{self, PageEvent, PageSource},
};

/// Load `source` into a fresh page context, request one extraction pass, and
/// wait for its `ORDERS_DATA` message.
pub fn scrape_once(source: PageSource, base: Option<Url>, timeout: Duration) -> Result<Vec<OrderRecord>> {
    let (handle, events) = page::spawn(None)?;
    handle.navigate_with_base(source, base)?;

    let mut bridge = Bridge::new();
    bridge.attach(handle);
    bridge.request_extraction();

    let deadline = Instant::now() + timeout;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        let event = match events.recv_timeout(left) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => {
                return Err(Error::Timeout { secs: timeout.as_secs(), what: "ORDERS_DATA" });
            }
            Err(RecvTimeoutError::Disconnected) => return Err(Error::PageClosed),
        };

        if let PageEvent::LoadFailed { error } = &event {
            loge!("Runner: Page load failed: {error}");
        }
        if let Some(orders) = bridge.handle_event(&event) {
            return Ok(orders);
        }
    }
}

/// Write each requested format. Returns the paths written, in order.
pub fn export_all(
    opts: &ExportOptions,
    formats: &[ExportFormat],
    records: &[OrderRecord],
) -> Result<Vec<PathBuf>> {
    formats
        .iter()
        .map(|&f| file::write_artifact(opts, f, records))
        .collect()
}
