// src/page/mod.rs
//! # Embedded page context
//!
//! The "embedded surface": a worker thread that loads one page at a time,
//! owns its parsed DOM, and runs scripts (extraction, inspection) against it.
//! The host never touches the DOM. It sends [`PageCommand`]s through a
//! [`PageHandle`] and receives [`PageEvent`]s on a one-way channel, in the
//! order the page posted them.

pub mod context;
pub mod message;

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use url::Url;

use crate::extract::SelectorReport;

pub use context::{spawn, PageHandle, Waker};
pub use message::PageMessage;

/// Where a page comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum PageSource {
    Url(Url),
    /// A saved page on disk.
    File(PathBuf),
    /// Raw HTML handed over directly (stdin, tests).
    Inline(String),
}

impl PageSource {
    /// Address-bar style parsing: explicit URLs, `file://` URLs, existing
    /// paths, then bare hosts (`aliexpress.com/...`) as https.
    pub fn parse(text: &str) -> Option<Self> {
        let s = text.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(url) = Url::parse(s) {
            match url.scheme() {
                "http" | "https" => return Some(PageSource::Url(url)),
                "file" => return url.to_file_path().ok().map(PageSource::File),
                _ => {}
            }
        }

        let path = Path::new(s);
        if path.exists() {
            return Some(PageSource::File(path.to_path_buf()));
        }

        match Url::parse(&join!("https://", s)) {
            Ok(url) if url.host_str().is_some_and(|h| h.contains('.')) && !s.contains(char::is_whitespace) => {
                Some(PageSource::Url(url))
            }
            _ => Some(PageSource::File(path.to_path_buf())),
        }
    }

    /// The document's location, used as the base for relative links.
    pub fn location(&self) -> Option<Url> {
        match self {
            PageSource::Url(u) => Some(u.clone()),
            PageSource::File(p) => {
                let abs = std::path::absolute(p).ok()?;
                Url::from_file_path(abs).ok()
            }
            PageSource::Inline(_) => None,
        }
    }
}

impl fmt::Display for PageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSource::Url(u) => write!(f, "{u}"),
            PageSource::File(p) => write!(f, "{}", p.display()),
            PageSource::Inline(html) => write!(f, "inline ({} bytes)", html.len()),
        }
    }
}

/// Host → page.
#[derive(Clone, Debug)]
pub enum PageCommand {
    /// Load a new document. `base` overrides the source's own location.
    Navigate { source: PageSource, base: Option<Url> },
    /// Run one extraction pass and post the result as a message.
    Extract,
    /// Post a selector report for the dev tools.
    Inspect,
    Close,
}

/// Page → host.
#[derive(Clone, Debug)]
pub enum PageEvent {
    DidStartLoading { source: String },
    /// Load finished (successfully or onto an empty error document).
    DomReady { title: String, outline: Vec<String> },
    LoadFailed { error: String },
    /// Untyped `postMessage` payload. See [`PageMessage::from_value`].
    Message(Value),
    Inspection(SelectorReport),
}
