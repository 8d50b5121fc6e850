// src/config/options.rs
use std::path::{Path, PathBuf};

use url::Url;

use super::consts::*;
use crate::page::PageSource;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    /// Loaded into the page context on startup.
    pub start: Option<PageSource>,
    /// Overrides the base URL used to resolve relative hrefs.
    pub base_url: Option<Url>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            start: Url::parse(DEFAULT_START_URL).ok().map(PageSource::Url),
            base_url: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Fixed artifact name for this encoding.
    pub fn file_name(self) -> &'static str {
        match self { ExportFormat::Json => JSON_FILE, ExportFormat::Csv => CSV_FILE }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: dir.into() }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI text into a directory. Blank text restores the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(crate::file::normalize_separators(s))
        };
    }

    pub fn out_path(&self, format: ExportFormat) -> PathBuf {
        self.out_dir.join(format.file_name())
    }
}
