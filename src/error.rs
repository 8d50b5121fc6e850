// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("GUI failed: {0}")]
    Gui(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Page context is closed")]
    PageClosed,

    #[error("Timed out after {secs}s waiting for {what}")]
    Timeout { secs: u64, what: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
