// src/log.rs
//! Logging setup. Call sites use the short `logf!` / `logd!` / `loge!`
//! macros; they forward to `tracing`, so any subscriber works.

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// GUI logging: append to `.store/debug.log`.
/// Falls back to stderr if the log file can't be opened.
pub fn init_file() {
    let path = Path::new(STORE_DIR).join(LOG_FILE);
    let _ = fs::create_dir_all(STORE_DIR);

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            let _ = tracing_subscriber::registry()
                .with(filter("order_scrape=debug"))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_target(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init();
        }
        Err(e) => {
            init_stderr(false);
            loge!("Log: Could not open {}: {}", path.display(), e);
        }
    }
}

/// CLI logging: compact lines on stderr.
pub fn init_stderr(verbose: bool) {
    let default = if verbose { "order_scrape=debug" } else { "order_scrape=warn" };
    let _ = tracing_subscriber::registry()
        .with(filter(default))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
