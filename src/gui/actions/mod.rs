// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{export,navigate,scrape,open_devtools}.

mod export;  // src/gui/actions/export.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use export::export;
pub use scrape::{navigate, open_devtools, scrape};
