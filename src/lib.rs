// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod bridge;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod file;
pub mod gui;
pub mod layout;
pub mod order;
pub mod page;
pub mod present;
pub mod runner;

pub use error::{Error, Result};
pub use order::{Count, OrderRecord};
