// src/present/mod.rs
//! Presenter: owns the current order collection, keeps the display table in
//! step with it, and hands out the export encodings.

pub mod encode;

use std::path::PathBuf;

use crate::{
    config::{consts::TABLE_HEADERS, options::{ExportFormat, ExportOptions}},
    error::Result,
    file,
    order::OrderRecord,
};

pub use encode::{to_csv, to_json};

/// The display surface: fixed four columns, string cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrdersTable {
    rows: Vec<[String; 4]>,
}

impl OrdersTable {
    pub fn headers(&self) -> &'static [&'static str; 4] {
        &TABLE_HEADERS
    }

    pub fn rows(&self) -> &[[String; 4]] {
        &self.rows
    }

    pub fn ncols(&self) -> usize {
        TABLE_HEADERS.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Clear and rebuild from `records`. Nothing carries over.
    pub fn render(&mut self, records: &[OrderRecord]) {
        self.rows.clear();
        self.rows.extend(records.iter().map(OrderRecord::cells));
    }
}

#[derive(Debug, Default)]
pub struct Presenter {
    orders: Vec<OrderRecord>,
    table: OrdersTable,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn table(&self) -> &OrdersTable {
        &self.table
    }

    /// Swap in a fresh extraction result wholesale and re-render.
    pub fn replace(&mut self, orders: Vec<OrderRecord>) {
        logf!("Present: {} → {} order(s)", self.orders.len(), orders.len());
        self.table.render(&orders);
        self.orders = orders;
    }

    /// Re-render the display from `records` without touching the collection.
    pub fn render(&mut self, records: &[OrderRecord]) {
        self.table.render(records);
    }

    pub fn export_json(&self) -> Result<String> {
        to_json(&self.orders)
    }

    pub fn export_csv(&self) -> Result<String> {
        to_csv(&self.orders)
    }

    /// Write the collection as `orders.json` / `orders.csv` under the
    /// configured output directory.
    pub fn export(&self, opts: &ExportOptions, format: ExportFormat) -> Result<PathBuf> {
        file::write_artifact(opts, format, &self.orders)
    }
}
