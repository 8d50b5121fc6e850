// src/extract/mod.rs
//! # Order extraction
//!
//! Runs against a DOM snapshot of the embedded page and maps every item
//! container to an [`OrderRecord`]. Best-effort by contract: a page that
//! doesn't look like an order list yields an empty list, and a container
//! with missing pieces yields a record with defaults. Nothing here fails.
//!
//! ```text
//! page context ─ Html ─► extract_orders ─► Vec<OrderRecord> ─► PageMessage::OrdersData
//! ```

pub mod inspect;
pub mod rules;

use scraper::Html;
use url::Url;

use crate::order::{Count, OrderRecord};

pub use inspect::{inspect, SelectorReport};
pub use rules::ExtractRules;

/// One extraction pass. Pure: same snapshot, same rules, same output.
pub fn extract_orders(doc: &Html, base: Option<&Url>, rules: &ExtractRules) -> Vec<OrderRecord> {
    let Some(containers) = rules.containers.as_ref() else {
        return Vec::new();
    };

    doc.select(containers)
        .map(|item| OrderRecord {
            title: rules.title.extract(item, base),
            url: rules.url.extract(item, base),
            variation: rules.variation.extract(item, base),
            count: Count::Text(rules.count.extract(item, base)),
        })
        .collect()
}

/// Parse and extract with the built-in rules.
pub fn extract_from_str(html: &str, base: Option<&Url>) -> Vec<OrderRecord> {
    let doc = Html::parse_document(html);
    let base = crate::core::html::document_base(&doc, base);
    extract_orders(&doc, base.as_ref(), &ExtractRules::default())
}
