// src/extract/inspect.rs
//! Selector diagnostics for the dev tools window: how much of the page each
//! rule actually hits.

use scraper::Html;

use super::rules::ExtractRules;
use crate::core::html::document_title;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectorHits {
    pub selector: String,
    pub hits: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectorReport {
    pub title: String,
    pub html_bytes: usize,
    pub containers: Vec<SelectorHits>,
    /// (field name, per-rule hits counted across all containers)
    pub fields: Vec<(&'static str, Vec<SelectorHits>)>,
    pub html_preview: String,
}

impl SelectorReport {
    pub fn container_total(&self) -> usize {
        self.containers.iter().map(|c| c.hits).sum()
    }
}

pub fn inspect(doc: &Html, rules: &ExtractRules) -> SelectorReport {
    let html = doc.root_element().html();

    let containers = rules
        .container_sources
        .iter()
        .filter_map(|src| {
            let sel = scraper::Selector::parse(src).ok()?;
            Some(SelectorHits { selector: src.clone(), hits: doc.select(&sel).count() })
        })
        .collect();

    let items: Vec<_> = rules
        .containers
        .as_ref()
        .map(|sel| doc.select(sel).collect())
        .unwrap_or_default();

    let fields = rules
        .fields()
        .into_iter()
        .map(|chain| {
            let hits = chain
                .rules
                .iter()
                .map(|rule| SelectorHits {
                    selector: rule.source.clone(),
                    hits: items.iter().filter(|it| rule.hits(**it)).count(),
                })
                .collect();
            (chain.name, hits)
        })
        .collect();

    SelectorReport {
        title: document_title(doc),
        html_bytes: html.len(),
        containers,
        fields,
        html_preview: crate::core::sanitize::truncate_chars(&html, 4000),
    }
}
