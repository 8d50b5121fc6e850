// src/extract/rules.rs
//! Selector rule chains for the order list page.
//!
//! Each field's selectors form one selector group. The first descendant of
//! the container (in document order) matching any of them is read; if nothing
//! matches, or the match reads empty, the field takes its default. An empty
//! match does not fall back to a later selector.
//! Selectors that fail to parse are dropped with a log line, never an error.

use scraper::{ElementRef, Selector};
use url::Url;

use crate::core::html::{inner_text, resolve_href};

/// Item containers. Any match is a container; document order, no duplicates.
pub const CONTAINER_SELECTORS: &[&str] = &[".order-item", ".order-card", ".order-list-item"];

pub const TITLE_SELECTORS: &[&str] = &[".product-title", ".order-title", ".product-name"];
pub const URL_SELECTORS: &[&str] = &[r#"a[href*="aliexpress.com/item"]"#];
pub const VARIATION_SELECTORS: &[&str] = &[".sku-property", ".product-variation", ".order-sku"];
pub const COUNT_SELECTORS: &[&str] = &[".quantity", ".order-quantity"];

pub const COUNT_DEFAULT: &str = "1";

/// What to read off a matched element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Read {
    Text,
    Href,
}

#[derive(Clone, Debug)]
pub struct FieldRule {
    pub source: String,
    pub selector: Selector,
    pub read: Read,
}

impl FieldRule {
    pub fn parse(source: &str, read: Read) -> Option<Self> {
        match Selector::parse(source) {
            Ok(selector) => Some(Self { source: s!(source), selector, read }),
            Err(e) => {
                loge!("Rules: Dropping selector {:?}: {}", source, e);
                None
            }
        }
    }

    /// Does any descendant of `scope` match this rule alone? (dev tools)
    pub fn hits(&self, scope: ElementRef<'_>) -> bool {
        scope.select(&self.selector).next().is_some()
    }
}

impl Read {
    pub fn read(self, el: ElementRef<'_>, base: Option<&Url>) -> String {
        match self {
            Read::Text => inner_text(el),
            Read::Href => resolve_href(el.value().attr("href").unwrap_or_default(), base),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldChain {
    pub name: &'static str,
    /// Per-selector rules, kept for inspection.
    pub rules: Vec<FieldRule>,
    /// The surviving selectors as one group; this is what extraction uses.
    pub group: Option<Selector>,
    pub read: Read,
    pub default: &'static str,
}

impl FieldChain {
    pub fn new(name: &'static str, selectors: &[&str], read: Read, default: &'static str) -> Self {
        let rules: Vec<FieldRule> = selectors
            .iter()
            .filter_map(|s| FieldRule::parse(s, read))
            .collect();
        let group = selector_group(rules.iter().map(|r| r.source.as_str()));
        Self { name, rules, group, read, default }
    }

    pub fn extract(&self, scope: ElementRef<'_>, base: Option<&Url>) -> String {
        let value = self
            .group
            .as_ref()
            .and_then(|g| scope.select(g).next())
            .map(|el| self.read.read(el, base))
            .unwrap_or_default();

        if value.is_empty() { s!(self.default) } else { value }
    }
}

/// Join already-valid selectors into a single `a, b, c` group.
fn selector_group<'a>(sources: impl Iterator<Item = &'a str>) -> Option<Selector> {
    let joined = sources.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        return None;
    }
    Selector::parse(&joined).ok()
}

/// The full rule set for one extraction pass.
#[derive(Clone, Debug)]
pub struct ExtractRules {
    pub container_sources: Vec<String>,
    /// All container selectors as one selector group.
    pub containers: Option<Selector>,
    pub title: FieldChain,
    pub url: FieldChain,
    pub variation: FieldChain,
    pub count: FieldChain,
}

impl ExtractRules {
    pub fn new(containers: &[&str]) -> Self {
        let container_sources: Vec<String> = containers
            .iter()
            .filter(|s| Selector::parse(s).is_ok())
            .map(|s| s!(*s))
            .collect();
        if container_sources.len() != containers.len() {
            loge!("Rules: {} container selector(s) dropped", containers.len() - container_sources.len());
        }

        let containers = selector_group(container_sources.iter().map(String::as_str));

        Self {
            container_sources,
            containers,
            title: FieldChain::new("title", TITLE_SELECTORS, Read::Text, ""),
            url: FieldChain::new("url", URL_SELECTORS, Read::Href, ""),
            variation: FieldChain::new("variation", VARIATION_SELECTORS, Read::Text, ""),
            count: FieldChain::new("count", COUNT_SELECTORS, Read::Text, COUNT_DEFAULT),
        }
    }

    pub fn fields(&self) -> [&FieldChain; 4] {
        [&self.title, &self.url, &self.variation, &self.count]
    }
}

impl Default for ExtractRules {
    fn default() -> Self {
        Self::new(CONTAINER_SELECTORS)
    }
}
