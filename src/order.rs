// src/order.rs
//! The one entity this crate deals in: an order line scraped from the page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One extracted item: title, link, variation label and quantity.
/// No identity key; duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub title: String,
    pub url: String,
    pub variation: String,
    pub count: Count,
}

impl OrderRecord {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        variation: impl Into<String>,
        count: impl Into<Count>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            variation: variation.into(),
            count: count.into(),
        }
    }

    /// Cells in display/export column order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.title.clone(),
            self.url.clone(),
            self.variation.clone(),
            self.count.to_string(),
        ]
    }
}

/// Quantity as it came in: scraped text, or a number from JSON input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Count {
    fn default() -> Self {
        Count::Text(s!("1"))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Number(n) => write!(f, "{n}"),
            Count::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Count {
    fn from(s: &str) -> Self { Count::Text(s!(s)) }
}

impl From<String> for Count {
    fn from(s: String) -> Self { Count::Text(s) }
}

impl From<u64> for Count {
    fn from(n: u64) -> Self { Count::Number(n.into()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_displays_numbers_and_text_alike() {
        assert_eq!(Count::from(2u64).to_string(), "2");
        assert_eq!(Count::from("3 pcs").to_string(), "3 pcs");
    }

    #[test]
    fn count_keeps_json_kind() {
        let n: Count = serde_json::from_str("2").unwrap();
        let t: Count = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(n, Count::from(2u64));
        assert_eq!(t, Count::from("2"));
    }
}
