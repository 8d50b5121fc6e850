// src/core/html.rs
//! Small DOM helpers over `scraper`, shared by extraction and the page preview.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::sanitize::normalize_ws;

/// Rough `innerText`: descendant text nodes concatenated as-is (inline tags
/// add no spacing), then whitespace-collapsed and trimmed.
pub fn inner_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// What a browser's `a.href` property reports: the attribute resolved
/// against the document base. Unresolvable values are returned as written.
pub fn resolve_href(raw: &str, base: Option<&Url>) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return s!();
    }
    let resolved = match base {
        Some(b) => b.join(raw),
        None => Url::parse(raw),
    };
    match resolved {
        Ok(u) => u.into(),
        Err(_) => s!(raw),
    }
}

/// `<base href>` wins over the location the document was loaded from.
pub fn document_base(doc: &Html, location: Option<&Url>) -> Option<Url> {
    let sel = Selector::parse("base[href]").ok()?;
    let declared = doc
        .select(&sel)
        .next()
        .and_then(|b| b.value().attr("href"))
        .map(str::trim);

    match (declared, location) {
        (Some(href), Some(loc)) => loc.join(href).ok().or_else(|| Some(loc.clone())),
        (Some(href), None) => Url::parse(href).ok(),
        (None, loc) => loc.cloned(),
    }
}

pub fn document_title(doc: &Html) -> String {
    Selector::parse("title")
        .ok()
        .and_then(|sel| doc.select(&sel).next().map(inner_text))
        .unwrap_or_default()
}

/// Visible-ish text blocks in document order, for the page preview.
/// Skips script/style content; keeps at most `limit` lines.
pub fn text_outline(doc: &Html, limit: usize) -> Vec<String> {
    let Ok(sel) = Selector::parse("h1, h2, h3, h4, p, li, a, td, span, div") else {
        return Vec::new();
    };

    let mut out: Vec<String> = Vec::new();
    for el in doc.select(&sel) {
        if out.len() >= limit {
            break;
        }
        // Leaf-ish blocks only, so a wrapper div doesn't repeat its children.
        if el.children().any(|c| c.value().is_element()) {
            continue;
        }
        let line = inner_text(el);
        if line.is_empty() || out.last() == Some(&line) {
            continue;
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_href_against_base() {
        let base = Url::parse("https://www.aliexpress.com/p/order/index.html").unwrap();
        assert_eq!(
            resolve_href("//www.aliexpress.com/item/123.html", Some(&base)),
            "https://www.aliexpress.com/item/123.html"
        );
        assert_eq!(resolve_href("/item/9.html", Some(&base)), "https://www.aliexpress.com/item/9.html");
    }

    #[test]
    fn unresolvable_href_is_kept_verbatim() {
        assert_eq!(resolve_href("aliexpress.com/item/1", None), "aliexpress.com/item/1");
        assert_eq!(resolve_href("   ", None), "");
    }

    #[test]
    fn inline_tags_do_not_add_spaces() {
        let doc = Html::parse_fragment("<span>USB<b>-C</b>  cable\n</span>");
        let sel = Selector::parse("span").unwrap();
        let el = doc.select(&sel).next().unwrap();
        assert_eq!(inner_text(el), "USB-C cable");
    }

    #[test]
    fn base_element_overrides_location() {
        let doc = Html::parse_document(
            r#"<html><head><base href="https://m.aliexpress.com/"></head><body></body></html>"#,
        );
        let loc = Url::parse("file:///tmp/orders.html").unwrap();
        let base = document_base(&doc, Some(&loc)).unwrap();
        assert_eq!(base.as_str(), "https://m.aliexpress.com/");
    }

    #[test]
    fn outline_skips_wrappers_and_scripts() {
        let doc = Html::parse_document(
            "<html><head><title> Orders </title><script>var x = 1;</script></head>\
             <body><div><p>First</p><p>Second</p></div></body></html>",
        );
        assert_eq!(document_title(&doc), "Orders");
        assert_eq!(text_outline(&doc, 10), vec![s!("First"), s!("Second")]);
    }
}
