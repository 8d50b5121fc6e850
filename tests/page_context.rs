// tests/page_context.rs
//
// End to end through the page thread: navigate, wait for ready, extract.
//
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use order_scrape::bridge::Bridge;
use order_scrape::page::{self, PageEvent, PageSource};
use order_scrape::runner;
use url::Url;

const WAIT: Duration = Duration::from_secs(10);

const PAGE: &str = r#"
<html><head><title>My Orders</title></head><body>
  <div class="order-item">
    <div class="product-title">Phone holder</div>
    <a href="aliexpress.com/item/1005.html">view</a>
    <div class="sku-property">Black</div>
    <div class="quantity">x3</div>
  </div>
</body></html>"#;

#[test]
fn scrape_once_inline_page() {
    let base = Url::parse("https://www.aliexpress.com/p/order/index.html").unwrap();
    let orders = runner::scrape_once(PageSource::Inline(PAGE.into()), Some(base), WAIT).unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].title, "Phone holder");
    assert_eq!(orders[0].variation, "Black");
    assert_eq!(orders[0].count.to_string(), "x3");
    assert_eq!(orders[0].url, "https://www.aliexpress.com/p/order/aliexpress.com/item/1005.html");
}

#[test]
fn scrape_once_missing_file_is_empty_not_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope.html");
    let orders = runner::scrape_once(PageSource::File(missing), None, WAIT).unwrap();
    assert!(orders.is_empty());
}

#[test]
fn scrape_once_saved_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("orders.html");
    std::fs::write(&path, PAGE).unwrap();

    let orders = runner::scrape_once(PageSource::File(path), None, WAIT).unwrap();
    assert_eq!(orders.len(), 1);
    // Relative href resolved against the file's own location.
    assert!(orders[0].url.starts_with("file://"));
}

#[test]
fn events_arrive_in_posting_order() {
    let wakes = Arc::new(AtomicUsize::new(0));
    let counter = wakes.clone();
    let (handle, events) = page::spawn(Some(Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })))
    .unwrap();

    handle.navigate(PageSource::Inline(PAGE.into())).unwrap();
    handle.inspect().unwrap();

    match events.recv_timeout(WAIT).unwrap() {
        PageEvent::DidStartLoading { .. } => {}
        other => panic!("expected DidStartLoading, got {other:?}"),
    }
    match events.recv_timeout(WAIT).unwrap() {
        PageEvent::DomReady { title, outline } => {
            assert_eq!(title, "My Orders");
            assert!(outline.iter().any(|l| l == "Phone holder"));
        }
        other => panic!("expected DomReady, got {other:?}"),
    }
    match events.recv_timeout(WAIT).unwrap() {
        PageEvent::Inspection(report) => assert_eq!(report.container_total(), 1),
        other => panic!("expected Inspection, got {other:?}"),
    }

    drop(handle);
    assert!(events.recv_timeout(WAIT).is_err());
    assert_eq!(wakes.load(Ordering::SeqCst), 3);
}

#[test]
fn bridge_over_real_page_defers_until_ready() {
    let (handle, events) = page::spawn(None).unwrap();
    handle.navigate(PageSource::Inline(PAGE.into())).unwrap();

    let mut bridge = Bridge::new();
    bridge.attach(handle);
    bridge.request_extraction();
    bridge.request_extraction();
    assert!(bridge.extraction_pending());

    let mut batches = Vec::new();
    while let Ok(ev) = events.recv_timeout(Duration::from_millis(500)) {
        if let Some(orders) = bridge.handle_event(&ev) {
            batches.push(orders);
        }
    }
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 1);
}

#[test]
fn dropping_the_handle_closes_the_page() {
    let (handle, events) = page::spawn(None).unwrap();
    drop(handle);
    // Thread exits; the event sender goes with it.
    assert!(events.recv_timeout(WAIT).is_err());
}
