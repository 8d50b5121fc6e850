// tests/bridge.rs
//
// Readiness and message handling with a fake surface; no threads involved.
//
use std::cell::Cell;
use std::rc::Rc;

use order_scrape::bridge::{Bridge, OnceListener, Readiness, Surface};
use order_scrape::page::{PageEvent, PageMessage};
use order_scrape::OrderRecord;
use serde_json::json;

#[derive(Clone, Default)]
struct FakeSurface {
    passes: Rc<Cell<usize>>,
    inspections: Rc<Cell<usize>>,
}

impl Surface for FakeSurface {
    fn run_extractor(&self) {
        self.passes.set(self.passes.get() + 1);
    }
    fn inspect(&self) {
        self.inspections.set(self.inspections.get() + 1);
    }
}

fn loading() -> PageEvent {
    PageEvent::DidStartLoading { source: "https://www.aliexpress.com/p/order/index.html".into() }
}

fn ready() -> PageEvent {
    PageEvent::DomReady { title: "Orders".into(), outline: Vec::new() }
}

fn mounted() -> (Bridge<FakeSurface>, Rc<Cell<usize>>) {
    let surface = FakeSurface::default();
    let passes = surface.passes.clone();
    let mut bridge = Bridge::new();
    bridge.attach(surface);
    (bridge, passes)
}

#[test]
fn unready_request_runs_once_on_ready() {
    let (mut bridge, passes) = mounted();
    bridge.handle_event(&loading());

    bridge.request_extraction();
    assert_eq!(passes.get(), 0);
    assert!(bridge.extraction_pending());

    bridge.handle_event(&ready());
    assert_eq!(passes.get(), 1);
    assert!(!bridge.extraction_pending());
    assert_eq!(bridge.readiness(), Readiness::Ready);
}

#[test]
fn double_request_before_load_is_one_pass() {
    let (mut bridge, passes) = mounted();
    bridge.request_extraction();
    bridge.request_extraction();
    bridge.handle_event(&ready());
    bridge.handle_event(&ready()); // repeated signal while Ready is ignored
    assert_eq!(passes.get(), 1);
}

#[test]
fn ready_request_runs_immediately() {
    let (mut bridge, passes) = mounted();
    bridge.handle_event(&ready());

    bridge.request_extraction();
    bridge.request_extraction();
    assert_eq!(passes.get(), 2);
    assert!(!bridge.extraction_pending());
}

#[test]
fn no_surface_is_a_no_op() {
    let mut bridge: Bridge<FakeSurface> = Bridge::new();
    bridge.request_extraction();
    bridge.open_devtools();
    assert!(!bridge.extraction_pending());
    assert_eq!(bridge.handle_event(&ready()), None);
    assert_eq!(bridge.readiness(), Readiness::Unready);
}

#[test]
fn reload_resets_to_unready() {
    let (mut bridge, passes) = mounted();
    bridge.handle_event(&ready());
    assert!(bridge.is_ready());

    bridge.handle_event(&loading());
    assert!(!bridge.is_ready());

    bridge.request_extraction();
    assert_eq!(passes.get(), 0);
    bridge.handle_event(&ready());
    assert_eq!(passes.get(), 1);
}

#[test]
fn pending_request_survives_reload() {
    let (mut bridge, passes) = mounted();
    bridge.request_extraction();
    bridge.handle_event(&loading());
    bridge.handle_event(&ready());
    assert_eq!(passes.get(), 1);
}

#[test]
fn detach_drops_pending_request() {
    let (mut bridge, passes) = mounted();
    bridge.request_extraction();
    let old = bridge.detach();
    assert!(old.is_some());
    assert!(!bridge.extraction_pending());

    // New surface, new load: nothing left over from before.
    let fresh = FakeSurface::default();
    let fresh_passes = fresh.passes.clone();
    bridge.attach(fresh);
    bridge.handle_event(&ready());
    assert_eq!(passes.get(), 0);
    assert_eq!(fresh_passes.get(), 0);
}

#[test]
fn orders_data_message_yields_records() {
    let (mut bridge, _) = mounted();
    let orders = vec![OrderRecord::new("A", "http://x", "v", 2u64)];
    let msg = PageMessage::OrdersData { orders: orders.clone() }.to_value();

    assert_eq!(bridge.handle_event(&PageEvent::Message(msg)), Some(orders));
}

#[test]
fn other_messages_are_ignored() {
    let (mut bridge, passes) = mounted();
    let noise = [
        json!({ "type": "SOMETHING_ELSE", "orders": [] }),
        json!({ "orders": [] }),
        json!({ "type": "ORDERS_DATA", "orders": "not a list" }),
        json!(42),
    ];
    for value in noise {
        assert_eq!(bridge.handle_event(&PageEvent::Message(value)), None);
    }
    assert_eq!(passes.get(), 0);
}

#[test]
fn devtools_forwarded_to_surface() {
    let surface = FakeSurface::default();
    let inspections = surface.inspections.clone();
    let mut bridge = Bridge::new();
    bridge.attach(surface);
    bridge.open_devtools();
    assert_eq!(inspections.get(), 1);
}

#[test]
fn once_listener_fires_at_most_once() {
    let hits = Rc::new(Cell::new(0));
    let mut slot: OnceListener<u32> = OnceListener::default();

    let h = hits.clone();
    assert!(slot.register(move |n| h.set(h.get() + *n)));
    let h = hits.clone();
    assert!(!slot.register(move |n| h.set(h.get() + *n * 100)));

    assert!(slot.fire(&1));
    assert!(!slot.fire(&1));
    assert_eq!(hits.get(), 1);
}
