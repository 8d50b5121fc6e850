// src/bridge.rs
//! # Bridge
//!
//! Sits between the host and the embedded page. It knows whether the page has
//! finished loading, and decides when it is safe to run the extractor:
//!
//! - **Ready**: extraction is requested immediately.
//! - **Unready**: a one-shot listener is registered and fires on the next
//!   ready signal. Further requests while one is pending are coalesced, so
//!   any number of clicks during a load produce a single extraction pass.
//!
//! Reloading the page (a new `DidStartLoading`) puts the bridge back into
//! Unready. A listener still pending at that point stays registered and fires
//! when the new document is ready. Detaching the surface drops it.

use crate::{
    order::OrderRecord,
    page::{PageEvent, PageMessage},
};

/// What the bridge needs from an embedded surface.
pub trait Surface {
    /// Run one extraction pass inside the page context. Fire-and-forget; the
    /// result comes back later as a message.
    fn run_extractor(&self);

    /// Ask for a selector report (dev tools).
    fn inspect(&self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Unready,
    Ready,
}

/// Single-subscription slot: holds at most one listener, and firing it
/// removes it.
pub struct OnceListener<T> {
    listener: Option<Box<dyn FnOnce(&T)>>,
}

impl<T> Default for OnceListener<T> {
    fn default() -> Self {
        Self { listener: None }
    }
}

impl<T> OnceListener<T> {
    /// Returns false (and drops `f`) if a listener is already registered.
    pub fn register(&mut self, f: impl FnOnce(&T) + 'static) -> bool {
        if self.listener.is_some() {
            return false;
        }
        self.listener = Some(Box::new(f));
        true
    }

    /// Deliver to the registered listener, if any. Returns whether one ran.
    pub fn fire(&mut self, arg: &T) -> bool {
        match self.listener.take() {
            Some(f) => {
                f(arg);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.listener.is_some()
    }

    pub fn clear(&mut self) {
        self.listener = None;
    }
}

pub struct Bridge<S> {
    surface: Option<S>,
    readiness: Readiness,
    on_ready: OnceListener<S>,
}

impl<S> Default for Bridge<S> {
    fn default() -> Self {
        Self {
            surface: None,
            readiness: Readiness::Unready,
            on_ready: OnceListener::default(),
        }
    }
}

impl<S: Surface + 'static> Bridge<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a surface. Its content counts as loading until it says otherwise.
    pub fn attach(&mut self, surface: S) {
        self.detach();
        self.surface = Some(surface);
        logd!("Bridge: Surface attached");
    }

    /// Unmount the surface and forget any pending work.
    pub fn detach(&mut self) -> Option<S> {
        self.on_ready.clear();
        self.readiness = Readiness::Unready;
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == Readiness::Ready
    }

    pub fn extraction_pending(&self) -> bool {
        self.on_ready.is_pending()
    }

    /// Run the extractor now if the page is ready, otherwise once it is.
    /// No surface, no-op.
    pub fn request_extraction(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            logd!("Bridge: Extraction requested with no surface");
            return;
        };

        match self.readiness {
            Readiness::Ready => {
                logf!("Bridge: Extraction → now");
                surface.run_extractor();
            }
            Readiness::Unready => {
                if self.on_ready.register(|s: &S| s.run_extractor()) {
                    logf!("Bridge: Extraction → deferred until ready");
                } else {
                    logd!("Bridge: Extraction already pending");
                }
            }
        }
    }

    /// Dev tools. Not gated on readiness; the page answers in command order.
    pub fn open_devtools(&self) {
        if let Some(surface) = self.surface.as_ref() {
            surface.inspect();
        }
    }

    /// Feed one page event, in delivery order. Returns the records carried by
    /// an `ORDERS_DATA` message; everything else yields `None`.
    pub fn handle_event(&mut self, event: &PageEvent) -> Option<Vec<OrderRecord>> {
        let surface = self.surface.as_ref()?;

        match event {
            PageEvent::DidStartLoading { source } => {
                logd!("Bridge: Unready ({source})");
                self.readiness = Readiness::Unready;
                None
            }
            PageEvent::DomReady { .. } => {
                if self.readiness == Readiness::Unready {
                    self.readiness = Readiness::Ready;
                    logd!("Bridge: Ready");
                    if self.on_ready.fire(surface) {
                        logf!("Bridge: Deferred extraction fired");
                    }
                }
                None
            }
            PageEvent::Message(value) => match PageMessage::from_value(value)? {
                PageMessage::OrdersData { orders } => {
                    logf!("Bridge: ORDERS_DATA with {} order(s)", orders.len());
                    Some(orders)
                }
            },
            PageEvent::LoadFailed { .. } | PageEvent::Inspection(_) => None,
        }
    }
}
