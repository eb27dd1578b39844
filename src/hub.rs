//! Notification Hub - Name-keyed publish/subscribe
//!
//! Generic, instance-owned pub/sub used for decoupled signaling between the
//! pointer controller, the navigator, and the embedding page. Each stateful
//! component holds its own hub (composition instead of an emitter base).
//!
//! # API
//!
//! - `on(name, handler)` - Subscribe; returns cleanup function
//! - `once(name, handler)` - Subscribe for one delivery; returns cleanup
//! - `emit(name, payload)` - Publish to subscribers in subscription order
//! - `handler_count(name)` - Number of live subscribers
//!
//! # Example
//!
//! ```
//! use glide_tui::hub::NotificationHub;
//!
//! let hub: NotificationHub<u32> = NotificationHub::new();
//! let cleanup = hub.on("tick", |n| println!("tick {n}"));
//! hub.emit("tick", &1);
//! cleanup();
//! hub.emit("tick", &2); // no subscribers left
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

// =============================================================================
// TYPES
// =============================================================================

struct Subscriber<P> {
    id: usize,
    handler: Rc<dyn Fn(&P)>,
    once: bool,
}

struct HubInner<P> {
    channels: HashMap<String, Vec<Subscriber<P>>>,
    next_id: usize,
}

impl<P> HubInner<P> {
    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Name-keyed publish/subscribe hub.
///
/// Cloning is cheap and yields another handle onto the same subscriber map.
pub struct NotificationHub<P> {
    inner: Rc<RefCell<HubInner<P>>>,
}

impl<P> Clone for NotificationHub<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P> Default for NotificationHub<P> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// IMPLEMENTATION
// =============================================================================

impl<P> NotificationHub<P> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                channels: HashMap::new(),
                next_id: 0,
            })),
        }
    }

    /// Subscribe to an event name. Handlers fire in subscription order.
    /// Returns a cleanup function that unsubscribes.
    pub fn on<F>(&self, event: &str, handler: F) -> impl FnOnce() + use<P, F>
    where
        F: Fn(&P) + 'static,
    {
        self.subscribe(event, Rc::new(handler), false)
    }

    /// Subscribe for a single delivery; the handler is removed after it
    /// fires once. Returns a cleanup function (safe to call either way).
    pub fn once<F>(&self, event: &str, handler: F) -> impl FnOnce() + use<P, F>
    where
        F: Fn(&P) + 'static,
    {
        self.subscribe(event, Rc::new(handler), true)
    }

    fn subscribe(&self, event: &str, handler: Rc<dyn Fn(&P)>, once: bool) -> impl FnOnce() + use<P> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner
                .channels
                .entry(event.to_string())
                .or_default()
                .push(Subscriber { id, handler, once });
            id
        };

        let weak: Weak<RefCell<HubInner<P>>> = Rc::downgrade(&self.inner);
        let event = event.to_string();
        move || {
            if let Some(inner) = weak.upgrade() {
                remove_subscriber(&inner, &event, id);
            }
        }
    }

    /// Publish a payload to every subscriber of `event`.
    ///
    /// Emission iterates a snapshot of the subscriber list, so handlers may
    /// subscribe or unsubscribe re-entrantly; additions take effect from the
    /// next emit.
    pub fn emit(&self, event: &str, payload: &P) {
        let snapshot: Vec<(usize, Rc<dyn Fn(&P)>, bool)> = {
            let inner = self.inner.borrow();
            match inner.channels.get(event) {
                Some(subs) => subs
                    .iter()
                    .map(|s| (s.id, s.handler.clone(), s.once))
                    .collect(),
                None => return,
            }
        };

        let mut fired_once: Vec<usize> = Vec::new();
        for (id, handler, once) in snapshot {
            handler(payload);
            if once {
                fired_once.push(id);
            }
        }

        for id in fired_once {
            remove_subscriber(&self.inner, event, id);
        }
    }

    /// Number of live subscribers for an event name.
    pub fn handler_count(&self, event: &str) -> usize {
        self.inner
            .borrow()
            .channels
            .get(event)
            .map(|subs| subs.len())
            .unwrap_or(0)
    }
}

fn remove_subscriber<P>(inner: &Rc<RefCell<HubInner<P>>>, event: &str, id: usize) {
    let mut inner = inner.borrow_mut();
    if let Some(subs) = inner.channels.get_mut(event) {
        subs.retain(|s| s.id != id);
        if subs.is_empty() {
            inner.channels.remove(event);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_subscriber() {
        let hub: NotificationHub<i32> = NotificationHub::new();
        let seen = Rc::new(Cell::new(0));
        let seen_clone = seen.clone();

        let _cleanup = hub.on("value", move |v| seen_clone.set(*v));

        hub.emit("value", &42);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn test_emit_without_subscribers_is_noop() {
        let hub: NotificationHub<i32> = NotificationHub::new();
        hub.emit("nobody", &1);
        assert_eq!(hub.handler_count("nobody"), 0);
    }

    #[test]
    fn test_subscription_order_preserved() {
        let hub: NotificationHub<()> = NotificationHub::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let order_a = order.clone();
        let _a = hub.on("ping", move |_| order_a.borrow_mut().push("a"));
        let order_b = order.clone();
        let _b = hub.on("ping", move |_| order_b.borrow_mut().push("b"));
        let order_c = order.clone();
        let _c = hub.on("ping", move |_| order_c.borrow_mut().push("c"));

        hub.emit("ping", &());
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cleanup_unsubscribes() {
        let hub: NotificationHub<()> = NotificationHub::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = hub.on("ping", move |_| count_clone.set(count_clone.get() + 1));

        hub.emit("ping", &());
        assert_eq!(count.get(), 1);

        cleanup();
        hub.emit("ping", &());
        assert_eq!(count.get(), 1);
        assert_eq!(hub.handler_count("ping"), 0);
    }

    #[test]
    fn test_once_fires_exactly_once() {
        let hub: NotificationHub<()> = NotificationHub::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let _cleanup = hub.once("ping", move |_| count_clone.set(count_clone.get() + 1));
        assert_eq!(hub.handler_count("ping"), 1);

        hub.emit("ping", &());
        hub.emit("ping", &());
        assert_eq!(count.get(), 1);
        assert_eq!(hub.handler_count("ping"), 0);
    }

    #[test]
    fn test_once_cleanup_before_emit() {
        let hub: NotificationHub<()> = NotificationHub::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = hub.once("ping", move |_| count_clone.set(count_clone.get() + 1));
        cleanup();

        hub.emit("ping", &());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_reentrant_subscribe_during_emit() {
        let hub: NotificationHub<()> = NotificationHub::new();
        let count = Rc::new(Cell::new(0));

        let hub_inner = hub.clone();
        let count_inner = count.clone();
        let _a = hub.on("ping", move |_| {
            let count_new = count_inner.clone();
            // Subscribing mid-emit must not panic; new handler sees later emits
            let _ = hub_inner.on("ping", move |_| count_new.set(count_new.get() + 1));
        });

        hub.emit("ping", &());
        assert_eq!(count.get(), 0);

        hub.emit("ping", &());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_channels_are_independent() {
        let hub: NotificationHub<i32> = NotificationHub::new();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));

        let a_clone = a.clone();
        let _ca = hub.on("a", move |v| a_clone.set(*v));
        let b_clone = b.clone();
        let _cb = hub.on("b", move |v| b_clone.set(*v));

        hub.emit("a", &1);
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 0);
    }
}
