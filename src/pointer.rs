//! Pointer Module - Smoothed pointer position and visibility
//!
//! [`PointerController`] tracks raw pointer movement and exposes a smoothed
//! position through a [`PositionTracker`]. Movement input records the raw
//! target and publishes [`POINTER_MOVED`] carrying only a timestamp;
//! consumers query `position()` / `target_position()` for coordinates so
//! position state is never duplicated downstream.
//!
//! # API
//!
//! - `pointer_moved(x, y, ts)` - Record raw movement, publish notification
//! - `update()` - Per-frame advance; publishes [`POSITION_ADVANCED`] only
//!   when the smoothed position actually changed
//! - `show()` / `hide()` - Idempotent viewport visibility toggles
//! - `set_focused_target(t)` - Cosmetic focused-target reference
//! - `on(name, handler)` / `once(name, handler)` - Subscriptions

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::focusable::FocusTarget;
use crate::hub::NotificationHub;
use crate::motion::{DEFAULT_EASE, PositionTracker, lerp};
use crate::types::{LayoutSource, Notice, Point};

// =============================================================================
// EVENT NAMES
// =============================================================================

/// Raw pointer movement was recorded.
pub const POINTER_MOVED: &str = "pointerMoved";
/// The smoothed position changed during a frame update.
pub const POSITION_ADVANCED: &str = "positionAdvanced";
/// The pointer entered the viewport.
pub const VIEWPORT_ENTER: &str = "focusTargetEnter";
/// The pointer left the viewport.
pub const VIEWPORT_LEAVE: &str = "focusTargetLeave";

// =============================================================================
// POINTER CONTROLLER
// =============================================================================

/// Owns the smoothed pointer position and its notification hub.
pub struct PointerController {
    tracker: RefCell<PositionTracker>,
    hub: NotificationHub<Notice>,
    visible: Cell<bool>,
    focused_target: Cell<Option<u32>>,
}

impl PointerController {
    /// Build a controller over a host surface, starting at the host's
    /// center. Fails fast on a degenerate host bounding box.
    pub fn new(host: &dyn LayoutSource) -> Result<Self> {
        let rect = host.bounding_box();
        if rect.is_degenerate() {
            return Err(Error::DegenerateHost(rect));
        }

        let start = Point::new(
            lerp(rect.right, rect.left, 0.5),
            lerp(rect.top, rect.bottom, 0.5),
        );

        Ok(Self {
            tracker: RefCell::new(PositionTracker::new(start, DEFAULT_EASE)),
            hub: NotificationHub::new(),
            visible: Cell::new(true),
            focused_target: Cell::new(None),
        })
    }

    /// Record a raw pointer position and publish [`POINTER_MOVED`].
    ///
    /// The notification carries the timestamp only; coordinates are queried
    /// through [`PointerController::target_position`].
    pub fn pointer_moved(&self, x: f64, y: f64, timestamp_ms: u64) {
        self.tracker.borrow_mut().set_target(x, y);
        self.hub
            .emit(POINTER_MOVED, &Notice::PointerMoved { timestamp_ms });
    }

    /// Advance the smoothed position one frame and return it.
    ///
    /// Publishes [`POSITION_ADVANCED`] only when the position actually
    /// changed, so idle frames cost subscribers nothing.
    pub fn update(&self) -> Point {
        let (before, after) = {
            let mut tracker = self.tracker.borrow_mut();
            let before = tracker.position();
            (before, tracker.advance())
        };

        if after != before {
            trace!(x = after.x, y = after.y, "pointer advanced");
            self.hub.emit(POSITION_ADVANCED, &Notice::PositionAdvanced);
        }
        after
    }

    /// The smoothed (rendered) position.
    pub fn position(&self) -> Point {
        self.tracker.borrow().position()
    }

    /// The raw (most recently reported) pointer position.
    pub fn target_position(&self) -> Point {
        self.tracker.borrow().target()
    }

    /// Record which target currently holds focus, for cosmetic feedback
    /// only. The navigator owns the actual focus state.
    pub fn set_focused_target(&self, target: Option<&FocusTarget>) {
        self.focused_target.set(target.map(FocusTarget::id));
    }

    /// Identifier of the cosmetically focused target, if any.
    pub fn focused_target(&self) -> Option<u32> {
        self.focused_target.get()
    }

    /// Make the pointer visible. Idempotent; publishes [`VIEWPORT_ENTER`]
    /// only on an actual transition.
    pub fn show(&self) {
        if !self.visible.get() {
            self.visible.set(true);
            debug!("pointer entered viewport");
            self.hub.emit(VIEWPORT_ENTER, &Notice::PointerEntered);
        }
    }

    /// Hide the pointer. Idempotent; publishes [`VIEWPORT_LEAVE`] only on
    /// an actual transition.
    pub fn hide(&self) {
        if self.visible.get() {
            self.visible.set(false);
            debug!("pointer left viewport");
            self.hub.emit(VIEWPORT_LEAVE, &Notice::PointerLeft);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Subscribe to one of this controller's notifications.
    /// Returns a cleanup function.
    pub fn on<F>(&self, event: &str, handler: F) -> impl FnOnce() + use<F>
    where
        F: Fn(&Notice) + 'static,
    {
        self.hub.on(event, handler)
    }

    /// Subscribe for a single delivery. Returns a cleanup function.
    pub fn once<F>(&self, event: &str, handler: F) -> impl FnOnce() + use<F>
    where
        F: Fn(&Notice) + 'static,
    {
        self.hub.once(event, handler)
    }

    /// Convenience constructor for embedders that share the controller.
    pub fn shared(host: &dyn LayoutSource) -> Result<Rc<PointerController>> {
        Self::new(host).map(Rc::new)
    }
}

// =============================================================================
// TESTS
// =============================================================================
