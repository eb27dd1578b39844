//! Navigator Module - Pointer/keyboard focus coordination
//!
//! [`Navigator`] is the state machine deciding which [`FocusTarget`] holds
//! focus. It listens for pointer and keyboard signals, switches between
//! pointer and keyboard input modes, snaps focus to nearby targets with
//! hysteresis, and drives wrap-around keyboard traversal.
//!
//! # Snap hysteresis
//!
//! Focus snaps in when the pointer comes strictly closer than the snap
//! distance to a target center, and snaps out only when it moves strictly
//! farther than the (larger) unsnap distance from the focused target. The
//! band between the two keeps focus stable while hovering a boundary.
//! A move that unsnaps ends there: re-snapping to another target is only
//! evaluated on a later move, so focus never jumps target-to-target within
//! a single step.
//!
//! # API
//!
//! - `on_pointer_moved()` - React to the controller's latest raw position
//! - `handle_key(event)` - Keyboard traversal; returns true if consumed
//! - `focus_next()` / `focus_previous()` / `focus_id(id)` / `clear_focus()`
//! - `refresh_targets()` - Recompute target geometry after layout changes
//! - `on(name, handler)` / `once(name, handler)` - Subscriptions

use std::rc::Rc;

use tracing::{debug, trace};

use crate::focusable::FocusTarget;
use crate::hub::NotificationHub;
use crate::input::KeyboardEvent;
use crate::pointer::PointerController;
use crate::types::{InputMode, Notice, Point};

// =============================================================================
// EVENT NAMES
// =============================================================================

/// Navigation switched between pointer and keyboard mode.
pub const MODE_CHANGED: &str = "modeChanged";
/// A key signal reached the navigator.
pub const KEY_INPUT: &str = "keyInputReceived";

// =============================================================================
// OPTIONS AND CALLBACKS
// =============================================================================

/// Snap tuning. Distances are pointer-to-target-center, in host coordinates.
#[derive(Debug, Clone, Copy)]
pub struct NavigatorOptions {
    /// Focus activates strictly below this distance.
    pub snap_distance: f64,
    /// Existing focus clears strictly above this distance.
    pub unsnap_distance: f64,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            snap_distance: 24.0,
            unsnap_distance: 36.0,
        }
    }
}

impl NavigatorOptions {
    /// The hysteresis band requires `snap < unsnap`; options that collapse
    /// the band are normalized rather than rejected.
    fn normalized(mut self) -> Self {
        if self.unsnap_distance <= self.snap_distance {
            self.unsnap_distance = self.snap_distance * 1.5;
        }
        self
    }
}

/// Optional callbacks fired when focus changes. Blur always fires before
/// the next focus.
#[derive(Default)]
pub struct FocusCallbacks {
    pub on_focus: Option<Box<dyn Fn(&FocusTarget)>>,
    pub on_blur: Option<Box<dyn Fn(&FocusTarget)>>,
}

// =============================================================================
// NAVIGATOR
// =============================================================================

/// Coordinates focus across a fixed, ordered sequence of targets.
///
/// Navigation order is the sequence order given at construction. At most
/// one target is focused at any time; `current_index` follows focus so
/// keyboard traversal continues from wherever the pointer last snapped.
pub struct Navigator {
    pointer: Rc<PointerController>,
    targets: Vec<Rc<FocusTarget>>,
    mode: InputMode,
    focused: Option<usize>,
    current_index: usize,
    options: NavigatorOptions,
    callbacks: FocusCallbacks,
    hub: NotificationHub<Notice>,
}

impl Navigator {
    pub fn new(pointer: Rc<PointerController>, targets: Vec<Rc<FocusTarget>>) -> Self {
        Self::with_options(pointer, targets, NavigatorOptions::default())
    }

    pub fn with_options(
        pointer: Rc<PointerController>,
        targets: Vec<Rc<FocusTarget>>,
        options: NavigatorOptions,
    ) -> Self {
        Self {
            pointer,
            targets,
            mode: InputMode::Pointer,
            focused: None,
            current_index: 0,
            options: options.normalized(),
            callbacks: FocusCallbacks::default(),
            hub: NotificationHub::new(),
        }
    }

    /// Install focus/blur callbacks, replacing any previous ones.
    pub fn set_callbacks(&mut self, callbacks: FocusCallbacks) {
        self.callbacks = callbacks;
    }

    // -------------------------------------------------------------------------
    // POINTER SIGNALS
    // -------------------------------------------------------------------------

    /// React to the pointer controller's latest raw position.
    ///
    /// Call after feeding a movement event to the controller. Switches to
    /// pointer mode, then applies the snap/unsnap hysteresis: an unsnap
    /// ends the step, otherwise the nearest target within snap range (ties
    /// broken by sequence order) takes focus.
    pub fn on_pointer_moved(&mut self) {
        self.set_mode(InputMode::Pointer);
        if self.targets.is_empty() {
            return;
        }

        let pointer = self.pointer.target_position();

        if let Some(current) = self.focused {
            let distance = pointer.distance_to(self.targets[current].center());
            if distance > self.options.unsnap_distance {
                trace!(distance, "pointer unsnapped from focused target");
                self.set_focus(None);
                return;
            }
        }

        let (nearest, distance) = self.nearest_target(pointer);
        if distance < self.options.snap_distance && self.focused != Some(nearest) {
            trace!(distance, id = self.targets[nearest].id(), "pointer snapped");
            self.set_focus(Some(nearest));
        }
    }

    /// Index and distance of the target whose center is nearest `point`.
    /// Ties break toward sequence order (first encountered wins).
    fn nearest_target(&self, point: Point) -> (usize, f64) {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (i, target) in self.targets.iter().enumerate() {
            let distance = point.distance_to(target.center());
            if distance < best_distance {
                best = i;
                best_distance = distance;
            }
        }
        (best, best_distance)
    }

    // -------------------------------------------------------------------------
    // KEYBOARD SIGNALS
    // -------------------------------------------------------------------------

    /// Route a keyboard event. Returns true if the event was consumed.
    ///
    /// - `Tab` / `ArrowRight` - focus next (wraps)
    /// - `Shift+Tab` / `ArrowLeft` - focus previous (wraps)
    /// - `Escape` - clear focus, mode unchanged
    /// - a key whose text parses to a target identifier - direct focus;
    ///   unknown identifiers are ignored
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        self.hub
            .emit(KEY_INPUT, &Notice::KeyInput(event.key.clone()));

        match event.key.as_str() {
            "Tab" if event.modifiers.shift => {
                self.focus_previous();
                true
            }
            "Tab" | "ArrowRight" => {
                self.focus_next();
                true
            }
            "ArrowLeft" => {
                self.focus_previous();
                true
            }
            "Escape" => {
                self.clear_focus();
                true
            }
            key => match key.parse::<u32>() {
                Ok(id) => self.focus_id(id),
                Err(_) => false,
            },
        }
    }

    /// Focus the next target in sequence order, wrapping at the end.
    /// Safe no-op for focus state when there are no targets.
    pub fn focus_next(&mut self) {
        self.set_mode(InputMode::Keyboard);
        if self.targets.is_empty() {
            return;
        }
        let next = (self.current_index + 1) % self.targets.len();
        self.set_focus(Some(next));
    }

    /// Focus the previous target in sequence order, wrapping at the start.
    /// Safe no-op for focus state when there are no targets.
    pub fn focus_previous(&mut self) {
        self.set_mode(InputMode::Keyboard);
        if self.targets.is_empty() {
            return;
        }
        let len = self.targets.len();
        let previous = (self.current_index + len - 1) % len;
        self.set_focus(Some(previous));
    }

    /// Focus the target with the given identifier directly, bypassing index
    /// arithmetic. Unknown identifiers leave all state unchanged.
    /// Returns true if a target matched.
    pub fn focus_id(&mut self, id: u32) -> bool {
        match self.targets.iter().position(|t| t.id() == id) {
            Some(index) => {
                self.set_mode(InputMode::Keyboard);
                self.set_focus(Some(index));
                true
            }
            None => false,
        }
    }

    /// Clear focus unconditionally. Mode is left unchanged.
    pub fn clear_focus(&mut self) {
        self.set_focus(None);
    }

    // -------------------------------------------------------------------------
    // INTERNAL TRANSITIONS
    // -------------------------------------------------------------------------

    /// Move focus, preserving blur-before-focus ordering and keeping the
    /// pointer controller and `current_index` in sync. At most one target
    /// is focused on exit.
    fn set_focus(&mut self, index: Option<usize>) {
        if self.focused == index {
            return;
        }

        if let Some(old) = self.focused.take() {
            let target = &self.targets[old];
            target.remove_focus();
            self.pointer.set_focused_target(None);
            if let Some(on_blur) = &self.callbacks.on_blur {
                on_blur(target);
            }
        }

        self.focused = index;

        match index {
            Some(new) => {
                let target = &self.targets[new];
                target.add_focus();
                self.pointer.set_focused_target(Some(target));
                if let Some(on_focus) = &self.callbacks.on_focus {
                    on_focus(target);
                }
                self.current_index = new;
                debug!(id = target.id(), "focus set");
            }
            None => {
                debug!("focus cleared");
            }
        }
    }

    /// Switch input mode, publishing [`MODE_CHANGED`] only on actual change.
    fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            self.mode = mode;
            debug!(?mode, "input mode changed");
            self.hub.emit(MODE_CHANGED, &Notice::ModeChanged(mode));
        }
    }

    // -------------------------------------------------------------------------
    // QUERIES AND MAINTENANCE
    // -------------------------------------------------------------------------

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// The currently focused target, if any.
    pub fn focused_target(&self) -> Option<&Rc<FocusTarget>> {
        self.focused.map(|i| &self.targets[i])
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn targets(&self) -> &[Rc<FocusTarget>] {
        &self.targets
    }

    /// Recompute every target's cached geometry from its layout source.
    /// Call after layout-affecting events (resize, reflow).
    pub fn refresh_targets(&self) {
        for target in &self.targets {
            target.update();
        }
    }

    /// Subscribe to one of this navigator's notifications.
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
}

// =============================================================================
// TESTS
// =============================================================================
