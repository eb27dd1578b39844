//! # glide-tui
//!
//! Smooth pointer tracking and proximity-based focus for terminal UIs.
//!
//! A software-drawn pointer glyph follows the raw input position through
//! exponential interpolation, and focus snaps to nearby targets with a
//! hysteresis band so it does not flicker at boundaries. Keyboard traversal
//! (Tab / arrows / direct identifiers) drives the same focus state, and the
//! two input modes hand off to each other automatically.
//!
//! ## Architecture
//!
//! Geometry comes in through the [`types::LayoutSource`] trait, so the
//! library never reads the terminal itself; hosts hand it bounding boxes.
//! Each piece publishes through its own [`hub::NotificationHub`]:
//! ```text
//! raw input → PointerController (lerp tracker) → Navigator (snap/traverse)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Point, BoundingBox, LayoutSource, Notice)
//! - [`motion`] - Interpolation and the position tracker
//! - [`hub`] - Name-keyed notification channels with cleanup functions
//! - [`focusable`] - Focus targets and identifier allocation
//! - [`pointer`] - Pointer controller (movement, visibility, rendering state)
//! - [`navigator`] - Snap hysteresis and keyboard traversal
//! - [`input`] - crossterm conversion and event routing

pub mod error;
pub mod focusable;
pub mod hub;
pub mod input;
pub mod motion;
pub mod navigator;
pub mod pointer;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result};

pub use motion::{lerp, lerp_with_epsilon, PositionTracker, DEFAULT_EASE, EPSILON};

pub use hub::NotificationHub;

pub use focusable::{FocusTarget, IdSequence};

pub use pointer::{
    PointerController, POINTER_MOVED, POSITION_ADVANCED, VIEWPORT_ENTER, VIEWPORT_LEAVE,
};

pub use navigator::{
    FocusCallbacks, Navigator, NavigatorOptions, KEY_INPUT, MODE_CHANGED,
};

pub use input::{
    convert_key_event, convert_pointer_event, disable_mouse, enable_mouse, poll_event,
    read_event, route_event, timestamp_ms, InputEvent, KeyState, KeyboardEvent, Modifiers,
    PointerEvent,
};
