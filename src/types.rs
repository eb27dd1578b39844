//! Core types - Geometry, input modes, and notification payloads
//!
//! Plain data shared across the crate:
//!
//! - [`Point`] / [`Size`] - floating-point geometry
//! - [`BoundingBox`] - a layout box (left/top/right/bottom)
//! - [`LayoutSource`] - capability trait for querying a host's layout box
//! - [`InputMode`] - pointer vs keyboard driven navigation
//! - [`Notice`] - payload published through [`crate::hub::NotificationHub`]

// =============================================================================
// GEOMETRY
// =============================================================================

/// A 2D position in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width/height of a layout box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A host element's layout box.
///
/// Mirrors the usual layout-query shape: edges in host coordinates, with
/// `right >= left` and `bottom >= top` for a well-formed box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// A box is degenerate when it is non-finite or inverted.
    pub fn is_degenerate(&self) -> bool {
        !self.is_finite() || self.width() < 0.0 || self.height() < 0.0
    }
}

// =============================================================================
// LAYOUT SOURCE
// =============================================================================

/// Capability for querying a host element's current layout box.
///
/// Components never observe layout changes themselves; callers re-query
/// through this trait when layout may have changed (e.g. on resize).
/// Tests inject fake implementations instead of a real rendering surface.
pub trait LayoutSource {
    fn bounding_box(&self) -> BoundingBox;
}

// =============================================================================
// INPUT MODE
// =============================================================================

/// Which input device is currently driving navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    Keyboard,
}

impl Default for InputMode {
    fn default() -> Self {
        Self::Pointer
    }
}

// =============================================================================
// NOTIFICATION PAYLOAD
// =============================================================================

/// Payload published through the notification hubs.
///
/// Position-carrying variants are deliberately absent: consumers query
/// `position()` / `target_position()` on the controller, so position state
/// is never duplicated downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Raw pointer movement was recorded. Milliseconds since process start.
    PointerMoved { timestamp_ms: u64 },
    /// The smoothed position changed during a frame update.
    PositionAdvanced,
    /// The pointer entered the viewport.
    PointerEntered,
    /// The pointer left the viewport.
    PointerLeft,
    /// Navigation switched between pointer and keyboard mode.
    ModeChanged(InputMode),
    /// A key signal reached the navigator.
    KeyInput(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_bounding_box_dimensions() {
        let b = BoundingBox::new(10.0, 20.0, 50.0, 80.0);
        assert_eq!(b.width(), 40.0);
        assert_eq!(b.height(), 60.0);
        assert_eq!(b.size(), Size::new(40.0, 60.0));
        assert!(!b.is_degenerate());
    }

    #[test]
    fn test_degenerate_boxes() {
        // Inverted
        assert!(BoundingBox::new(50.0, 0.0, 10.0, 10.0).is_degenerate());
        assert!(BoundingBox::new(0.0, 50.0, 10.0, 10.0).is_degenerate());
        // Non-finite
        assert!(BoundingBox::new(f64::NAN, 0.0, 10.0, 10.0).is_degenerate());
        assert!(BoundingBox::new(0.0, 0.0, f64::INFINITY, 10.0).is_degenerate());
        // Zero-sized is allowed (a collapsed element is still addressable)
        assert!(!BoundingBox::new(5.0, 5.0, 5.0, 5.0).is_degenerate());
    }
}
