//! Focusable Module - Navigable regions and identifier assignment
//!
//! A [`FocusTarget`] represents one UI region eligible for pointer- or
//! keyboard-driven focus: a stable identifier, a cached center and size
//! derived from its host's layout box, and a visual focused flag.
//!
//! Geometry is cached and only recomputed through [`FocusTarget::update`];
//! targets never observe layout changes themselves, so the embedder must
//! refresh them after any layout-affecting event (resize, reflow).
//!
//! Identifiers come from an [`IdSequence`] owned by whoever constructs the
//! targets - an explicit sequence generator instead of module-level state -
//! and are what keyboard direct addressing matches against.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::motion::lerp;
use crate::types::{BoundingBox, LayoutSource, Point, Size};

// =============================================================================
// IDENTIFIER SEQUENCE
// =============================================================================

/// Monotonic identifier generator for focus targets.
///
/// Owned and injected by the component that constructs targets, so two
/// independent target sets never share counter state.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: Cell<u32>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next identifier, starting from 0.
    pub fn next_id(&self) -> u32 {
        let id = self.next.get();
        self.next.set(id + 1);
        id
    }
}

// =============================================================================
// FOCUS TARGET
// =============================================================================

/// One navigable UI region.
pub struct FocusTarget {
    id: u32,
    layout: Rc<dyn LayoutSource>,
    center: Cell<Point>,
    size: Cell<Size>,
    focused: Cell<bool>,
}

impl FocusTarget {
    /// Build a target over a host layout source, assigning it the next
    /// identifier from `ids`.
    ///
    /// Fails fast if the host reports a degenerate bounding box; a target is
    /// never constructed over invalid geometry.
    pub fn new(layout: Rc<dyn LayoutSource>, ids: &IdSequence) -> Result<Self> {
        let rect = layout.bounding_box();
        if rect.is_degenerate() {
            return Err(Error::DegenerateHost(rect));
        }

        let target = Self {
            id: ids.next_id(),
            layout,
            center: Cell::new(center_of(&rect)),
            size: Cell::new(rect.size()),
            focused: Cell::new(false),
        };
        Ok(target)
    }

    /// Assignment-order identifier, stable for the target's lifetime.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Cached geometric center of the host's layout box.
    pub fn center(&self) -> Point {
        self.center.get()
    }

    /// Cached size of the host's layout box.
    pub fn size(&self) -> Size {
        self.size.get()
    }

    /// Recompute the cached center and size from the host's current layout.
    ///
    /// A host that has become degenerate (mid-reflow, detached) leaves the
    /// previous cache in place; runtime geometry glitches are not errors.
    pub fn update(&self) {
        let rect = self.layout.bounding_box();
        if rect.is_degenerate() {
            return;
        }
        self.center.set(center_of(&rect));
        self.size.set(rect.size());
    }

    /// Mark this target visually focused. Side effect only.
    pub fn add_focus(&self) {
        self.focused.set(true);
    }

    /// Clear this target's visual focused state. Side effect only.
    pub fn remove_focus(&self) {
        self.focused.set(false);
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }
}

fn center_of(rect: &BoundingBox) -> Point {
    Point::new(
        lerp(rect.right, rect.left, 0.5),
        lerp(rect.top, rect.bottom, 0.5),
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::FakeRegion;

    #[test]
    fn test_id_sequence_monotonic() {
        let ids = IdSequence::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_independent_sequences() {
        let a = IdSequence::new();
        let b = IdSequence::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), 0);
    }

    #[test]
    fn test_target_center_and_size() {
        let ids = IdSequence::new();
        let region = FakeRegion::with_box(BoundingBox::new(10.0, 20.0, 50.0, 80.0));
        let target = FocusTarget::new(region, &ids).unwrap();

        assert_eq!(target.id(), 0);
        assert_eq!(target.center(), Point::new(30.0, 50.0));
        assert_eq!(target.size(), Size::new(40.0, 60.0));
    }

    #[test]
    fn test_update_recomputes_cache() {
        let ids = IdSequence::new();
        let region = FakeRegion::centered(0.0, 0.0, 10.0);
        let target = FocusTarget::new(region.clone(), &ids).unwrap();
        assert_eq!(target.center(), Point::new(0.0, 0.0));

        // Layout moves; cache is stale until update() is called
        region.move_to(BoundingBox::new(90.0, 90.0, 110.0, 110.0));
        assert_eq!(target.center(), Point::new(0.0, 0.0));

        target.update();
        assert_eq!(target.center(), Point::new(100.0, 100.0));
        assert_eq!(target.size(), Size::new(20.0, 20.0));
    }

    #[test]
    fn test_update_keeps_cache_on_degenerate_layout() {
        let ids = IdSequence::new();
        let region = FakeRegion::centered(5.0, 5.0, 5.0);
        let target = FocusTarget::new(region.clone(), &ids).unwrap();

        region.move_to(BoundingBox::new(f64::NAN, 0.0, 1.0, 1.0));
        target.update();
        assert_eq!(target.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_construction_rejects_degenerate_host() {
        let ids = IdSequence::new();
        let region = FakeRegion::with_box(BoundingBox::new(10.0, 0.0, 0.0, 10.0));
        let err = FocusTarget::new(region, &ids).err().unwrap();
        assert!(matches!(err, Error::DegenerateHost(_)));
    }

    #[test]
    fn test_focus_flag_toggles() {
        let ids = IdSequence::new();
        let target = FocusTarget::new(FakeRegion::centered(0.0, 0.0, 1.0), &ids).unwrap();

        assert!(!target.is_focused());
        target.add_focus();
        assert!(target.is_focused());
        // Re-adding is a no-op
        target.add_focus();
        assert!(target.is_focused());
        target.remove_focus();
        assert!(!target.is_focused());
    }
}
