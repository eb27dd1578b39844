//! Shared test fixtures.

use std::cell::Cell;
use std::rc::Rc;

use crate::types::{BoundingBox, LayoutSource};

/// Fake layout surface with a mutable bounding box.
pub(crate) struct FakeRegion {
    rect: Cell<BoundingBox>,
}

impl FakeRegion {
    /// A region whose center sits at `(cx, cy)` with the given half-extent.
    pub(crate) fn centered(cx: f64, cy: f64, half: f64) -> Rc<Self> {
        Rc::new(Self {
            rect: Cell::new(BoundingBox::new(cx - half, cy - half, cx + half, cy + half)),
        })
    }

    pub(crate) fn with_box(rect: BoundingBox) -> Rc<Self> {
        Rc::new(Self {
            rect: Cell::new(rect),
        })
    }

    /// Simulate a layout change (e.g. a resize reflow).
    pub(crate) fn move_to(&self, rect: BoundingBox) {
        self.rect.set(rect);
    }
}

impl LayoutSource for FakeRegion {
    fn bounding_box(&self) -> BoundingBox {
        self.rect.get()
    }
}
