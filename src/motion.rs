//! Motion Module - Epsilon-snapped interpolation and position smoothing
//!
//! The numeric core of the smoothed cursor:
//!
//! - [`lerp`] - linear interpolation that snaps exactly to the endpoint once
//!   the raw blend lands within [`EPSILON`] of it, so repeated easing steps
//!   terminate instead of approaching the target asymptotically.
//! - [`PositionTracker`] - current/target pair advanced once per frame,
//!   closing a fixed fraction of the remaining distance per step.
//!
//! # Example
//!
//! ```
//! use glide_tui::motion::PositionTracker;
//! use glide_tui::types::Point;
//!
//! let mut tracker = PositionTracker::new(Point::new(0.0, 0.0), 0.2);
//! tracker.set_target(100.0, 0.0);
//! tracker.advance();
//! assert_eq!(tracker.position().x, 20.0);
//! ```

use crate::types::Point;

/// Distance from the endpoint inside which interpolation snaps exactly.
pub const EPSILON: f64 = 1e-4;

/// Default fraction of the remaining distance closed per frame.
pub const DEFAULT_EASE: f64 = 0.2;

// =============================================================================
// INTERPOLATION
// =============================================================================

/// Linear interpolation from `start` toward `end` by `t`, snapping exactly
/// to `end` when the raw result lands within [`EPSILON`] of it.
///
/// `t` is typically in `[0, 1]`; values outside extrapolate, in which case
/// the snap is meaningless but harmless. No side effects.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    lerp_with_epsilon(start, end, t, EPSILON)
}

/// [`lerp`] with an explicit snap distance.
pub fn lerp_with_epsilon(start: f64, end: f64, t: f64, epsilon: f64) -> f64 {
    let raw = start + t * (end - start);
    if (end - raw).abs() < epsilon {
        end
    } else {
        raw
    }
}

// =============================================================================
// POSITION TRACKER
// =============================================================================

/// Holds a current and a target position, advancing the current toward the
/// target by a fixed ease factor per step.
///
/// The ease factor is fixed at construction so every frame closes the same
/// fraction of the remaining distance. Once current equals target, further
/// calls to [`PositionTracker::advance`] are no-ops (the epsilon snap in
/// [`lerp`] guarantees exact convergence in finitely many steps).
#[derive(Debug, Clone)]
pub struct PositionTracker {
    current: Point,
    target: Point,
    ease: f64,
}

impl PositionTracker {
    /// Create a tracker at `start` with the given ease factor in `(0, 1]`.
    pub fn new(start: Point, ease: f64) -> Self {
        Self {
            current: start,
            target: start,
            ease,
        }
    }

    /// Set the target position. Pure mutation, no validation.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = Point::new(x, y);
    }

    /// Advance the current position one step toward the target and return
    /// the new current position.
    pub fn advance(&mut self) -> Point {
        self.current.x = lerp(self.current.x, self.target.x, self.ease);
        self.current.y = lerp(self.current.y, self.target.y, self.ease);
        self.current
    }

    /// The current (smoothed) position. `Point` is `Copy`, so callers get
    /// their own value and cannot mutate tracker state through it.
    pub fn position(&self) -> Point {
        self.current
    }

    /// The target (raw) position.
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether the current position has converged onto the target.
    pub fn at_target(&self) -> bool {
        self.current == self.target
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        // t = 1 lands on the endpoint, inside epsilon, snaps exactly
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
        assert_eq!(lerp(3.0, 7.0, 0.5), 5.0);
    }

    #[test]
    fn test_lerp_snaps_near_end() {
        // Raw result 9.99995 is within 1e-4 of 10 -> snap
        assert_eq!(lerp(9.9999, 10.0, 0.5), 10.0);
        // Raw result 5.0 is nowhere near 10 -> raw blend
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_lerp_custom_epsilon() {
        // With a wide epsilon the same blend snaps
        assert_eq!(lerp_with_epsilon(0.0, 10.0, 0.5, 6.0), 10.0);
        // With a tight one it does not
        assert_eq!(lerp_with_epsilon(0.0, 10.0, 0.5, 1.0), 5.0);
    }

    #[test]
    fn test_lerp_negative_direction() {
        assert_eq!(lerp(10.0, 0.0, 0.5), 5.0);
        assert_eq!(lerp(0.0001, 0.0, 0.5), 0.0); // snaps from above
    }

    #[test]
    fn test_tracker_advances_by_ease_fraction() {
        let mut tracker = PositionTracker::new(Point::new(0.0, 0.0), 0.2);
        tracker.set_target(100.0, 50.0);

        let p = tracker.advance();
        assert_eq!(p, Point::new(20.0, 10.0));

        let p = tracker.advance();
        assert_eq!(p, Point::new(36.0, 18.0));
    }

    #[test]
    fn test_tracker_converges_exactly() {
        let mut tracker = PositionTracker::new(Point::new(0.0, 0.0), 0.2);
        tracker.set_target(100.0, 0.0);

        // Remaining distance shrinks by 0.8x per step; well under 200 steps
        // to get inside epsilon from 100 away.
        let mut steps = 0;
        while !tracker.at_target() {
            tracker.advance();
            steps += 1;
            assert!(steps < 200, "tracker failed to converge");
        }
        assert_eq!(tracker.position(), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_tracker_never_overshoots() {
        let mut tracker = PositionTracker::new(Point::new(0.0, 0.0), 0.2);
        tracker.set_target(100.0, 0.0);

        for _ in 0..200 {
            let p = tracker.advance();
            assert!(p.x <= 100.0);
        }
    }

    #[test]
    fn test_tracker_idempotent_at_target() {
        let mut tracker = PositionTracker::new(Point::new(5.0, 5.0), 0.2);
        tracker.set_target(5.0, 5.0);

        assert!(tracker.at_target());
        let p = tracker.advance();
        assert_eq!(p, Point::new(5.0, 5.0));
        assert!(tracker.at_target());
    }

    #[test]
    fn test_tracker_position_is_a_copy() {
        let mut tracker = PositionTracker::new(Point::new(1.0, 2.0), 0.2);
        let mut p = tracker.position();
        p.x = 999.0;
        assert_eq!(p.x, 999.0);
        assert_eq!(tracker.position(), Point::new(1.0, 2.0));
        tracker.set_target(1.0, 2.0);
        assert!(tracker.at_target());
    }
}
