//! Geometry of the "hop" drawn where a wire crosses another one.
//!
//! A hop is a quadratic curve between the crossing segment's endpoints whose
//! control point sits off the midpoint, perpendicular to the segment, always
//! toward lower screen Y so every hop bends upward.

use crate::geometry::Point;

/// Hop height as a fraction of the segment length.
pub const HOP_HEIGHT_RATIO: f64 = 0.7;

/// A quadratic hop in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingHop {
    pub start: Point,
    pub control: Point,
    pub end: Point,
    /// Set when the segment had no usable length and the curve is straight.
    pub degenerate: bool,
}

impl CrossingHop {
    /// Compute the hop between two screen-space points.
    ///
    /// A zero-length (or non-finite) segment has no perpendicular; the
    /// control point then collapses onto the midpoint and the curve is drawn
    /// straight.
    pub fn between(start: Point, end: Point) -> Self {
        let mid = start.midpoint(end);
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let len = start.distance(end);

        if len == 0.0 || !len.is_finite() {
            return Self {
                start,
                control: mid,
                end,
                degenerate: true,
            };
        }

        let hop_height = len * HOP_HEIGHT_RATIO;
        let perp_x = (-dy / len) * hop_height;
        let perp_y = (dx / len) * hop_height;

        Self {
            start,
            control: Point::new(mid.x + perp_x, mid.y - perp_y.abs()),
            end,
            degenerate: false,
        }
    }
}
