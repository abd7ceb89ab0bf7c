use crate::foundation::core::{Point, Vec2};

/// Base curvature applied to every chord, independent of length.
const BASE_CURVATURE: f64 = 0.1;
/// Additional curvature per unit of chord length.
const DISTANCE_FACTOR: f64 = 0.7;
/// How far the control point is pulled toward the circle center.
const CENTER_PULL: f64 = 0.3;
/// Maximum control-point magnitude; keeps arcs inside the ring.
pub const MAX_CONTROL_RADIUS: f64 = 0.95;

/// A 3-point quadratic path connecting two ring positions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuadArc {
    /// First endpoint.
    pub start: Point,
    /// Bezier control point.
    pub ctrl: Point,
    /// Second endpoint.
    pub end: Point,
}

impl QuadArc {
    /// Build the arc between two ring positions.
    ///
    /// The control point sits on the perpendicular of the chord, offset by a
    /// curvature that grows with chord length, after the midpoint is pulled
    /// toward the circle center. Endpoint order picks the perpendicular's
    /// sign, so swapping `start` and `end` bows the arc to the other side of
    /// the chord; that asymmetry is intentional and relied upon by the
    /// animation path (pairs are always taken in positional order).
    pub fn between(start: Point, end: Point) -> Self {
        let mid = start.midpoint(end);
        let chord = end - start;
        let distance = chord.hypot();

        let perp = Vec2::new(-chord.y, chord.x) / distance;
        let curvature = BASE_CURVATURE + DISTANCE_FACTOR * distance;

        let mut ctrl = (mid.to_vec2() * (1.0 - CENTER_PULL) + perp * curvature).to_point();

        let magnitude = ctrl.to_vec2().hypot();
        if magnitude > MAX_CONTROL_RADIUS {
            ctrl = (ctrl.to_vec2() * (MAX_CONTROL_RADIUS / magnitude)).to_point();
        }

        Self { start, ctrl, end }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/chord.rs"]
mod tests;
