//! Outline trait definition
//!
//! The `Outline` trait is what both shape variants share: something that
//! flattens to a point sequence, can be hit-tested and can be cleared.
//! The closed set of variants lives in the `Shape` enum, which dispatches
//! to these implementations with a `match`.

use std::borrow::Cow;

use crate::geometry::{Point, PointSequence};

/// Handle to an editable point inside a shape
///
/// Returned by hit tests instead of a reference, so the caller can keep it
/// across frames and mutate the shape later through `Shape::point_mut`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointRef {
    /// Vertex of a polygon
    Vertex(usize),
    /// Anchor of a Bezier shape (on the curve)
    Anchor(usize),
    /// Control point of a Bezier shape (off the curve)
    Control(usize),
}

/// A 2D outline that can be drawn, edited and extruded
pub trait Outline {
    /// The flattened outline
    ///
    /// Polygons hand out their stored points; derived outlines build a
    /// fresh sequence on every call.
    fn outline(&self) -> Cow<'_, PointSequence>;

    /// Find the first editable point within `radius` of (x, y)
    fn hit_test(&self, x: f64, y: f64, radius: f64) -> Option<PointRef>;

    /// Remove all stored points
    fn clear(&mut self);

    /// Get the name of this outline type (for UI display)
    fn name(&self) -> &str;
}

/// Index of the first point inside the axis-aligned box of half-width
/// `radius` centred on (x, y)
///
/// Only X and Y are compared; the test is a square, not a circle.
pub(crate) fn hit_test_points(points: &[Point], x: f64, y: f64, radius: f64) -> Option<usize> {
    points
        .iter()
        .position(|p| (p.x - x).abs() <= radius && (p.y - y).abs() <= radius)
}
