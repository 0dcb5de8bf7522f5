//! Polygon shape - an outline stored as a plain list of vertices

use std::borrow::Cow;

use super::traits::{hit_test_points, Outline, PointRef};
use crate::geometry::{Point, PointSequence};

/// An outline defined directly by its vertices
///
/// Vertices are connected in order; the outline is not implicitly closed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: PointSequence,
}

impl Polygon {
    /// Create an empty polygon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a polygon from existing vertices
    pub fn from_points(points: PointSequence) -> Self {
        Self { points }
    }

    /// The stored vertices
    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    /// Mutable access to the stored vertices
    pub fn points_mut(&mut self) -> &mut PointSequence {
        &mut self.points
    }

    /// Append a vertex
    pub fn add(&mut self, point: Point) {
        self.points.add(point);
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon has no vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Outline for Polygon {
    fn outline(&self) -> Cow<'_, PointSequence> {
        Cow::Borrowed(&self.points)
    }

    fn hit_test(&self, x: f64, y: f64, radius: f64) -> Option<PointRef> {
        hit_test_points(&self.points, x, y, radius).map(PointRef::Vertex)
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    fn name(&self) -> &str {
        "Polygon"
    }
}

impl From<PointSequence> for Polygon {
    fn from(points: PointSequence) -> Self {
        Self::from_points(points)
    }
}
