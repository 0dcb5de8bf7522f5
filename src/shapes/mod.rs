//! Shapes module - the editable 2D outline that gets extruded
//!
//! This module provides:
//! - `Outline` trait shared by the shape variants
//! - `Polygon` - an outline stored as vertices
//! - `BezierShape` - an outline derived from cubic Bezier segments
//! - `Shape` - the closed set of variants the scene owns and persists
//! - `generators` - circle, half circle, square and line factories

mod bezier;
pub mod generators;
mod polygon;
mod traits;

pub use bezier::BezierShape;
pub use polygon::Polygon;
pub use traits::{Outline, PointRef};

use std::borrow::Cow;

use crate::geometry::{Point, PointSequence};

/// Discriminant of a `Shape`, as stored in scene files
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Polygon = 0,
    Bezier = 1,
}

impl ShapeKind {
    /// The tag written to scene files
    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Map a stored tag back to a kind
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(ShapeKind::Polygon),
            1 => Some(ShapeKind::Bezier),
            _ => None,
        }
    }
}

/// The outline being animated
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Bezier(BezierShape),
}

impl Shape {
    /// Create an empty shape of the given kind
    pub fn empty(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Polygon => Shape::Polygon(Polygon::new()),
            ShapeKind::Bezier => Shape::Bezier(BezierShape::new()),
        }
    }

    /// Which variant this is
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Bezier(_) => ShapeKind::Bezier,
        }
    }

    /// The flattened outline
    ///
    /// For a Bezier shape this is rebuilt on every call, so do not hold it
    /// across edits.
    pub fn points(&self) -> Cow<'_, PointSequence> {
        match self {
            Shape::Polygon(p) => p.outline(),
            Shape::Bezier(b) => b.outline(),
        }
    }

    /// Number of points in the flattened outline
    pub fn point_count(&self) -> usize {
        match self {
            Shape::Polygon(p) => p.len(),
            Shape::Bezier(b) => b.segment_count() * BezierShape::SAMPLES_PER_SEGMENT,
        }
    }

    /// Find the first editable point within `radius` of (x, y)
    pub fn hit_test(&self, x: f64, y: f64, radius: f64) -> Option<PointRef> {
        match self {
            Shape::Polygon(p) => p.hit_test(x, y, radius),
            Shape::Bezier(b) => b.hit_test(x, y, radius),
        }
    }

    /// Resolve a handle from `hit_test`
    ///
    /// Returns `None` if the handle belongs to the other variant or is out
    /// of range.
    pub fn point(&self, handle: PointRef) -> Option<&Point> {
        match (self, handle) {
            (Shape::Polygon(p), PointRef::Vertex(i)) => p.points().get(i),
            (Shape::Bezier(b), PointRef::Anchor(i)) => b.anchors().get(i),
            (Shape::Bezier(b), PointRef::Control(i)) => b.controls().get(i),
            _ => None,
        }
    }

    /// Resolve a handle from `hit_test` for editing
    pub fn point_mut(&mut self, handle: PointRef) -> Option<&mut Point> {
        match (self, handle) {
            (Shape::Polygon(p), PointRef::Vertex(i)) => p.points_mut().get_mut(i),
            (Shape::Bezier(b), PointRef::Anchor(i)) => b.anchors_mut().get_mut(i),
            (Shape::Bezier(b), PointRef::Control(i)) => b.controls_mut().get_mut(i),
            _ => None,
        }
    }

    /// Move a hit-tested point to (x, y), keeping its Z
    ///
    /// Returns `false` if the handle does not resolve.
    pub fn move_point(&mut self, handle: PointRef, x: f64, y: f64) -> bool {
        match self.point_mut(handle) {
            Some(point) => {
                point.x = x;
                point.y = y;
                true
            }
            None => false,
        }
    }

    /// Add a point where the user clicked
    ///
    /// Polygons get a new vertex; Bezier shapes get a new anchor plus the
    /// control points it needs (see `BezierShape::add_anchor`).
    pub fn add_point(&mut self, x: f64, y: f64, control_offset: f64) {
        match self {
            Shape::Polygon(p) => p.add(Point::new_2d(x, y)),
            Shape::Bezier(b) => b.add_anchor(x, y, control_offset),
        }
    }

    /// Remove all points
    pub fn clear(&mut self) {
        match self {
            Shape::Polygon(p) => p.clear(),
            Shape::Bezier(b) => b.clear(),
        }
    }

    /// Get the name of this shape (for UI display)
    pub fn name(&self) -> &str {
        match self {
            Shape::Polygon(p) => p.name(),
            Shape::Bezier(b) => b.name(),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Polygon(Polygon::new())
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<BezierShape> for Shape {
    fn from(b: BezierShape) -> Self {
        Shape::Bezier(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(ShapeKind::Polygon.tag(), 0);
        assert_eq!(ShapeKind::Bezier.tag(), 1);
        assert_eq!(ShapeKind::from_tag(1), Some(ShapeKind::Bezier));
        assert_eq!(ShapeKind::from_tag(2), None);
        assert_eq!(Shape::empty(ShapeKind::Bezier).kind(), ShapeKind::Bezier);
    }

    #[test]
    fn test_edit_polygon() {
        let mut shape = Shape::default();
        shape.add_point(0.0, 0.0, 20.0);
        shape.add_point(100.0, 0.0, 20.0);
        assert_eq!(shape.point_count(), 2);

        let handle = shape.hit_test(98.0, 3.0, 8.0).unwrap();
        assert_eq!(handle, PointRef::Vertex(1));
        assert!(shape.move_point(handle, 50.0, 50.0));
        assert_eq!(shape.points()[1], Point::new_2d(50.0, 50.0));
    }

    #[test]
    fn test_edit_bezier() {
        let mut shape = Shape::empty(ShapeKind::Bezier);
        shape.add_point(0.0, 0.0, 20.0);
        shape.add_point(100.0, 0.0, 20.0);
        assert_eq!(shape.points().len(), 10);
        assert_eq!(shape.point_count(), 10);

        // Control of the second anchor sits at (120, -20)
        let handle = shape.hit_test(121.0, -21.0, 8.0).unwrap();
        assert_eq!(handle, PointRef::Control(1));
        assert!(shape.move_point(handle, 80.0, 40.0));
        assert_eq!(shape.point(handle), Some(&Point::new_2d(80.0, 40.0)));
    }

    #[test]
    fn test_handles_of_other_variant_do_not_resolve() {
        let mut shape = Shape::default();
        shape.add_point(1.0, 1.0, 20.0);
        assert!(shape.point(PointRef::Anchor(0)).is_none());
        assert!(!shape.move_point(PointRef::Vertex(5), 0.0, 0.0));
    }

    #[test]
    fn test_clear() {
        let mut shape = Shape::empty(ShapeKind::Bezier);
        shape.add_point(0.0, 0.0, 20.0);
        shape.add_point(10.0, 0.0, 20.0);
        shape.clear();
        assert!(shape.points().is_empty());
        assert!(shape.hit_test(0.0, 0.0, 100.0).is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(Shape::default().name(), "Polygon");
        assert_eq!(Shape::empty(ShapeKind::Bezier).name(), "Bezier");
    }
}
