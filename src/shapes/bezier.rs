//! Bezier shape - an outline built from cubic Bezier segments
//!
//! The shape stores anchors (points the curve passes through) and control
//! points (which bend the curve). Segment `i` runs from `anchors[i]` to
//! `anchors[i + 1]` and is shaped by `controls[2i]` and `controls[2i + 1]`,
//! so a shape with `n >= 2` anchors has exactly `2 * (n - 1)` controls.
//!
//! ## Flattening
//!
//! The outline is never stored. Each call to `outline()` samples every
//! segment at [`BezierShape::SAMPLES_PER_SEGMENT`] evenly spaced parameter
//! values `u = i / (SAMPLES_PER_SEGMENT - 1)` and evaluates
//!
//! ```text
//! B(u) = u³(a2 + 3(c1 - c2) - a1) + 3u²(a1 - 2c1 + c2) + 3u(c1 - a1) + a1
//! ```
//!
//! component-wise, which is the polynomial form of the cubic with control
//! polygon a1, c1, c2, a2.

use std::borrow::Cow;

use super::traits::{hit_test_points, Outline, PointRef};
use crate::geometry::{Point, PointSequence};

/// An outline made of cubic Bezier segments
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BezierShape {
    anchors: PointSequence,
    controls: PointSequence,
}

impl BezierShape {
    /// Samples emitted for every segment
    pub const SAMPLES_PER_SEGMENT: usize = 10;

    /// Create an empty Bezier shape
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Bezier shape from anchors and controls
    ///
    /// # Panics
    /// Panics if the control count does not match [`Self::counts_match`]
    pub fn from_parts(anchors: PointSequence, controls: PointSequence) -> Self {
        assert!(
            Self::counts_match(anchors.len(), controls.len()),
            "Bezier shape with {} anchors needs {} control points, got {}",
            anchors.len(),
            Self::required_controls(anchors.len()),
            controls.len()
        );
        Self { anchors, controls }
    }

    /// Check the anchor/control count invariant
    ///
    /// With fewer than two anchors there is no segment yet; the lone anchor
    /// still carries the control point the editor placed with it.
    pub fn counts_match(anchors: usize, controls: usize) -> bool {
        controls == Self::required_controls(anchors)
    }

    fn required_controls(anchors: usize) -> usize {
        if anchors < 2 {
            anchors
        } else {
            2 * (anchors - 1)
        }
    }

    /// Points the curve passes through
    pub fn anchors(&self) -> &PointSequence {
        &self.anchors
    }

    /// Mutable access to the anchor positions
    ///
    /// Anchors are added through `add_anchor` and removed with `clear`, so
    /// only a slice is handed out.
    pub fn anchors_mut(&mut self) -> &mut [Point] {
        &mut self.anchors
    }

    /// Points shaping the curve between anchors
    pub fn controls(&self) -> &PointSequence {
        &self.controls
    }

    /// Mutable access to the control point positions
    pub fn controls_mut(&mut self) -> &mut [Point] {
        &mut self.controls
    }

    /// Number of anchors
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Number of control points
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Number of cubic segments
    pub fn segment_count(&self) -> usize {
        self.anchors.len().saturating_sub(1)
    }

    /// Append an anchor the way the editor does on a click
    ///
    /// Every anchor gets a control point offset by (+offset, -offset). From
    /// the third anchor on, the segment's first control is copied from the
    /// previous segment's first control with the same offset.
    pub fn add_anchor(&mut self, x: f64, y: f64, control_offset: f64) {
        self.anchors.add(Point::new_2d(x, y));

        if self.anchors.len() > 2 {
            let last = self.controls[self.controls.len() - 2];
            self.controls
                .add(Point::new_2d(last.x + control_offset, last.y - control_offset));
        }

        self.controls
            .add(Point::new_2d(x + control_offset, y - control_offset));
    }

    /// Evaluate one segment at parameter `u`
    pub fn evaluate(a1: &Point, a2: &Point, c1: &Point, c2: &Point, u: f64) -> Point {
        let cubic = |a1: f64, a2: f64, c1: f64, c2: f64| {
            u.powi(3) * (a2 + 3.0 * (c1 - c2) - a1)
                + 3.0 * u.powi(2) * (a1 - 2.0 * c1 + c2)
                + 3.0 * u * (c1 - a1)
                + a1
        };

        Point::new(
            cubic(a1.x, a2.x, c1.x, c2.x),
            cubic(a1.y, a2.y, c1.y, c2.y),
            cubic(a1.z, a2.z, c1.z, c2.z),
        )
    }

    fn sample_segment(&self, segment: usize, out: &mut PointSequence) {
        let a1 = &self.anchors[segment];
        let a2 = &self.anchors[segment + 1];
        let c1 = &self.controls[2 * segment];
        let c2 = &self.controls[2 * segment + 1];
        let last = (Self::SAMPLES_PER_SEGMENT - 1) as f64;

        for i in 0..Self::SAMPLES_PER_SEGMENT {
            let u = i as f64 / last;
            out.add(Self::evaluate(a1, a2, c1, c2, u));
        }
    }
}

impl Outline for BezierShape {
    fn outline(&self) -> Cow<'_, PointSequence> {
        let segments = self.segment_count();
        let mut points = PointSequence::with_capacity(segments * Self::SAMPLES_PER_SEGMENT);

        for segment in 0..segments {
            self.sample_segment(segment, &mut points);
        }

        Cow::Owned(points)
    }

    /// Control points are tested before anchors
    fn hit_test(&self, x: f64, y: f64, radius: f64) -> Option<PointRef> {
        hit_test_points(&self.controls, x, y, radius)
            .map(PointRef::Control)
            .or_else(|| hit_test_points(&self.anchors, x, y, radius).map(PointRef::Anchor))
    }

    fn clear(&mut self) {
        self.anchors.clear();
        self.controls.clear();
    }

    fn name(&self) -> &str {
        "Bezier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(points: &[Point]) -> PointSequence {
        PointSequence::from_slice(points)
    }

    fn single_segment() -> BezierShape {
        BezierShape::from_parts(
            seq(&[Point::new_2d(0.0, 0.0), Point::new_2d(30.0, 0.0)]),
            seq(&[Point::new_2d(10.0, 20.0), Point::new_2d(20.0, 20.0)]),
        )
    }

    /// Bernstein form, used as an independent reference
    fn bernstein(p0: f64, p1: f64, p2: f64, p3: f64, u: f64) -> f64 {
        let v = 1.0 - u;
        v * v * v * p0 + 3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u * p3
    }

    #[test]
    fn test_outline_matches_analytic_curve() {
        let shape = single_segment();
        let outline = shape.outline();
        assert_eq!(outline.len(), BezierShape::SAMPLES_PER_SEGMENT);

        for (i, p) in outline.iter().enumerate() {
            let u = i as f64 / 9.0;
            let x = bernstein(0.0, 10.0, 20.0, 30.0, u);
            let y = bernstein(0.0, 20.0, 20.0, 0.0, u);
            assert!((p.x - x).abs() < 1e-9, "x mismatch at sample {}", i);
            assert!((p.y - y).abs() < 1e-9, "y mismatch at sample {}", i);
        }

        // Endpoints are the anchors
        assert_eq!(outline[0], Point::new_2d(0.0, 0.0));
        assert_eq!(outline[9], Point::new_2d(30.0, 0.0));
    }

    #[test]
    fn test_outline_needs_two_anchors() {
        let mut shape = BezierShape::new();
        assert!(shape.outline().is_empty());

        shape.add_anchor(5.0, 5.0, 20.0);
        assert_eq!(shape.anchor_count(), 1);
        assert!(shape.outline().is_empty());
    }

    #[test]
    fn test_outline_is_rebuilt_after_edit() {
        let mut shape = single_segment();
        let before = shape.outline().into_owned();
        shape.anchors_mut()[1] = Point::new_2d(60.0, 0.0);
        let after = shape.outline();
        assert_ne!(before[9], after[9]);
        assert_eq!(after[9], Point::new_2d(60.0, 0.0));
    }

    #[test]
    fn test_add_anchor_keeps_control_invariant() {
        let mut shape = BezierShape::new();
        shape.add_anchor(0.0, 0.0, 20.0);
        assert_eq!(shape.control_count(), 1);
        assert_eq!(shape.controls()[0], Point::new_2d(20.0, -20.0));

        for i in 1..5 {
            shape.add_anchor(i as f64 * 50.0, 0.0, 20.0);
            assert_eq!(shape.control_count(), 2 * (shape.anchor_count() - 1));
            assert!(BezierShape::counts_match(shape.anchor_count(), shape.control_count()));
        }

        // Third anchor copies the previous segment's first control, offset
        assert_eq!(shape.controls()[2], Point::new_2d(40.0, -40.0));
        assert_eq!(shape.outline().len(), 4 * BezierShape::SAMPLES_PER_SEGMENT);
    }

    #[test]
    fn test_hit_test_prefers_controls() {
        let shape = BezierShape::from_parts(
            seq(&[Point::new_2d(0.0, 0.0), Point::new_2d(30.0, 0.0)]),
            seq(&[Point::new_2d(1.0, 1.0), Point::new_2d(20.0, 20.0)]),
        );
        assert_eq!(shape.hit_test(0.0, 0.0, 2.0), Some(PointRef::Control(0)));
        assert_eq!(shape.hit_test(30.0, 0.0, 2.0), Some(PointRef::Anchor(1)));
        assert_eq!(shape.hit_test(100.0, 100.0, 2.0), None);
    }

    #[test]
    fn test_clear_empties_both_sequences() {
        let mut shape = single_segment();
        shape.clear();
        assert_eq!(shape.anchor_count(), 0);
        assert_eq!(shape.control_count(), 0);
    }

    #[test]
    fn test_lone_anchor_needs_its_control() {
        assert!(BezierShape::counts_match(0, 0));
        assert!(BezierShape::counts_match(1, 1));
        assert!(!BezierShape::counts_match(1, 0));
        assert!(!BezierShape::counts_match(0, 1));
    }

    #[test]
    #[should_panic]
    fn test_from_parts_rejects_anchor_without_control() {
        BezierShape::from_parts(seq(&[Point::new_2d(0.0, 0.0)]), PointSequence::new());
    }

    #[test]
    #[should_panic]
    fn test_from_parts_rejects_bad_counts() {
        BezierShape::from_parts(
            seq(&[Point::new_2d(0.0, 0.0), Point::new_2d(30.0, 0.0)]),
            seq(&[Point::new_2d(1.0, 1.0)]),
        );
    }
}
