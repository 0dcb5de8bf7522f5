//! Scale action - grows or shrinks the outline radially about its centroid
//!
//! Scaling is not a plain multiplication. On every step the centroid and
//! the distance of the nearest point to it are measured again, and each
//! point is pushed outwards along its direction from the centroid by
//!
//! ```text
//! increment * (distance / nearest_distance)
//! ```
//!
//! so points far from the centroid move faster than near ones. The
//! direction is taken in spherical form (azimuth from atan2 of the XY
//! offset, polar angle from the Z offset) and the per-axis increment is
//! applied to the matching Cartesian component.
//!
//! ## Degenerate input
//!
//! Points within `Point::EPSILON` of the centroid have no direction and are
//! left where they are. The nearest distance is taken over the remaining
//! points; if every point sits on the centroid the step changes nothing.

use super::traits::{prepared, Transform};
use crate::geometry::Point;

/// Scales the outline by `factor` in total, in equal steps
#[derive(Clone, Debug, Default)]
pub struct Scale {
    /// Total scale amount per axis
    pub factor: Point,
    increment: Option<Point>,
}

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.factor == other.factor
    }
}

impl Scale {
    /// Create a scale by (sx, sy, sz)
    pub fn new(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            factor: Point::new(sx, sy, sz),
            increment: None,
        }
    }

    /// Amount applied on every step, once initialized
    pub fn increment(&self) -> Option<Point> {
        self.increment
    }
}

impl Transform for Scale {
    fn initialize(&mut self, steps: u32, _points: &[Point]) {
        self.increment = Some(self.factor / steps as f64);
    }

    fn execute(&mut self, _step: u32, points: &mut [Point]) {
        let increment = prepared(self.increment, self.name());
        let centroid = Point::centroid(points);

        let nearest = points
            .iter()
            .map(|p| p.distance(&centroid))
            .filter(|d| *d >= Point::EPSILON)
            .fold(f64::INFINITY, f64::min);

        if !nearest.is_finite() {
            log::debug!("Scale step skipped: all points coincide with the centroid");
            return;
        }

        for point in points.iter_mut() {
            let distance = point.distance(&centroid);
            if distance < Point::EPSILON {
                continue;
            }

            let azimuth = (point.y - centroid.y).atan2(point.x - centroid.x);
            let polar = ((point.z - centroid.z) / distance).clamp(-1.0, 1.0).acos();
            let ratio = distance / nearest;

            point.x = centroid.x + (distance + increment.x * ratio) * azimuth.cos() * polar.sin();
            point.y = centroid.y + (distance + increment.y * ratio) * azimuth.sin() * polar.sin();
            point.z = centroid.z + (distance + increment.z * ratio) * polar.cos();
        }
    }

    fn name(&self) -> &str {
        "Scale"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_scale_square_uniformly() {
        // All corners are equally far from the centroid, so every ratio is 1
        let mut points = [
            Point::new_2d(-1.0, -1.0),
            Point::new_2d(1.0, -1.0),
            Point::new_2d(1.0, 1.0),
            Point::new_2d(-1.0, 1.0),
        ];
        let radius = 2.0_f64.sqrt();
        let mut scale = Scale::new(2.0, 2.0, 0.0);
        scale.initialize(2, &points);
        scale.execute(0, &mut points);

        for p in &points {
            assert!((p.magnitude() - (radius + 1.0)).abs() < EPS);
            assert!(p.z.abs() < EPS);
        }
        assert!((Point::centroid(&points).magnitude()).abs() < EPS);
    }

    #[test]
    fn test_far_points_move_faster() {
        let mut points = [
            Point::new_2d(1.0, 0.0),
            Point::new_2d(-1.0, 0.0),
            Point::new_2d(0.0, 3.0),
            Point::new_2d(0.0, -3.0),
        ];
        let mut scale = Scale::new(1.0, 1.0, 1.0);
        scale.initialize(1, &points);
        scale.execute(0, &mut points);

        // Nearest distance is 1; the far points move three times as much
        assert!((points[0].x - 2.0).abs() < EPS);
        assert!((points[2].y - 6.0).abs() < EPS);
    }

    #[test]
    fn test_point_on_centroid_is_left_alone() {
        let mut points = [
            Point::new_2d(0.0, 0.0),
            Point::new_2d(2.0, 0.0),
            Point::new_2d(-2.0, 0.0),
        ];
        let mut scale = Scale::new(1.0, 1.0, 1.0);
        scale.initialize(1, &points);
        scale.execute(0, &mut points);

        assert_eq!(points[0], Point::origin());
        assert!((points[1].x - 3.0).abs() < EPS);
        assert!((points[2].x + 3.0).abs() < EPS);
        assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()));
    }

    #[test]
    fn test_all_coincident_is_noop() {
        let mut points = [Point::new(4.0, 4.0, 4.0); 3];
        let mut scale = Scale::new(5.0, 5.0, 5.0);
        scale.initialize(1, &points);
        scale.execute(0, &mut points);
        assert!(points.iter().all(|p| *p == Point::new(4.0, 4.0, 4.0)));
    }

    #[test]
    fn test_scale_along_z() {
        let mut points = [Point::new(0.0, 0.0, 1.0), Point::new(0.0, 0.0, -1.0)];
        let mut scale = Scale::new(0.0, 0.0, 4.0);
        scale.initialize(4, &points);
        scale.execute(0, &mut points);
        assert!((points[0].z - 2.0).abs() < EPS);
        assert!((points[1].z + 2.0).abs() < EPS);
    }
}
