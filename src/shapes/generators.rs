//! Shape generators - ready-made outlines for the editor's shape menu
//!
//! All generators return a `Polygon`. The `on_z` flag of the round shapes
//! selects the plane: `true` draws in the Y/Z plane (x = 0), which extrudes
//! nicely along X; `false` draws in the X/Y plane.

use std::f64::consts::{PI, TAU};

use super::polygon::Polygon;
use crate::geometry::{Point, PointSequence};

fn arc(radius: f64, points: usize, sweep: f64, on_z: bool) -> Polygon {
    if points == 0 {
        return Polygon::new();
    }

    let step = sweep / points as f64;
    (0..=points)
        .map(|i| {
            let angle = i as f64 * step;
            if on_z {
                Point::new(0.0, radius * angle.sin(), radius * angle.cos())
            } else {
                Point::new(radius * angle.cos(), radius * angle.sin(), 0.0)
            }
        })
        .collect::<PointSequence>()
        .into()
}

/// A full circle with `points` segments
///
/// The first point is repeated at the end, giving `points + 1` vertices.
pub fn circle(radius: f64, points: usize, on_z: bool) -> Polygon {
    arc(radius, points, TAU, on_z)
}

/// A half circle with `points` segments (`points + 1` vertices)
pub fn half_circle(radius: f64, points: usize, on_z: bool) -> Polygon {
    arc(radius, points, PI, on_z)
}

/// A square outline centred on the origin in the X/Y plane
///
/// `points` is spread over the four edges, `points / 4` per edge, traced
/// clockwise from the top-left corner. Fewer than four points gives an
/// empty polygon.
pub fn square(size: f64, points: usize) -> Polygon {
    let per_edge = points / 4;
    if per_edge == 0 {
        return Polygon::new();
    }

    let half = size / 2.0;
    let step = size / per_edge as f64;
    let mut polygon = Polygon::new();

    for i in 0..per_edge {
        polygon.add(Point::new_2d(-half + i as f64 * step, half));
    }
    for i in 0..per_edge {
        polygon.add(Point::new_2d(half, half - i as f64 * step));
    }
    for i in 0..per_edge {
        polygon.add(Point::new_2d(half - i as f64 * step, -half));
    }
    for i in 0..per_edge {
        polygon.add(Point::new_2d(-half, -half + i as f64 * step));
    }

    polygon
}

/// A horizontal run of `points` vertices along the top edge of a
/// `size`-wide box (y = size / 2), starting at x = -size / 2
pub fn line(size: f64, points: usize) -> Polygon {
    if points == 0 {
        return Polygon::new();
    }

    let half = size / 2.0;
    let step = size / points as f64;
    (0..points)
        .map(|i| Point::new_2d(-half + i as f64 * step, half))
        .collect::<PointSequence>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_on_z() {
        let c = circle(10.0, 4, true);
        assert_eq!(c.len(), 5);
        assert_eq!(c.points()[0], Point::new(0.0, 0.0, 10.0));
        assert_eq!(c.points()[1], Point::new(0.0, 10.0, 0.0));
        assert_eq!(c.points()[4], c.points()[0]);
        assert!(c.points().iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn test_circle_on_xy() {
        let c = circle(10.0, 32, false);
        assert_eq!(c.len(), 33);
        assert!(c
            .points()
            .iter()
            .all(|p| (p.magnitude() - 10.0).abs() < 1e-9 && p.z == 0.0));
    }

    #[test]
    fn test_half_circle() {
        let h = half_circle(5.0, 8, false);
        assert_eq!(h.len(), 9);
        assert_eq!(h.points()[0], Point::new_2d(5.0, 0.0));
        assert_eq!(h.points()[8], Point::new_2d(-5.0, 0.0));
    }

    #[test]
    fn test_square() {
        let s = square(10.0, 8);
        assert_eq!(s.len(), 8);
        assert_eq!(s.points()[0], Point::new_2d(-5.0, 5.0));
        assert_eq!(s.points()[2], Point::new_2d(5.0, 5.0));
        assert_eq!(s.points()[4], Point::new_2d(5.0, -5.0));
        assert_eq!(s.points()[6], Point::new_2d(-5.0, -5.0));

        assert!(square(10.0, 3).is_empty());
    }

    #[test]
    fn test_line() {
        let l = line(10.0, 5);
        assert_eq!(l.len(), 5);
        assert_eq!(l.points()[0], Point::new_2d(-5.0, 5.0));
        assert_eq!(l.points()[4], Point::new_2d(3.0, 5.0));
        assert!(line(10.0, 0).is_empty());
    }
}
