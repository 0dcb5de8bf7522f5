//! Translate action - moves the outline by a fixed offset over time

use super::traits::{prepared, Transform};
use crate::geometry::Point;

/// Moves every point by `delta` in total, in equal steps
#[derive(Clone, Debug, Default)]
pub struct Translate {
    /// Total offset per axis
    pub delta: Point,
    increment: Option<Point>,
}

// Runtime increments are not part of the action's identity
impl PartialEq for Translate {
    fn eq(&self, other: &Self) -> bool {
        self.delta == other.delta
    }
}

impl Translate {
    /// Create a translation by (dx, dy, dz)
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            delta: Point::new(dx, dy, dz),
            increment: None,
        }
    }

    /// Offset added on every step, once initialized
    pub fn increment(&self) -> Option<Point> {
        self.increment
    }
}

impl Transform for Translate {
    fn initialize(&mut self, steps: u32, _points: &[Point]) {
        self.increment = Some(self.delta / steps as f64);
    }

    fn execute(&mut self, _step: u32, points: &mut [Point]) {
        let increment = prepared(self.increment, self.name());

        for point in points.iter_mut() {
            *point = *point + increment;
        }
    }

    fn name(&self) -> &str {
        "Translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_is_linear() {
        let original = [Point::new(1.0, 2.0, 3.0), Point::new(-4.0, 0.0, 8.0)];
        let mut points = original;
        let mut translate = Translate::new(6.0, -3.0, 1.5);
        translate.initialize(3, &points);

        for k in 1..=3 {
            translate.execute(k - 1, &mut points);
            for (p, o) in points.iter().zip(original.iter()) {
                let k = k as f64;
                assert!((p.x - (o.x + k * 2.0)).abs() < 1e-9);
                assert!((p.y - (o.y - k * 1.0)).abs() < 1e-9);
                assert!((p.z - (o.z + k * 0.5)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_execute_is_additive() {
        let mut points = [Point::origin()];
        let mut translate = Translate::new(2.0, 0.0, 0.0);
        translate.initialize(2, &points);
        translate.execute(0, &mut points);
        translate.execute(0, &mut points);
        assert_eq!(points[0], Point::new(2.0, 0.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "before initialize")]
    fn test_execute_requires_initialize() {
        let mut points = [Point::origin()];
        Translate::new(1.0, 1.0, 1.0).execute(0, &mut points);
    }
}
