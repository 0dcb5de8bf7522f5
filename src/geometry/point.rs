//! Point type - a 3D coordinate
//!
//! Points are small `Copy` values and are passed by value everywhere.
//!
//! ## Equality
//!
//! Two points compare equal when they differ by less than [`Point::EPSILON`]
//! on every axis. Hit-testing and `Sequence::contains` rely on this, so a
//! point that drifted by floating-point noise is still "the same" point.

use std::ops::{Add, Div, Mul, Sub};

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A point in 3D space
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Per-axis tolerance used by `==`
    pub const EPSILON: f64 = 1e-5;

    /// Create a point from three coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a point on the Z = 0 plane
    pub const fn new_2d(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// The origin (0, 0, 0)
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance from the origin
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Arithmetic mean of a set of points
    ///
    /// Returns the origin for an empty set.
    pub fn centroid(points: &[Point]) -> Point {
        if points.is_empty() {
            return Point::origin();
        }

        let (sx, sy, sz) = points
            .iter()
            .fold((0.0, 0.0, 0.0), |(sx, sy, sz), p| (sx + p.x, sy + p.y, sz + p.z));
        let count = points.len() as f64;

        Point::new(sx / count, sy / count, sz / count)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < Self::EPSILON
            && (self.y - other.y).abs() < Self::EPSILON
            && (self.z - other.z).abs() < Self::EPSILON
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Component-wise product
impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<Point> for Point3<f64> {
    fn from(p: Point) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<Point3<f64>> for Point {
    fn from(p: Point3<f64>) -> Self {
        Point::new(p.x, p.y, p.z)
    }
}

impl From<Point> for Vector3<f64> {
    fn from(p: Point) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}
