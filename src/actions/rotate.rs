//! Rotate action - turns the outline about an axis over time
//!
//! ## Origin
//!
//! The pivot is chosen once, when the action is initialized, from the
//! outline the action starts with:
//!
//! | Origin   | Pivot                                                         |
//! |----------|---------------------------------------------------------------|
//! | `Zero`   | (0, 0, 0)                                                     |
//! | `Center` | centroid of all points                                        |
//! | `Left`   | leftmost point, with Y at the middle of top and bottom        |
//! | `Right`  | rightmost point, with Y at the middle of top and bottom       |
//! | `Top`    | highest point, with Z at the middle of front and back         |
//! | `Bottom` | lowest point, with Z at the middle of front and back          |
//!
//! Each step rotates every point by the same angle about an axis through
//! the pivot parallel to X, Y or Z.

use nalgebra::{Rotation3, Vector3};

use super::traits::{prepared, Transform};
use crate::geometry::Point;

/// How the rotation pivot is picked from the starting outline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationOrigin {
    Left = 0,
    Right = 1,
    Top = 2,
    Bottom = 3,
    #[default]
    Center = 4,
    Zero = 5,
}

impl RotationOrigin {
    /// The tag written to scene files
    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Map a stored tag back to an origin
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(RotationOrigin::Left),
            1 => Some(RotationOrigin::Right),
            2 => Some(RotationOrigin::Top),
            3 => Some(RotationOrigin::Bottom),
            4 => Some(RotationOrigin::Center),
            5 => Some(RotationOrigin::Zero),
            _ => None,
        }
    }

    /// Every origin, in tag order (for UI lists)
    pub fn all() -> &'static [RotationOrigin] {
        &[
            RotationOrigin::Left,
            RotationOrigin::Right,
            RotationOrigin::Top,
            RotationOrigin::Bottom,
            RotationOrigin::Center,
            RotationOrigin::Zero,
        ]
    }

    /// Resolve the pivot for `points`
    ///
    /// An empty outline resolves to (0, 0, 0) for every origin.
    pub fn resolve(self, points: &[Point]) -> Point {
        let midpoint = |a: Option<Point>, b: Option<Point>, axis: fn(&Point) -> f64| match (a, b) {
            (Some(a), Some(b)) => (axis(&a) + axis(&b)) / 2.0,
            _ => 0.0,
        };
        let y = |p: &Point| p.y;
        let z = |p: &Point| p.z;

        match self {
            RotationOrigin::Zero => Point::origin(),
            RotationOrigin::Center => Point::centroid(points),
            RotationOrigin::Left | RotationOrigin::Right => {
                let edge = if self == RotationOrigin::Left {
                    extreme(points, |p| p.x, |a, b| a < b)
                } else {
                    extreme(points, |p| p.x, |a, b| a > b)
                };
                let top = extreme(points, y, |a, b| a > b);
                let bottom = extreme(points, y, |a, b| a < b);

                edge.map_or(Point::origin(), |p| Point::new(p.x, midpoint(top, bottom, y), p.z))
            }
            RotationOrigin::Top | RotationOrigin::Bottom => {
                let edge = if self == RotationOrigin::Top {
                    extreme(points, y, |a, b| a > b)
                } else {
                    extreme(points, y, |a, b| a < b)
                };
                let front = extreme(points, z, |a, b| a > b);
                let back = extreme(points, z, |a, b| a < b);

                edge.map_or(Point::origin(), |p| Point::new(p.x, p.y, midpoint(front, back, z)))
            }
        }
    }
}

/// First point whose `key` beats every earlier one
fn extreme(
    points: &[Point],
    key: impl Fn(&Point) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Option<Point> {
    let (first, rest) = points.split_first()?;
    let best = rest.iter().fold(*first, |best, p| {
        if better(key(p), key(&best)) {
            *p
        } else {
            best
        }
    });
    Some(best)
}

/// Axis the outline turns around
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationAxis {
    X = 0,
    Y = 1,
    #[default]
    Z = 2,
}

impl RotationAxis {
    /// The tag written to scene files
    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Map a stored tag back to an axis
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(RotationAxis::X),
            1 => Some(RotationAxis::Y),
            2 => Some(RotationAxis::Z),
            _ => None,
        }
    }

    fn unit(self) -> nalgebra::Unit<Vector3<f64>> {
        match self {
            RotationAxis::X => Vector3::x_axis(),
            RotationAxis::Y => Vector3::y_axis(),
            RotationAxis::Z => Vector3::z_axis(),
        }
    }
}

/// Rotates every point by `angle` radians in total, in equal steps
#[derive(Clone, Debug, Default)]
pub struct Rotate {
    /// Total rotation in radians
    pub angle: f64,
    /// How the pivot is chosen
    pub origin: RotationOrigin,
    /// Axis of rotation
    pub axis: RotationAxis,
    state: Option<(Point, Rotation3<f64>)>,
}

/// Compares parameters only; the resolved pivot is ignored
impl PartialEq for Rotate {
    fn eq(&self, other: &Self) -> bool {
        self.angle == other.angle && self.origin == other.origin && self.axis == other.axis
    }
}

impl Rotate {
    /// Create a rotation by `angle` radians
    pub fn new(angle: f64, origin: RotationOrigin, axis: RotationAxis) -> Self {
        Self {
            angle,
            origin,
            axis,
            state: None,
        }
    }

    /// The resolved pivot, once initialized
    pub fn pivot(&self) -> Option<Point> {
        self.state.map(|(pivot, _)| pivot)
    }
}

impl Transform for Rotate {
    fn initialize(&mut self, steps: u32, points: &[Point]) {
        let pivot = self.origin.resolve(points);
        let rotation = Rotation3::from_axis_angle(&self.axis.unit(), self.angle / steps as f64);
        self.state = Some((pivot, rotation));
    }

    fn execute(&mut self, _step: u32, points: &mut [Point]) {
        let (pivot, rotation) = prepared(self.state, self.name());

        for point in points.iter_mut() {
            let offset: Vector3<f64> = (*point - pivot).into();
            *point = pivot + Point::from(rotation * offset);
        }
    }

    fn name(&self) -> &str {
        "Rotate"
    }
}
