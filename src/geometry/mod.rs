//! Geometry module - points and point sequences
//!
//! This module provides:
//! - `Point` - a 3D coordinate with epsilon-tolerant equality
//! - `Sequence<T>` - a growable, index-addressable container
//! - `PointSequence` - the outline/frame type used everywhere else

mod point;
mod sequence;

pub use point::Point;
pub use sequence::{PointSequence, Sequence};
