//! Transform trait - a geometric change spread over a number of steps
//!
//! A transform is driven in two phases:
//! 1. `initialize` once, with the outline as it looks when the action
//!    starts, to work out the per-step increment
//! 2. `execute` once per step, each call adding one increment in place
//!
//! `execute` is additive, not absolute: calling it twice with the same step
//! applies the increment twice.

use crate::geometry::Point;

/// A steppable transform applied to a point sequence
pub trait Transform {
    /// Prepare the per-step increment for an action lasting `steps` steps
    ///
    /// `points` is the outline the action starts from.
    fn initialize(&mut self, steps: u32, points: &[Point]);

    /// Apply one increment to `points`
    ///
    /// # Panics
    /// Panics if called before `initialize`
    fn execute(&mut self, step: u32, points: &mut [Point]);

    /// Get the name of this transform (for UI)
    fn name(&self) -> &str;
}

/// Unwrap the state produced by `initialize`
///
/// Executing an action that was never initialized is a caller bug.
pub(crate) fn prepared<T: Copy>(state: Option<T>, name: &str) -> T {
    match state {
        Some(state) => state,
        None => panic!("{} action executed before initialize", name),
    }
}
