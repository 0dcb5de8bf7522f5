//! Actions module - steppable transforms that animate the outline
//!
//! This module provides:
//! - `Transform` trait implemented by every transform
//! - Transforms: `Translate`, `Rotate`, `Scale`
//! - `Action` - a transform plus its step count and `with_previous` flag
//!
//! ## Chaining
//!
//! A storyboard runs its actions in list order. An action with
//! `with_previous` set does not wait for its predecessor: it runs in the
//! same frames as the nearest earlier action without the flag.

mod rotate;
mod scale;
mod traits;
mod translate;

pub use rotate::{Rotate, RotationAxis, RotationOrigin};
pub use scale::Scale;
pub use traits::Transform;
pub use translate::Translate;

use crate::geometry::Point;

/// Discriminant of an action, as stored in scene files
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionTag {
    Translate = 0,
    Scale = 1,
    Rotate = 2,
}

impl ActionTag {
    /// The tag written to scene files
    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Map a stored tag back to an action type
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(ActionTag::Translate),
            1 => Some(ActionTag::Scale),
            2 => Some(ActionTag::Rotate),
            _ => None,
        }
    }
}

/// The transform an action performs
#[derive(Clone, Debug, PartialEq)]
pub enum ActionKind {
    Translate(Translate),
    Rotate(Rotate),
    Scale(Scale),
}

impl From<Translate> for ActionKind {
    fn from(t: Translate) -> Self {
        ActionKind::Translate(t)
    }
}

impl From<Rotate> for ActionKind {
    fn from(r: Rotate) -> Self {
        ActionKind::Rotate(r)
    }
}

impl From<Scale> for ActionKind {
    fn from(s: Scale) -> Self {
        ActionKind::Scale(s)
    }
}

/// One entry in a storyboard
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    steps: u32,
    with_previous: bool,
    kind: ActionKind,
}

impl Action {
    /// Create a sequential action lasting `steps` steps
    ///
    /// # Panics
    /// Panics if `steps` is zero
    pub fn new(kind: impl Into<ActionKind>, steps: u32) -> Self {
        assert!(steps > 0, "an action needs at least one step");
        Self {
            steps,
            with_previous: false,
            kind: kind.into(),
        }
    }

    /// Translate by (dx, dy, dz) over `steps` steps
    pub fn translate(dx: f64, dy: f64, dz: f64, steps: u32) -> Self {
        Self::new(Translate::new(dx, dy, dz), steps)
    }

    /// Rotate by `angle` radians over `steps` steps
    pub fn rotate(angle: f64, origin: RotationOrigin, axis: RotationAxis, steps: u32) -> Self {
        Self::new(Rotate::new(angle, origin, axis), steps)
    }

    /// Scale by (sx, sy, sz) over `steps` steps
    pub fn scale(sx: f64, sy: f64, sz: f64, steps: u32) -> Self {
        Self::new(Scale::new(sx, sy, sz), steps)
    }

    /// Builder form of `set_with_previous(true)`
    pub fn alongside_previous(mut self) -> Self {
        self.with_previous = true;
        self
    }

    /// Number of steps the action takes to complete
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Change the step count
    ///
    /// # Panics
    /// Panics if `steps` is zero
    pub fn set_steps(&mut self, steps: u32) {
        assert!(steps > 0, "an action needs at least one step");
        self.steps = steps;
    }

    /// Whether the action runs in the same frames as its predecessor
    pub fn with_previous(&self) -> bool {
        self.with_previous
    }

    pub fn set_with_previous(&mut self, value: bool) {
        self.with_previous = value;
    }

    /// The transform
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Mutable access to the transform parameters
    pub fn kind_mut(&mut self) -> &mut ActionKind {
        &mut self.kind
    }

    /// Type tag for persistence
    pub fn tag(&self) -> ActionTag {
        match self.kind {
            ActionKind::Translate(_) => ActionTag::Translate,
            ActionKind::Rotate(_) => ActionTag::Rotate,
            ActionKind::Scale(_) => ActionTag::Scale,
        }
    }

    /// Get the name of this action (for UI lists)
    pub fn name(&self) -> &str {
        match &self.kind {
            ActionKind::Translate(t) => t.name(),
            ActionKind::Rotate(r) => r.name(),
            ActionKind::Scale(s) => s.name(),
        }
    }

    /// Prepare the action to start from `points`
    pub fn initialize(&mut self, points: &[Point]) {
        let steps = self.steps;
        match &mut self.kind {
            ActionKind::Translate(t) => t.initialize(steps, points),
            ActionKind::Rotate(r) => r.initialize(steps, points),
            ActionKind::Scale(s) => s.initialize(steps, points),
        }
    }

    /// Apply step `step` to `points` in place
    ///
    /// # Panics
    /// Panics if the action was never initialized
    pub fn execute(&mut self, step: u32, points: &mut [Point]) {
        match &mut self.kind {
            ActionKind::Translate(t) => t.execute(step, points),
            ActionKind::Rotate(r) => r.execute(step, points),
            ActionKind::Scale(s) => s.execute(step, points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_flags() {
        let a = Action::translate(1.0, 2.0, 3.0, 5);
        assert_eq!(a.steps(), 5);
        assert!(!a.with_previous());
        assert_eq!(a.tag(), ActionTag::Translate);
        assert_eq!(a.name(), "Translate");

        let b = Action::scale(1.0, 1.0, 1.0, 2).alongside_previous();
        assert!(b.with_previous());
        assert_eq!(b.tag(), ActionTag::Scale);

        let c = Action::rotate(1.0, RotationOrigin::Zero, RotationAxis::X, 3);
        assert_eq!(c.tag(), ActionTag::Rotate);
        assert_eq!(c.name(), "Rotate");
    }

    #[test]
    fn test_tags_match_file_format() {
        assert_eq!(ActionTag::Translate.tag(), 0);
        assert_eq!(ActionTag::Scale.tag(), 1);
        assert_eq!(ActionTag::Rotate.tag(), 2);
        assert_eq!(ActionTag::from_tag(2), Some(ActionTag::Rotate));
        assert_eq!(ActionTag::from_tag(3), None);
    }

    #[test]
    fn test_edit_parameters() {
        let mut action = Action::translate(0.0, 0.0, 0.0, 32);
        if let ActionKind::Translate(t) = action.kind_mut() {
            t.delta = Point::new(4.0, 0.0, 0.0);
        }
        action.set_steps(2);

        let mut points = [Point::origin()];
        action.initialize(&points);
        action.execute(0, &mut points);
        assert_eq!(points[0], Point::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_played_action_equals_fresh_copy() {
        let fresh = vec![
            Action::translate(3.0, 0.0, 1.0, 4),
            Action::scale(2.0, 2.0, 0.0, 4).alongside_previous(),
            Action::rotate(1.0, RotationOrigin::Center, RotationAxis::Y, 4),
        ];
        let mut played = fresh.clone();
        let mut points = [Point::new(1.0, 2.0, 3.0), Point::new(-4.0, 0.5, 2.0)];
        for action in &mut played {
            action.initialize(&points);
            action.execute(0, &mut points);
        }
        assert_eq!(played, fresh);

        played[2].set_steps(8);
        assert_ne!(played, fresh);
        if let ActionKind::Rotate(r) = played[2].kind_mut() {
            r.axis = RotationAxis::X;
        }
        assert_ne!(played[2].kind(), fresh[2].kind());
    }

    #[test]
    #[should_panic]
    fn test_zero_steps_rejected() {
        Action::translate(1.0, 0.0, 0.0, 0);
    }
}
