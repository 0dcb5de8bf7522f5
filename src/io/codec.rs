//! Encode/Decode implementations for every persisted model type

use std::io::{Read, Write};

use super::{Decode, Encode, FormatError, StreamReader, StreamWriter};
use crate::actions::{
    Action, ActionKind, ActionTag, Rotate, RotationAxis, RotationOrigin, Scale, Translate,
};
use crate::geometry::{Point, PointSequence};
use crate::scene::Scene;
use crate::shapes::{BezierShape, Polygon, Shape, ShapeKind};
use crate::storyboard::Storyboard;

/// Upper bound on items reserved up front from an untrusted count
const MAX_PREALLOCATION: usize = 4096;

impl Encode for Point {
    fn encode<W: Write>(&self, out: &mut StreamWriter<W>) -> Result<(), FormatError> {
        out.write_f64(self.x)?;
        out.write_f64(self.y)?;
        out.write_f64(self.z)
    }
}

impl Decode for Point {
    fn decode<R: Read>(input: &mut StreamReader<R>) -> Result<Self, FormatError> {
        Ok(Point::new(input.read_f64()?, input.read_f64()?, input.read_f64()?))
    }
}

impl Encode for PointSequence {
    fn encode<W: Write>(&self, out: &mut StreamWriter<W>) -> Result<(), FormatError> {
        out.write_len(self.len())?;
        for point in self {
            point.encode(out)?;
        }
        Ok(())
    }
}

impl Decode for PointSequence {
    fn decode<R: Read>(input: &mut StreamReader<R>) -> Result<Self, FormatError> {
        let count = input.read_u32()? as usize;
        let mut points = PointSequence::with_capacity(count.min(MAX_PREALLOCATION));
        for _ in 0..count {
            points.add(Point::decode(input)?);
        }
        Ok(points)
    }
}

impl Encode for Shape {
    fn encode<W: Write>(&self, out: &mut StreamWriter<W>) -> Result<(), FormatError> {
        out.write_i32(self.kind().tag())?;
        match self {
            Shape::Polygon(polygon) => polygon.points().encode(out),
            Shape::Bezier(bezier) => {
                bezier.anchors().encode(out)?;
                bezier.controls().encode(out)
            }
        }
    }
}

impl Decode for Shape {
    fn decode<R: Read>(input: &mut StreamReader<R>) -> Result<Self, FormatError> {
        let tag = input.read_i32()?;
        match ShapeKind::from_tag(tag).ok_or(FormatError::UnknownShapeTag(tag))? {
            ShapeKind::Polygon => Ok(Polygon::from_points(PointSequence::decode(input)?).into()),
            ShapeKind::Bezier => {
                let anchors = PointSequence::decode(input)?;
                let controls = PointSequence::decode(input)?;
                if !BezierShape::counts_match(anchors.len(), controls.len()) {
                    return Err(FormatError::ControlCountMismatch {
                        anchors: anchors.len(),
                        controls: controls.len(),
                    });
                }
                Ok(BezierShape::from_parts(anchors, controls).into())
            }
        }
    }
}

impl Encode for Action {
    fn encode<W: Write>(&self, out: &mut StreamWriter<W>) -> Result<(), FormatError> {
        let steps = i32::try_from(self.steps())
            .map_err(|_| FormatError::TooManyItems(self.steps() as usize))?;

        out.write_i32(self.tag().tag())?;
        out.write_i32(steps)?;
        out.write_bool(self.with_previous())?;

        match self.kind() {
            ActionKind::Translate(t) => t.delta.encode(out),
            ActionKind::Scale(s) => s.factor.encode(out),
            ActionKind::Rotate(r) => {
                out.write_f64(r.angle)?;
                out.write_i32(r.origin.tag())?;
                out.write_i32(r.axis.tag())
            }
        }
    }
}

impl Decode for Action {
    fn decode<R: Read>(input: &mut StreamReader<R>) -> Result<Self, FormatError> {
        let tag = input.read_i32()?;
        let tag = ActionTag::from_tag(tag).ok_or(FormatError::UnknownActionTag(tag))?;

        let steps = input.read_i32()?;
        let steps = u32::try_from(steps)
            .ok()
            .filter(|s| *s > 0)
            .ok_or(FormatError::InvalidSteps(steps))?;
        let with_previous = input.read_bool()?;

        let kind: ActionKind = match tag {
            ActionTag::Translate => {
                let delta = Point::decode(input)?;
                Translate::new(delta.x, delta.y, delta.z).into()
            }
            ActionTag::Scale => {
                let factor = Point::decode(input)?;
                Scale::new(factor.x, factor.y, factor.z).into()
            }
            ActionTag::Rotate => {
                let angle = input.read_f64()?;
                let origin = input.read_i32()?;
                let origin = RotationOrigin::from_tag(origin)
                    .ok_or(FormatError::UnknownRotationOrigin(origin))?;
                let axis = input.read_i32()?;
                let axis =
                    RotationAxis::from_tag(axis).ok_or(FormatError::UnknownRotationAxis(axis))?;
                Rotate::new(angle, origin, axis).into()
            }
        };

        let mut action = Action::new(kind, steps);
        action.set_with_previous(with_previous);
        Ok(action)
    }
}

impl Encode for Storyboard {
    fn encode<W: Write>(&self, out: &mut StreamWriter<W>) -> Result<(), FormatError> {
        out.write_len(self.action_count())?;
        for action in self.actions() {
            action.encode(out)?;
        }
        Ok(())
    }
}

impl Decode for Storyboard {
    fn decode<R: Read>(input: &mut StreamReader<R>) -> Result<Self, FormatError> {
        let count = input.read_u32()? as usize;
        let mut actions = Vec::with_capacity(count.min(MAX_PREALLOCATION));
        for _ in 0..count {
            actions.push(Action::decode(input)?);
        }
        Ok(Storyboard::with_actions(actions))
    }
}

impl Encode for Scene {
    fn encode<W: Write>(&self, out: &mut StreamWriter<W>) -> Result<(), FormatError> {
        self.shape().encode(out)?;
        self.storyboard().encode(out)
    }
}

impl Decode for Scene {
    fn decode<R: Read>(input: &mut StreamReader<R>) -> Result<Self, FormatError> {
        let shape = Shape::decode(input)?;
        let storyboard = Storyboard::decode(input)?;
        Ok(Scene::from_parts(shape, storyboard))
    }
}
