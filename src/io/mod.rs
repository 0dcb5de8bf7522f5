//! Binary scene format
//!
//! Scenes are stored as a flat little-endian byte stream:
//!
//! ```text
//! SceneFile      := ShapeTag:i32 Shape Storyboard
//! Shape          := PointSequence                      (Polygon, tag 0)
//!                 | PointSequence PointSequence        (Bezier anchors + controls, tag 1)
//! PointSequence  := Count:u32 (X:f64 Y:f64 Z:f64)*Count
//! Storyboard     := Count:u32 (ActionTag:i32 Action)*Count
//! Action         := Steps:i32 WithPrevious:u8 Params
//! ```
//!
//! Action parameters are three `f64` for Translate (tag 0) and Scale
//! (tag 1), and `f64` angle + `i32` origin + `i32` axis for Rotate (tag 2).
//!
//! The format is closed: any unknown tag fails the whole decode.

mod codec;
mod stream;

pub use stream::{StreamReader, StreamWriter};

use std::io::{Read, Write};

use thiserror::Error;

/// Errors that can occur while reading or writing the scene format
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown shape tag {0}")]
    UnknownShapeTag(i32),

    #[error("Unknown action tag {0}")]
    UnknownActionTag(i32),

    #[error("Unknown rotation origin {0}")]
    UnknownRotationOrigin(i32),

    #[error("Unknown rotation axis {0}")]
    UnknownRotationAxis(i32),

    #[error("Invalid boolean byte {0:#04x}")]
    InvalidBool(u8),

    #[error("Action step count must be positive, got {0}")]
    InvalidSteps(i32),

    #[error("{0} items do not fit in a 32-bit count")]
    TooManyItems(usize),

    #[error("Bezier shape has {anchors} anchors but {controls} control points")]
    ControlCountMismatch { anchors: usize, controls: usize },
}

/// A value that can be written in the scene format
pub trait Encode {
    fn encode<W: Write>(&self, out: &mut StreamWriter<W>) -> Result<(), FormatError>;
}

/// A value that can be read back from the scene format
pub trait Decode: Sized {
    fn decode<R: Read>(input: &mut StreamReader<R>) -> Result<Self, FormatError>;
}

/// Encode `value` into a fresh byte buffer
pub fn to_bytes<T: Encode>(value: &T) -> Result<Vec<u8>, FormatError> {
    let mut out = StreamWriter::new(Vec::new());
    value.encode(&mut out)?;
    Ok(out.into_inner())
}

/// Decode a value from the start of `bytes`
pub fn from_bytes<T: Decode>(bytes: &[u8]) -> Result<T, FormatError> {
    T::decode(&mut StreamReader::new(bytes))
}
