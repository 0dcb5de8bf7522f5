//! Scene - one shape, its storyboard and the editor mode
//!
//! The scene owns both halves of a document. Playback always starts from
//! the shape's current outline, so the storyboard never holds on to the
//! shape itself.
//!
//! ## Files
//!
//! `open` and `save` use the binary format described in [`crate::io`].
//! A failed `open` leaves the scene exactly as it was.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::geometry::PointSequence;
use crate::io::{Decode, Encode, FormatError, StreamReader, StreamWriter};
use crate::shapes::Shape;
use crate::storyboard::Storyboard;

/// Errors that can occur while opening or saving a scene file
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed scene data: {0}")]
    Format(#[from] FormatError),
}

/// Editor mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SceneState {
    /// Shape and actions are being edited
    #[default]
    Edit,
    /// The storyboard is playing
    Play,
    /// Playback reached the last frame
    End,
}

/// A shape plus the storyboard that animates it
#[derive(Clone, Debug, Default)]
pub struct Scene {
    shape: Shape,
    storyboard: Storyboard,
    state: SceneState,
}

impl Scene {
    /// Create a scene holding an empty polygon and no actions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene around `shape` with no actions
    pub fn with_shape(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            ..Self::default()
        }
    }

    /// Create a scene from a shape and a storyboard
    pub fn from_parts(shape: Shape, storyboard: Storyboard) -> Self {
        Self {
            shape,
            storyboard,
            state: SceneState::Edit,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// Replace the shape, returning the previous one
    ///
    /// Any playback in progress is stopped first.
    pub fn set_shape(&mut self, shape: impl Into<Shape>) -> Shape {
        self.stop();
        std::mem::replace(&mut self.shape, shape.into())
    }

    pub fn storyboard(&self) -> &Storyboard {
        &self.storyboard
    }

    pub fn storyboard_mut(&mut self) -> &mut Storyboard {
        &mut self.storyboard
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn set_state(&mut self, state: SceneState) {
        self.state = state;
    }

    /// Start playing the storyboard from the shape's current outline
    pub fn play(&mut self) {
        self.storyboard.reset();
        self.storyboard.play(&self.shape);
        self.state = SceneState::Play;
    }

    /// Advance playback by one frame
    ///
    /// Returns `false` when not playing or when the last frame was already
    /// reached, in which case the scene moves to `End`.
    pub fn tick(&mut self) -> bool {
        if self.state != SceneState::Play {
            return false;
        }

        if self.storyboard.next_step() {
            true
        } else {
            self.state = SceneState::End;
            false
        }
    }

    /// Drop all frames and go back to editing
    pub fn stop(&mut self) {
        self.storyboard.reset();
        self.state = SceneState::Edit;
    }

    /// The outline to display for the current mode
    ///
    /// While playing or after the end this is the latest frame, otherwise
    /// the shape's own outline.
    pub fn current_points(&self) -> Cow<'_, PointSequence> {
        match (self.state, self.storyboard.current_frame()) {
            (SceneState::Play | SceneState::End, Some(frame)) => Cow::Borrowed(frame),
            _ => self.shape.points(),
        }
    }

    /// Load a scene file into this scene
    ///
    /// On success the shape and storyboard are replaced and the scene is
    /// back in `Edit` mode. On failure nothing changes.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let loaded = Self::load(path)?;
        *self = loaded;
        Ok(())
    }

    /// Read a scene file into a new scene
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            log::warn!("Failed to open scene {}: {}", path.display(), source);
            SceneError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        match Self::read_from(BufReader::new(file)) {
            Ok(scene) => {
                log::info!(
                    "Opened scene {} ({} with {} points, {} actions)",
                    path.display(),
                    scene.shape.name(),
                    scene.shape.point_count(),
                    scene.storyboard.action_count()
                );
                Ok(scene)
            }
            Err(e) => {
                log::warn!("Failed to read scene {}: {}", path.display(), e);
                Err(e.into())
            }
        }
    }

    /// Write the scene to a file, replacing it if it exists
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| {
            log::warn!("Failed to create scene {}: {}", path.display(), source);
            SceneError::Create {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if let Err(e) = self.write_to(BufWriter::new(file)) {
            log::error!("Failed to write scene {}: {}", path.display(), e);
            return Err(e.into());
        }

        log::info!("Saved scene to {}", path.display());
        Ok(())
    }

    /// Decode a scene from any byte source
    pub fn read_from<R: Read>(reader: R) -> Result<Self, FormatError> {
        Self::decode(&mut StreamReader::new(reader))
    }

    /// Encode the scene into any byte sink
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), FormatError> {
        let mut out = StreamWriter::new(writer);
        self.encode(&mut out)?;
        out.flush()
    }
}
