//! extrude-rs - keyframe-free outline animation
//!
//! A shape (polygon or Bezier outline) is animated by a storyboard of
//! steppable actions. Every step produces one frame, and the sequence of
//! frames traces the outline's extrusion through space.
//!
//! ```no_run
//! use extrude_rs::actions::{Action, RotationAxis, RotationOrigin};
//! use extrude_rs::scene::Scene;
//! use extrude_rs::shapes::generators;
//!
//! let mut scene = Scene::with_shape(generators::circle(100.0, 32, true));
//! scene.storyboard_mut().add_action(Action::rotate(
//!     std::f64::consts::TAU,
//!     RotationOrigin::Zero,
//!     RotationAxis::X,
//!     100,
//! ));
//! scene.play();
//! while scene.tick() {}
//! scene.save("demo.scn").unwrap();
//! ```

pub mod actions;
pub mod geometry;
pub mod io;
pub mod scene;
pub mod settings;
pub mod shapes;
pub mod storyboard;

pub use actions::Action;
pub use geometry::{Point, PointSequence};
pub use scene::{Scene, SceneError, SceneState};
pub use shapes::Shape;
pub use storyboard::{PlaybackState, Storyboard};
