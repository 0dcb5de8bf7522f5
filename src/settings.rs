use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::actions::{Action, ActionKind};
use crate::shapes::{PointRef, Shape};

/// Returns the path to the settings file: `~/.config/extrude-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("extrude-rs");
    path.push("settings.json");
    path
}

/// Persisted editor settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    // Editing
    pub hit_radius: f64,
    pub bezier_control_offset: f64,
    pub default_action_steps: u32,

    // Shape generators
    pub generator_size: f64,
    pub generator_points: usize,
    pub generator_on_z: bool,

    // Files
    pub last_scene: Option<PathBuf>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            hit_radius: 8.0,
            bezier_control_offset: 20.0,
            default_action_steps: 32,

            generator_size: 100.0,
            generator_points: 32,
            generator_on_z: true,

            last_scene: None,
        }
    }
}

impl EditorSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(settings_path())
    }

    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON, logging any failure.
    pub fn save(&self) {
        let path = settings_path();
        if let Err(e) = self.save_to(&path) {
            log::warn!("Failed to write settings to {}: {}", path.display(), e);
        }
    }

    /// Save settings to `path` as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Remember `path` as the most recently used scene file.
    pub fn remember_scene(&mut self, path: impl Into<PathBuf>) {
        self.last_scene = Some(path.into());
    }

    /// Click at (x, y) in edit mode: append a point to `shape`.
    ///
    /// Bezier anchors get their control point `bezier_control_offset` away.
    pub fn add_point(&self, shape: &mut Shape, x: f64, y: f64) {
        shape.add_point(x, y, self.bezier_control_offset);
    }

    /// Point of `shape` within `hit_radius` of (x, y), if any.
    pub fn pick(&self, shape: &Shape, x: f64, y: f64) -> Option<PointRef> {
        shape.hit_test(x, y, self.hit_radius)
    }

    /// Drag whatever point sits under `from` to `to`.
    ///
    /// Returns the handle of the moved point, or `None` if nothing was hit.
    pub fn drag_point(
        &self,
        shape: &mut Shape,
        from: (f64, f64),
        to: (f64, f64),
    ) -> Option<PointRef> {
        let handle = self.pick(shape, from.0, from.1)?;
        shape.move_point(handle, to.0, to.1).then_some(handle)
    }

    /// New sequential action lasting `default_action_steps` steps.
    pub fn new_action(&self, kind: impl Into<ActionKind>) -> Action {
        Action::new(kind, self.default_action_steps.max(1))
    }
}
