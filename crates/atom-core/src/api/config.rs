use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::style::SceneStyle;
use crate::layout::nucleus::NUCLEUS_RADIUS;
use crate::layout::orbit::OrbitParams;
use crate::layout::shells::ShellTable;

/// Reasons a configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("shell table is empty")]
    EmptyShellTable,

    #[error("shell table has {capacities} capacities but {radii} radii")]
    ShellTableMismatch { capacities: usize, radii: usize },

    #[error("shell {shell} has zero capacity")]
    ZeroCapacity { shell: usize },

    #[error("shell {shell} radius {radius} must be finite and positive")]
    InvalidShellRadius { shell: usize, radius: f32 },

    #[error("nucleus radius {0} must be finite and positive")]
    InvalidNucleusRadius(f32),

    #[error("orbit {field} {value} must be finite")]
    InvalidOrbit { field: &'static str, value: f32 },
}

/// Configuration for an atom lab. Every field has a default, so a partial
/// JSON object (or `{}`) is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomConfig {
    /// Seed for particle ids and shell axes. `None` lets the host pick one.
    pub seed: Option<u64>,
    /// Radius of the sphere nucleons are packed onto.
    pub nucleus_radius: f32,
    /// Shell capacities and display radii.
    pub shells: ShellTable,
    pub orbit: OrbitParams,
    pub styles: SceneStyle,
    /// Initial capacity of the per-frame instance buffers.
    pub max_particles: usize,
}

impl Default for AtomConfig {
    fn default() -> Self {
        Self {
            seed: None,
            nucleus_radius: NUCLEUS_RADIUS,
            shells: ShellTable::default(),
            orbit: OrbitParams::default(),
            styles: SceneStyle::default(),
            max_particles: 1024,
        }
    }
}

impl AtomConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the invariants the layout engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shells = &self.shells;
        if shells.capacities.len() != shells.radii.len() {
            return Err(ConfigError::ShellTableMismatch {
                capacities: shells.capacities.len(),
                radii: shells.radii.len(),
            });
        }
        if shells.is_empty() {
            return Err(ConfigError::EmptyShellTable);
        }
        for (shell, (&capacity, &radius)) in shells.capacities.iter().zip(&shells.radii).enumerate() {
            if capacity == 0 {
                return Err(ConfigError::ZeroCapacity { shell });
            }
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ConfigError::InvalidShellRadius { shell, radius });
            }
        }
        if !self.nucleus_radius.is_finite() || self.nucleus_radius <= 0.0 {
            return Err(ConfigError::InvalidNucleusRadius(self.nucleus_radius));
        }
        if !self.orbit.speed.is_finite() {
            return Err(ConfigError::InvalidOrbit { field: "speed", value: self.orbit.speed });
        }
        if !self.orbit.tilt.is_finite() {
            return Err(ConfigError::InvalidOrbit { field: "tilt", value: self.orbit.tilt });
        }
        if !self.orbit.group_spin.is_finite() {
            return Err(ConfigError::InvalidOrbit { field: "group_spin", value: self.orbit.group_spin });
        }
        Ok(())
    }
}
