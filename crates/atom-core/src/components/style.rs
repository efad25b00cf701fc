use serde::{Deserialize, Serialize};

use crate::components::particle::ParticleKind;

/// Linear RGB color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl StyleColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for StyleColor {
    fn default() -> Self {
        Self::new(0.7, 0.7, 0.7)
    }
}

/// How one particle kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleStyle {
    pub color: StyleColor,
    pub radius: f32,
    /// Glow multiplier passed to the material.
    pub emissive: f32,
}

impl ParticleStyle {
    pub const fn new(color: StyleColor, radius: f32) -> Self {
        Self {
            color,
            radius,
            emissive: 0.0,
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}

/// Visual styling for the whole atom scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    pub proton: ParticleStyle,
    pub neutron: ParticleStyle,
    pub electron: ParticleStyle,
    /// Wireframe color of the shell boundary spheres.
    pub shell_color: StyleColor,
    pub shell_opacity: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        // #ff4444 / #4444ff / #44ff44
        let red = StyleColor::new(1.0, 0.267, 0.267);
        let blue = StyleColor::new(0.267, 0.267, 1.0);
        let green = StyleColor::new(0.267, 1.0, 0.267);
        Self {
            proton: ParticleStyle::new(red, 0.5).with_emissive(0.5),
            neutron: ParticleStyle::new(blue, 0.5).with_emissive(0.5),
            electron: ParticleStyle::new(green, 0.2).with_emissive(1.0),
            shell_color: green,
            shell_opacity: 0.03,
        }
    }
}

impl SceneStyle {
    pub fn for_kind(&self, kind: ParticleKind) -> &ParticleStyle {
        match kind {
            ParticleKind::Proton => &self.proton,
            ParticleKind::Neutron => &self.neutron,
            ParticleKind::Electron => &self.electron,
        }
    }
}
