use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The three building blocks a user can drop into the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleKind {
    Proton,
    Neutron,
    Electron,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [Self::Proton, Self::Neutron, Self::Electron];

    /// Numeric code used across the wasm boundary (1, 2, 3).
    pub fn code(self) -> u32 {
        match self {
            Self::Proton => 1,
            Self::Neutron => 2,
            Self::Electron => 3,
        }
    }

    /// Inverse of [`ParticleKind::code`].
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Proton),
            2 => Some(Self::Neutron),
            3 => Some(Self::Electron),
            _ => None,
        }
    }

    /// Nucleons are packed into the nucleus; electrons orbit.
    pub fn is_nucleon(self) -> bool {
        !matches!(self, Self::Electron)
    }
}

impl fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Proton => "proton",
            Self::Neutron => "neutron",
            Self::Electron => "electron",
        };
        f.write_str(name)
    }
}

/// Opaque identifier, unique within one kind's collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleId(pub String);

impl ParticleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticleId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A single proton, neutron or electron held by the atom state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub id: ParticleId,
    pub kind: ParticleKind,
    /// Last position written back by the front end. Fresh particles sit at the origin.
    pub position: Vec3,
}

impl Particle {
    /// Create a particle at the origin.
    pub fn new(id: ParticleId, kind: ParticleKind) -> Self {
        Self {
            id,
            kind,
            position: Vec3::ZERO,
        }
    }
}
