pub mod particle;
pub mod style;

pub use particle::{Particle, ParticleId, ParticleKind};
pub use style::{ParticleStyle, SceneStyle, StyleColor};
