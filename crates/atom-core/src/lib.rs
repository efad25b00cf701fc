pub mod api;
pub mod chemistry;
pub mod components;
pub mod core;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{AtomConfig, ConfigError};
pub use api::lab::{AtomLab, FrameSnapshot};
pub use api::types::{event_kinds, AtomEvent};
pub use chemistry::info::AtomicInfo;
pub use chemistry::periodic_table;
pub use components::particle::{Particle, ParticleId, ParticleKind};
pub use components::style::{ParticleStyle, SceneStyle, StyleColor};
pub use self::core::state::{AtomState, ParticleCounts, SubscriptionId};
pub use self::core::time::AnimationClock;
pub use input::queue::{AtomInput, InputQueue};
pub use layout::{ElectronPlacement, NucleonPlacement, OrbitParams, ShellAxes, ShellSlot, ShellSphere, ShellTable};
pub use renderer::instance::{InstanceBuffer, ParticleInstance, ShellInstance};
