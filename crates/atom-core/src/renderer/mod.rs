pub mod instance;

pub use instance::{InstanceBuffer, ParticleInstance, ShellInstance};
