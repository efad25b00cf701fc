pub mod render;

pub use render::{build_electron_buffer, build_nucleon_buffer, build_shell_buffer};
