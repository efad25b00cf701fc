pub mod config;
pub mod lab;
pub mod types;

pub use config::{AtomConfig, ConfigError};
pub use lab::{AtomLab, FrameSnapshot};
pub use types::{event_kinds, AtomEvent};
