pub mod queue;

pub use queue::{AtomInput, InputQueue};
