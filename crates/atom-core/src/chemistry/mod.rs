pub mod info;
pub mod periodic_table;

pub use info::{electron_configuration, AtomicInfo};
pub use periodic_table::Tile;
