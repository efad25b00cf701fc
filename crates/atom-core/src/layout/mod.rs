//! Pure spatial layout: nucleus packing, shell assignment, orbital motion.
//!
//! Every function here is a function of its inputs only. The frame loop calls
//! them each tick and never writes the results back into the atom state.

pub mod nucleus;
pub mod orbit;
pub mod shells;

pub use nucleus::{fibonacci_sphere, nucleus_layout, NucleonPlacement, NUCLEUS_RADIUS};
pub use orbit::{
    electron_layout, electron_position, group_rotation, shell_spheres, ElectronPlacement, OrbitParams, ShellAxes,
    ShellSphere,
};
pub use shells::{ShellSlot, ShellTable};
