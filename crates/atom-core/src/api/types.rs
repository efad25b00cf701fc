use bytemuck::{Pod, Zeroable};

use crate::components::particle::ParticleKind;

/// Event kinds written into [`AtomEvent::kind`].
pub mod event_kinds {
    /// `a` = new proton count.
    pub const PROTON_COUNT: f32 = 1.0;
    /// `a` = new neutron count.
    pub const NEUTRON_COUNT: f32 = 2.0;
    /// `a` = new electron count.
    pub const ELECTRON_COUNT: f32 = 3.0;
    /// `a` = atomic number picked from the periodic table.
    pub const ELEMENT_SELECTED: f32 = 4.0;
}

/// An event communicated from Rust to the UI through a flat f32 buffer.
/// `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct AtomEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl AtomEvent {
    pub const FLOATS: usize = 4;

    /// A collection of `kind` now holds `len` particles.
    pub fn count_changed(kind: ParticleKind, len: usize) -> Self {
        let code = match kind {
            ParticleKind::Proton => event_kinds::PROTON_COUNT,
            ParticleKind::Neutron => event_kinds::NEUTRON_COUNT,
            ParticleKind::Electron => event_kinds::ELECTRON_COUNT,
        };
        Self {
            kind: code,
            a: len as f32,
            ..Self::default()
        }
    }

    pub fn element_selected(atomic_number: u32) -> Self {
        Self {
            kind: event_kinds::ELEMENT_SELECTED,
            a: atomic_number as f32,
            ..Self::default()
        }
    }
}
