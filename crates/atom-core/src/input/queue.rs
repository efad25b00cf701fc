use crate::components::particle::{ParticleId, ParticleKind};

/// Triggers the UI can fire at the atom lab.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomInput {
    /// One of the three "add particle" buttons.
    AddParticle(ParticleKind),
    /// Remove a specific particle.
    RemoveParticle { id: ParticleId, kind: ParticleKind },
    /// A periodic-table tile was clicked.
    SelectElement { symbol: String },
    /// Explicit counts. Missing neutron/electron counts default to `protons`.
    SetConfiguration {
        protons: usize,
        neutrons: Option<usize>,
        electrons: Option<usize>,
    },
    /// Empty the atom.
    Clear,
}

/// A queue of input events.
/// JS pushes triggers between frames; the lab drains them at the next tick.
#[derive(Debug)]
pub struct InputQueue {
    events: Vec<AtomInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: AtomInput) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<AtomInput> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &AtomInput> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
