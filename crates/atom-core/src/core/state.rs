use std::fmt;

use glam::Vec3;
use serde::Serialize;

use crate::components::particle::{Particle, ParticleId, ParticleKind};
use crate::core::rng::Rng;

/// Length of generated particle ids.
const ID_LEN: usize = 9;

/// Callback invoked with a kind and that kind's new collection length.
pub type Observer = Box<dyn FnMut(ParticleKind, usize)>;

/// Handle returned by [`AtomState::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

/// Particle counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParticleCounts {
    pub protons: usize,
    pub neutrons: usize,
    pub electrons: usize,
}

impl ParticleCounts {
    pub fn nucleons(&self) -> usize {
        self.protons + self.neutrons
    }
}

/// Single source of truth for the atom's particle composition.
///
/// Holds one insertion-ordered collection per [`ParticleKind`]. Every particle
/// lives in the collection matching its kind. Observers are told about
/// collection length changes synchronously, after the mutation has landed.
pub struct AtomState {
    protons: Vec<Particle>,
    neutrons: Vec<Particle>,
    electrons: Vec<Particle>,
    selected_element: Option<u32>,
    rng: Rng,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u32,
}

impl AtomState {
    /// Empty atom whose id generator is seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            protons: Vec::new(),
            neutrons: Vec::new(),
            electrons: Vec::new(),
            selected_element: None,
            rng: Rng::new(seed),
            observers: Vec::new(),
            next_subscription: 1,
        }
    }

    // -- Mutations --

    /// Append a particle of `kind` at the origin. Returns its id.
    pub fn add_particle(&mut self, kind: ParticleKind) -> ParticleId {
        let (rng, particles) = self.parts_mut(kind);
        let id = fresh_id(rng, particles);
        particles.push(Particle::new(id.clone(), kind));
        let len = particles.len();
        log::debug!("added {kind} {id} ({len} total)");
        self.notify(kind, len);
        id
    }

    /// Remove the particle with `id` from the `kind` collection.
    /// Unknown ids are a no-op and return `false`.
    pub fn remove_particle(&mut self, id: &ParticleId, kind: ParticleKind) -> bool {
        let (_, particles) = self.parts_mut(kind);
        let Some(idx) = particles.iter().position(|p| &p.id == id) else {
            return false;
        };
        // Keep insertion order stable for render keys.
        particles.remove(idx);
        let len = particles.len();
        log::debug!("removed {kind} {id} ({len} left)");
        self.notify(kind, len);
        true
    }

    /// Overwrite the position of a particle. Unknown ids are a no-op.
    pub fn update_particle_position(
        &mut self,
        id: &ParticleId,
        kind: ParticleKind,
        position: Vec3,
    ) -> bool {
        let (_, particles) = self.parts_mut(kind);
        match particles.iter_mut().find(|p| &p.id == id) {
            Some(p) => {
                p.position = position;
                true
            }
            None => false,
        }
    }

    /// Replace all three collections with freshly generated particles.
    ///
    /// `neutrons` and `electrons` default to `protons`. Prior ids are
    /// discarded; nothing is migrated.
    pub fn set_configuration(
        &mut self,
        protons: usize,
        neutrons: Option<usize>,
        electrons: Option<usize>,
    ) {
        let neutrons = neutrons.unwrap_or(protons);
        let electrons = electrons.unwrap_or(protons);

        self.protons = generate(&mut self.rng, protons, ParticleKind::Proton);
        self.neutrons = generate(&mut self.rng, neutrons, ParticleKind::Neutron);
        self.electrons = generate(&mut self.rng, electrons, ParticleKind::Electron);
        self.selected_element = u32::try_from(protons).ok();

        log::info!("configured atom: {protons}p {neutrons}n {electrons}e");
        self.notify_all();
    }

    /// Neutral atom for atomic number `protons` (the periodic-table path).
    pub fn set_element(&mut self, protons: usize) {
        self.set_configuration(protons, None, None);
    }

    /// Drop every particle and forget the selected element.
    pub fn clear(&mut self) {
        self.protons.clear();
        self.neutrons.clear();
        self.electrons.clear();
        self.selected_element = None;
        self.notify_all();
    }

    // -- Subscriptions --

    /// Register an observer for collection length changes.
    pub fn subscribe(&mut self, observer: impl FnMut(ParticleKind, usize) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn notify(&mut self, kind: ParticleKind, len: usize) {
        for (_, observer) in self.observers.iter_mut() {
            observer(kind, len);
        }
    }

    fn notify_all(&mut self) {
        for kind in ParticleKind::ALL {
            let len = self.count(kind);
            self.notify(kind, len);
        }
    }

    // -- Accessors --

    /// The collection for `kind`, in insertion order.
    pub fn particles(&self, kind: ParticleKind) -> &[Particle] {
        match kind {
            ParticleKind::Proton => &self.protons,
            ParticleKind::Neutron => &self.neutrons,
            ParticleKind::Electron => &self.electrons,
        }
    }

    pub fn protons(&self) -> &[Particle] {
        &self.protons
    }

    pub fn neutrons(&self) -> &[Particle] {
        &self.neutrons
    }

    pub fn electrons(&self) -> &[Particle] {
        &self.electrons
    }

    /// Protons followed by neutrons.
    pub fn nucleons(&self) -> impl Iterator<Item = &Particle> {
        self.protons.iter().chain(self.neutrons.iter())
    }

    pub fn get(&self, id: &ParticleId, kind: ParticleKind) -> Option<&Particle> {
        self.particles(kind).iter().find(|p| &p.id == id)
    }

    pub fn count(&self, kind: ParticleKind) -> usize {
        self.particles(kind).len()
    }

    pub fn counts(&self) -> ParticleCounts {
        ParticleCounts {
            protons: self.protons.len(),
            neutrons: self.neutrons.len(),
            electrons: self.electrons.len(),
        }
    }

    /// Atomic number last picked through [`AtomState::set_configuration`].
    pub fn selected_element(&self) -> Option<u32> {
        self.selected_element
    }

    pub fn is_empty(&self) -> bool {
        self.protons.is_empty() && self.neutrons.is_empty() && self.electrons.is_empty()
    }

    fn parts_mut(&mut self, kind: ParticleKind) -> (&mut Rng, &mut Vec<Particle>) {
        match kind {
            ParticleKind::Proton => (&mut self.rng, &mut self.protons),
            ParticleKind::Neutron => (&mut self.rng, &mut self.neutrons),
            ParticleKind::Electron => (&mut self.rng, &mut self.electrons),
        }
    }
}

impl Default for AtomState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Debug for AtomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomState")
            .field("protons", &self.protons.len())
            .field("neutrons", &self.neutrons.len())
            .field("electrons", &self.electrons.len())
            .field("selected_element", &self.selected_element)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Draw an id not already used in `existing`.
fn fresh_id(rng: &mut Rng, existing: &[Particle]) -> ParticleId {
    loop {
        let candidate = ParticleId(rng.next_base36(ID_LEN));
        if !existing.iter().any(|p| p.id == candidate) {
            return candidate;
        }
    }
}

fn generate(rng: &mut Rng, count: usize, kind: ParticleKind) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let id = fresh_id(rng, &particles);
        particles.push(Particle::new(id, kind));
    }
    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[test]
    fn starts_empty() {
        let state = AtomState::new(3);
        assert!(state.is_empty());
        assert_eq!(state.counts(), ParticleCounts::default());
        assert_eq!(state.selected_element(), None);
    }

    #[test]
    fn add_particle_appends_at_origin() {
        let mut state = AtomState::new(3);
        let id = state.add_particle(ParticleKind::Proton);
        let p = state.get(&id, ParticleKind::Proton).unwrap();
        assert_eq!(p.position, Vec3::ZERO);
        assert_eq!(p.kind, ParticleKind::Proton);
        assert_eq!(state.count(ParticleKind::Proton), 1);
        assert_eq!(state.count(ParticleKind::Neutron), 0);
    }

    #[test]
    fn kinds_match_their_collection() {
        let mut state = AtomState::new(5);
        state.add_particle(ParticleKind::Electron);
        state.add_particle(ParticleKind::Neutron);
        state.set_configuration(3, Some(4), Some(2));
        state.add_particle(ParticleKind::Electron);
        for kind in ParticleKind::ALL {
            assert!(state.particles(kind).iter().all(|p| p.kind == kind));
        }
    }

    #[test]
    fn ids_unique_within_collection() {
        let mut state = AtomState::new(11);
        state.set_element(54);
        for _ in 0..50 {
            state.add_particle(ParticleKind::Neutron);
        }
        let ids: HashSet<_> = state.neutrons().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), state.neutrons().len());
    }

    #[test]
    fn insertion_order_preserved() {
        let mut state = AtomState::new(9);
        let a = state.add_particle(ParticleKind::Electron);
        let b = state.add_particle(ParticleKind::Electron);
        let c = state.add_particle(ParticleKind::Electron);
        state.remove_particle(&b, ParticleKind::Electron);
        let ids: Vec<_> = state.electrons().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut state = AtomState::new(2);
        state.set_element(4);
        let before: Vec<_> = state.protons().to_vec();
        assert!(!state.remove_particle(&ParticleId::from("missing"), ParticleKind::Proton));
        assert_eq!(state.protons(), before.as_slice());
    }

    #[test]
    fn remove_checks_the_right_collection() {
        let mut state = AtomState::new(2);
        let id = state.add_particle(ParticleKind::Proton);
        assert!(!state.remove_particle(&id, ParticleKind::Neutron));
        assert!(state.remove_particle(&id, ParticleKind::Proton));
        assert_eq!(state.count(ParticleKind::Proton), 0);
    }

    #[test]
    fn update_position() {
        let mut state = AtomState::new(2);
        let id = state.add_particle(ParticleKind::Neutron);
        let target = Vec3::new(1.0, -2.0, 0.5);
        assert!(state.update_particle_position(&id, ParticleKind::Neutron, target));
        assert_eq!(state.get(&id, ParticleKind::Neutron).unwrap().position, target);

        let missing = ParticleId::from("nope");
        assert!(!state.update_particle_position(&missing, ParticleKind::Neutron, target));
    }

    #[test]
    fn set_configuration_defaults_to_proton_count() {
        let mut state = AtomState::new(8);
        state.set_element(6);
        assert_eq!(
            state.counts(),
            ParticleCounts { protons: 6, neutrons: 6, electrons: 6 }
        );
        assert_eq!(state.selected_element(), Some(6));
    }

    #[test]
    fn set_configuration_replaces_everything() {
        let mut state = AtomState::new(8);
        let old = state.add_particle(ParticleKind::Proton);
        state.update_particle_position(&old, ParticleKind::Proton, Vec3::ONE);
        state.set_configuration(2, Some(1), Some(0));
        assert_eq!(
            state.counts(),
            ParticleCounts { protons: 2, neutrons: 1, electrons: 0 }
        );
        assert!(state.get(&old, ParticleKind::Proton).is_none());
        assert!(state.nucleons().all(|p| p.position == Vec3::ZERO));
    }

    #[test]
    fn repeated_configuration_gives_new_ids() {
        let mut state = AtomState::new(8);
        state.set_element(5);
        let first: Vec<_> = state.protons().iter().map(|p| p.id.clone()).collect();
        state.set_element(5);
        let second: Vec<_> = state.protons().iter().map(|p| p.id.clone()).collect();
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }

    #[test]
    fn add_leaves_selected_element() {
        let mut state = AtomState::new(8);
        state.set_element(3);
        state.add_particle(ParticleKind::Proton);
        assert_eq!(state.selected_element(), Some(3));
        state.clear();
        assert_eq!(state.selected_element(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn observers_see_new_lengths() {
        let mut state = AtomState::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.subscribe(move |kind, len| sink.borrow_mut().push((kind, len)));

        state.add_particle(ParticleKind::Electron);
        state.add_particle(ParticleKind::Electron);
        assert_eq!(
            *seen.borrow(),
            vec![(ParticleKind::Electron, 1), (ParticleKind::Electron, 2)]
        );
    }

    #[test]
    fn observers_skip_noops() {
        let mut state = AtomState::new(1);
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        state.subscribe(move |_, _| *sink.borrow_mut() += 1);

        let id = state.add_particle(ParticleKind::Proton);
        state.update_particle_position(&id, ParticleKind::Proton, Vec3::X);
        state.remove_particle(&ParticleId::from("ghost"), ParticleKind::Proton);
        assert_eq!(*calls.borrow(), 1);

        state.set_element(2);
        assert_eq!(*calls.borrow(), 4);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut state = AtomState::new(1);
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let sub = state.subscribe(move |_, _| *sink.borrow_mut() += 1);

        state.add_particle(ParticleKind::Neutron);
        assert!(state.unsubscribe(sub));
        assert!(!state.unsubscribe(sub));
        state.add_particle(ParticleKind::Neutron);
        assert_eq!(*calls.borrow(), 1);
    }
}
