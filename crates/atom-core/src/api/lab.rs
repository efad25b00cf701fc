//! Atom lab: thin controller layer.
//!
//! Owns the atom state and everything derived from it. Routes UI triggers to
//! state operations, recomputes layout each tick and packs the results into
//! flat buffers for the renderer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;

use crate::api::config::{AtomConfig, ConfigError};
use crate::api::types::AtomEvent;
use crate::chemistry::info::AtomicInfo;
use crate::chemistry::periodic_table;
use crate::core::rng::Rng;
use crate::core::state::AtomState;
use crate::core::time::AnimationClock;
use crate::input::queue::{AtomInput, InputQueue};
use crate::layout::nucleus::{nucleus_layout, NucleonPlacement};
use crate::layout::orbit::{
    electron_layout, group_rotation, shell_spheres, ElectronPlacement, ShellAxes, ShellSphere,
};
use crate::renderer::instance::{InstanceBuffer, ParticleInstance, ShellInstance};
use crate::systems::render::{build_electron_buffer, build_nucleon_buffer, build_shell_buffer};

/// Seed used when the config leaves it open and the host supplies none.
pub const DEFAULT_SEED: u64 = 0x5EED_A70B;

/// Everything a JSON consumer needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot<'a> {
    pub time: f32,
    /// Yaw of the whole atom group (radians about +Y).
    pub group_rotation: f32,
    pub info: AtomicInfo,
    pub selected_element: Option<u32>,
    pub nucleus: &'a [NucleonPlacement],
    pub electrons: &'a [ElectronPlacement],
    pub shells: &'a [ShellSphere],
}

/// The interactive atom: state, layout and render buffers.
pub struct AtomLab {
    config: AtomConfig,
    state: AtomState,
    axes: ShellAxes,
    clock: AnimationClock,
    input: InputQueue,
    /// Filled by the state observer, drained by the host.
    events: Rc<RefCell<Vec<AtomEvent>>>,
    /// Set by the state observer whenever a nucleon collection changes.
    nucleus_dirty: Rc<Cell<bool>>,
    nucleus: Vec<NucleonPlacement>,
    electrons: Vec<ElectronPlacement>,
    shells: Vec<ShellSphere>,
    /// Electrons left out of the last layout.
    dropped: usize,
    nucleon_buffer: InstanceBuffer<ParticleInstance>,
    electron_buffer: InstanceBuffer<ParticleInstance>,
    shell_buffer: InstanceBuffer<ShellInstance>,
}

impl AtomLab {
    /// Build an empty lab. Fails only if `config` does not validate.
    pub fn new(config: AtomConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let axes = ShellAxes::random(&mut Rng::new(seed), config.shells.len());
        // Separate stream so id generation never perturbs the axes.
        let mut state = AtomState::new(seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15);

        let events = Rc::new(RefCell::new(Vec::new()));
        let nucleus_dirty = Rc::new(Cell::new(true));
        {
            let events = Rc::clone(&events);
            let dirty = Rc::clone(&nucleus_dirty);
            state.subscribe(move |kind, len| {
                if kind.is_nucleon() {
                    dirty.set(true);
                }
                events.borrow_mut().push(AtomEvent::count_changed(kind, len));
            });
        }

        let cap = config.max_particles;
        log::info!(
            "atom lab ready: seed {seed:#x}, {} shells / {} electron slots",
            config.shells.len(),
            config.shells.total_capacity(),
        );

        Ok(Self {
            state,
            axes,
            clock: AnimationClock::new(),
            input: InputQueue::new(),
            events,
            nucleus_dirty,
            nucleus: Vec::new(),
            electrons: Vec::new(),
            shells: Vec::new(),
            dropped: 0,
            nucleon_buffer: InstanceBuffer::with_capacity(cap),
            electron_buffer: InstanceBuffer::with_capacity(cap),
            shell_buffer: InstanceBuffer::with_capacity(config.shells.len()),
            config,
        })
    }

    /// Queue a trigger for the next tick.
    pub fn push_input(&mut self, input: AtomInput) {
        self.input.push(input);
    }

    /// Apply a trigger immediately. Anything still queued is applied first.
    /// Returns whether the trigger changed anything.
    pub fn handle_input(&mut self, input: AtomInput) -> bool {
        self.flush_input();
        self.apply_input(input)
    }

    /// Apply every queued trigger in order.
    pub fn flush_input(&mut self) {
        for input in self.input.drain() {
            self.apply_input(input);
        }
    }

    fn apply_input(&mut self, input: AtomInput) -> bool {
        match input {
            AtomInput::AddParticle(kind) => {
                self.state.add_particle(kind);
                true
            }
            AtomInput::RemoveParticle { id, kind } => self.state.remove_particle(&id, kind),
            AtomInput::SelectElement { symbol } => self.select_element(&symbol),
            AtomInput::SetConfiguration {
                protons,
                neutrons,
                electrons,
            } => {
                self.state.set_configuration(protons, neutrons, electrons);
                true
            }
            AtomInput::Clear => {
                self.state.clear();
                true
            }
        }
    }

    /// Periodic-table click: load the neutral atom for `symbol`.
    /// Unknown symbols are ignored.
    pub fn select_element(&mut self, symbol: &str) -> bool {
        self.flush_input();
        match periodic_table::atomic_number(symbol) {
            Some(z) => {
                self.state.set_element(z as usize);
                self.events.borrow_mut().push(AtomEvent::element_selected(z));
                true
            }
            None => {
                log::warn!("ignoring unknown element symbol {symbol:?}");
                false
            }
        }
    }

    /// Advance one rendered frame: apply queued input, move the clock,
    /// recompute layout and rebuild the buffers.
    pub fn tick(&mut self, dt: f32) {
        self.flush_input();
        self.clock.advance(dt);
        self.rebuild_frame();
    }

    /// Recompute layout for the current state and elapsed time.
    pub fn rebuild_frame(&mut self) {
        if self.nucleus_dirty.replace(false) {
            self.nucleus = nucleus_layout(&self.state, self.config.nucleus_radius);
        }
        self.electrons = electron_layout(
            &self.state,
            &self.config.shells,
            &self.axes,
            self.clock.elapsed(),
            &self.config.orbit,
        );
        let dropped = self.state.electrons().len() - self.electrons.len();
        self.note_overflow(dropped);
        self.shells = shell_spheres(self.state.electrons().len(), &self.config.shells, &self.axes);

        let style = &self.config.styles;
        build_nucleon_buffer(&self.nucleus, style, &mut self.nucleon_buffer);
        build_electron_buffer(&self.electrons, style, &mut self.electron_buffer);
        build_shell_buffer(&self.shells, style, &mut self.shell_buffer);
    }

    /// Log overflow once per change in the dropped count, not once per frame.
    /// Returns whether a warning was emitted.
    fn note_overflow(&mut self, dropped: usize) -> bool {
        if dropped == self.dropped {
            return false;
        }
        self.dropped = dropped;
        if dropped == 0 {
            return false;
        }
        log::warn!(
            "{dropped} electrons exceed the shell table ({} slots); not placed",
            self.config.shells.total_capacity(),
        );
        true
    }

    /// Take every event emitted since the last call.
    pub fn take_events(&mut self) -> Vec<AtomEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn info(&self) -> AtomicInfo {
        AtomicInfo::from_counts(self.state.counts())
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            time: self.clock.elapsed(),
            group_rotation: self.group_rotation(),
            info: self.info(),
            selected_element: self.state.selected_element(),
            nucleus: &self.nucleus,
            electrons: &self.electrons,
            shells: &self.shells,
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &AtomConfig {
        &self.config
    }

    pub fn state(&self) -> &AtomState {
        &self.state
    }

    /// Direct state access. Observers still fire.
    pub fn state_mut(&mut self) -> &mut AtomState {
        &mut self.state
    }

    pub fn axes(&self) -> &ShellAxes {
        &self.axes
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn group_rotation(&self) -> f32 {
        group_rotation(self.clock.frames(), &self.config.orbit)
    }

    /// Electrons the last layout left out for lack of shell slots.
    pub fn dropped_electrons(&self) -> usize {
        self.dropped
    }

    pub fn nucleus(&self) -> &[NucleonPlacement] {
        &self.nucleus
    }

    pub fn electrons(&self) -> &[ElectronPlacement] {
        &self.electrons
    }

    pub fn shells(&self) -> &[ShellSphere] {
        &self.shells
    }

    pub fn nucleon_buffer(&self) -> &InstanceBuffer<ParticleInstance> {
        &self.nucleon_buffer
    }

    pub fn electron_buffer(&self) -> &InstanceBuffer<ParticleInstance> {
        &self.electron_buffer
    }

    pub fn shell_buffer(&self) -> &InstanceBuffer<ShellInstance> {
        &self.shell_buffer
    }
}
