use atom_core::periodic_table::{self, Tile, GRID};
use atom_core::{AtomConfig, AtomEvent, AtomInput, AtomLab, ConfigError};
use serde::Serialize;

/// One picker tile, flagged when it matches the current proton count.
#[derive(Serialize)]
struct TileEntry {
    #[serde(flatten)]
    tile: Tile,
    highlighted: bool,
}

/// Periodic-table layout handed to the picker UI.
#[derive(Serialize)]
struct TableSnapshot {
    grid: [[&'static str; 18]; 5],
    tiles: Vec<TileEntry>,
}

/// Wires the atom lab to the browser frame loop.
///
/// `atom-web` keeps a single `thread_local!` AtomRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot hand out
/// references into Rust-owned state.
pub struct AtomRunner {
    lab: AtomLab,
    /// Events drained from the lab during the last tick, kept alive for
    /// pointer reads until the next tick.
    events: Vec<AtomEvent>,
}

impl AtomRunner {
    pub fn new(config: AtomConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            lab: AtomLab::new(config)?,
            events: Vec::with_capacity(16),
        })
    }

    /// Parse `json` as an [`AtomConfig`]; a missing seed falls back to `seed`.
    pub fn from_json(json: &str, seed: u64) -> Result<Self, ConfigError> {
        let mut config = AtomConfig::from_json(json)?;
        config.seed.get_or_insert(seed);
        Self::new(config)
    }

    /// Queue a trigger for the next tick. Flushed ahead of any later
    /// [`AtomRunner::apply`].
    pub fn push_input(&mut self, input: AtomInput) {
        self.lab.push_input(input);
    }

    /// Apply a trigger right away. Returns whether it changed anything.
    pub fn apply(&mut self, input: AtomInput) -> bool {
        self.lab.handle_input(input)
    }

    /// Run one frame: apply input, advance the clock, rebuild buffers and
    /// publish the events emitted since the previous tick.
    pub fn tick(&mut self, dt: f32) {
        self.lab.tick(dt);
        self.events = self.lab.take_events();
    }

    pub fn lab(&self) -> &AtomLab {
        &self.lab
    }

    // ---- Pointer accessors for typed-array reads ----

    pub fn nucleons_ptr(&self) -> *const f32 {
        self.lab.nucleon_buffer().instances_ptr()
    }

    pub fn nucleon_count(&self) -> u32 {
        self.lab.nucleon_buffer().instance_count() as u32
    }

    pub fn electrons_ptr(&self) -> *const f32 {
        self.lab.electron_buffer().instances_ptr()
    }

    pub fn electron_count(&self) -> u32 {
        self.lab.electron_buffer().instance_count() as u32
    }

    pub fn shells_ptr(&self) -> *const f32 {
        self.lab.shell_buffer().instances_ptr()
    }

    pub fn shell_count(&self) -> u32 {
        self.lab.shell_buffer().instance_count() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn events(&self) -> &[AtomEvent] {
        &self.events
    }

    // ---- JSON snapshots ----

    pub fn info_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.lab.info())
    }

    pub fn frame_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.lab.snapshot())
    }

    pub fn config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.lab.config())
    }

    /// The grid plus every non-empty tile, as JSON.
    pub fn periodic_table_json(&self) -> serde_json::Result<String> {
        let protons = self.lab.state().counts().protons;
        let tiles = periodic_table::tiles()
            .map(|tile| TileEntry {
                highlighted: periodic_table::is_highlighted(tile.symbol, protons),
                tile,
            })
            .collect();
        serde_json::to_string(&TableSnapshot { grid: GRID, tiles })
    }
}
