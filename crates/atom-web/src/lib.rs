//! wasm-bindgen surface for the atom builder.
//!
//! A single `thread_local!` [`AtomRunner`] backs every export. The front end
//! calls `atom_init` once, then `atom_tick(dt)` per animation frame and reads
//! the nucleon, electron and shell buffers straight out of wasm memory.

pub mod runner;

pub use runner::AtomRunner;

use std::cell::RefCell;

use atom_core::{AtomConfig, AtomInput, ParticleId, ParticleKind};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<AtomRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut AtomRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Atom not initialized. Call atom_init() first.");
        f(runner)
    })
}

fn install(runner: AtomRunner) {
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn kind_from_code(code: u32) -> Option<ParticleKind> {
    let kind = ParticleKind::from_code(code);
    if kind.is_none() {
        log::warn!("ignoring unknown particle kind code {code}");
    }
    kind
}

#[wasm_bindgen]
pub fn atom_init() -> Result<(), JsValue> {
    init_logging();
    let config = AtomConfig::default().with_seed(clock_seed());
    install(AtomRunner::new(config).map_err(to_js)?);
    log::info!("atom-builder: initialized");
    Ok(())
}

/// Initialize from a JSON [`AtomConfig`]. Unset fields take their defaults.
#[wasm_bindgen]
pub fn atom_init_with_config(json: &str) -> Result<(), JsValue> {
    init_logging();
    install(AtomRunner::from_json(json, clock_seed()).map_err(to_js)?);
    log::info!("atom-builder: initialized from config");
    Ok(())
}

#[wasm_bindgen]
pub fn atom_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Triggers ----
//
// Every trigger mutates the atom synchronously; `get_info_json` reflects it
// before the next `atom_tick`.

/// `kind`: 1 proton, 2 neutron, 3 electron.
#[wasm_bindgen]
pub fn atom_add_particle(kind: u32) {
    if let Some(kind) = kind_from_code(kind) {
        with_runner(|r| r.apply(AtomInput::AddParticle(kind)));
    }
}

#[wasm_bindgen]
pub fn atom_remove_particle(id: &str, kind: u32) -> bool {
    match kind_from_code(kind) {
        Some(kind) => with_runner(|r| {
            r.apply(AtomInput::RemoveParticle {
                id: ParticleId::from(id),
                kind,
            })
        }),
        None => false,
    }
}

/// Periodic-table click. Returns `false` for an unknown symbol.
#[wasm_bindgen]
pub fn atom_select_element(symbol: &str) -> bool {
    with_runner(|r| {
        r.apply(AtomInput::SelectElement {
            symbol: symbol.to_owned(),
        })
    })
}

/// Explicit counts; `neutrons`/`electrons` default to `protons` when absent.
#[wasm_bindgen]
pub fn atom_set_configuration(protons: u32, neutrons: Option<u32>, electrons: Option<u32>) {
    with_runner(|r| {
        r.apply(AtomInput::SetConfiguration {
            protons: protons as usize,
            neutrons: neutrons.map(|n| n as usize),
            electrons: electrons.map(|n| n as usize),
        })
    });
}

#[wasm_bindgen]
pub fn atom_clear() {
    with_runner(|r| r.apply(AtomInput::Clear));
}

// ---- Buffer accessors ----

#[wasm_bindgen]
pub fn get_nucleons_ptr() -> *const f32 {
    with_runner(|r| r.nucleons_ptr())
}

#[wasm_bindgen]
pub fn get_nucleon_count() -> u32 {
    with_runner(|r| r.nucleon_count())
}

#[wasm_bindgen]
pub fn get_electrons_ptr() -> *const f32 {
    with_runner(|r| r.electrons_ptr())
}

#[wasm_bindgen]
pub fn get_electron_count() -> u32 {
    with_runner(|r| r.electron_count())
}

#[wasm_bindgen]
pub fn get_shells_ptr() -> *const f32 {
    with_runner(|r| r.shells_ptr())
}

#[wasm_bindgen]
pub fn get_shell_count() -> u32 {
    with_runner(|r| r.shell_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

// ---- JSON snapshots ----

#[wasm_bindgen]
pub fn get_info_json() -> Result<String, JsValue> {
    with_runner(|r| r.info_json()).map_err(to_js)
}

#[wasm_bindgen]
pub fn get_frame_json() -> Result<String, JsValue> {
    with_runner(|r| r.frame_json()).map_err(to_js)
}

#[wasm_bindgen]
pub fn get_config_json() -> Result<String, JsValue> {
    with_runner(|r| r.config_json()).map_err(to_js)
}

/// Grid and tiles; the tile matching the current proton count is highlighted.
#[wasm_bindgen]
pub fn get_periodic_table_json() -> Result<String, JsValue> {
    with_runner(|r| r.periodic_table_json()).map_err(to_js)
}

#[wasm_bindgen]
pub fn get_group_rotation() -> f32 {
    with_runner(|r| r.lab().group_rotation())
}
