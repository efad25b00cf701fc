//! Electron orbits: pure functions of elapsed time.
//!
//! Each shell gets one random tilt axis at startup. An electron circles in
//! the XZ plane at its shell radius, and that circle is then rotated by a
//! fixed angle about the shell's axis, giving every shell a stable, distinct
//! orbital plane.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::particle::ParticleId;
use crate::core::rng::Rng;
use crate::core::state::AtomState;
use crate::layout::shells::{ShellSlot, ShellTable};

/// Orbit tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitParams {
    /// Angular speed of the innermost shell (rad/s). Shell `k` runs at `speed / (k + 1)`.
    pub speed: f32,
    /// Rotation applied about each shell's axis (radians).
    pub tilt: f32,
    /// Yaw added to the whole atom group per rendered frame (radians).
    pub group_spin: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            speed: 0.5,
            tilt: FRAC_PI_2,
            group_spin: 0.001,
        }
    }
}

/// One unit rotation axis per shell, fixed for the lifetime of a lab.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellAxes {
    axes: Vec<Vec3>,
}

impl ShellAxes {
    /// Sample `count` axes: `theta` uniform in [0, 2pi), `phi` uniform in [0, pi).
    pub fn random(rng: &mut Rng, count: usize) -> Self {
        let axes = (0..count)
            .map(|_| {
                let theta = rng.next_f32() * TAU;
                let phi = rng.next_f32() * PI;
                Vec3::new(
                    phi.sin() * theta.cos(),
                    phi.sin() * theta.sin(),
                    phi.cos(),
                )
                .normalize_or(Vec3::Y)
            })
            .collect();
        Self { axes }
    }

    /// Use explicit axes (normalized; degenerate vectors fall back to +Y).
    pub fn from_axes(axes: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            axes: axes.into_iter().map(|a| a.normalize_or(Vec3::Y)).collect(),
        }
    }

    pub fn axis(&self, shell: usize) -> Option<Vec3> {
        self.axes.get(shell).copied()
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.axes.iter().copied()
    }
}

/// Where one electron should be drawn this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectronPlacement {
    pub id: ParticleId,
    pub shell_index: usize,
    /// Display radius of the electron's shell.
    pub shell_radius: f32,
    pub position: Vec3,
}

/// A translucent boundary sphere for an occupied shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShellSphere {
    pub shell_index: usize,
    pub radius: f32,
    pub axis: Vec3,
    /// Euler XYZ rotation orienting the sphere along `axis`.
    pub rotation: Vec3,
}

/// Position of an electron in `slot` at time `t`, orbiting in the plane set by `axis`.
pub fn electron_position(slot: &ShellSlot, axis: Vec3, t: f32, orbit: &OrbitParams) -> Vec3 {
    let base_speed = orbit.speed / (slot.shell_index as f32 + 1.0);
    let phase = TAU * slot.position_in_shell as f32 / slot.total_in_shell as f32;
    let angle = t * base_speed + phase;

    let raw = Vec3::new(slot.radius * angle.cos(), 0.0, slot.radius * angle.sin());
    Quat::from_axis_angle(axis, orbit.tilt) * raw
}

/// Yaw of the whole atom group after `frames` rendered frames.
pub fn group_rotation(frames: u64, orbit: &OrbitParams) -> f32 {
    (frames as f64 * orbit.group_spin as f64).rem_euclid(std::f64::consts::TAU) as f32
}

/// Frame positions for every electron the shell table can hold.
///
/// Electrons beyond the table's capacity are left out. Callers compare the
/// result length with the electron count to detect overflow.
pub fn electron_layout(
    state: &AtomState,
    table: &ShellTable,
    axes: &ShellAxes,
    t: f32,
    orbit: &OrbitParams,
) -> Vec<ElectronPlacement> {
    let electrons = state.electrons();
    let count = electrons.len();

    electrons
        .iter()
        .enumerate()
        .filter_map(|(i, electron)| {
            let slot = table.slot(i, count)?;
            let axis = axes.axis(slot.shell_index)?;
            Some(ElectronPlacement {
                id: electron.id.clone(),
                shell_index: slot.shell_index,
                shell_radius: slot.radius,
                position: electron_position(&slot, axis, t, orbit),
            })
        })
        .collect()
}

/// Boundary spheres for the shells that currently hold electrons.
pub fn shell_spheres(electron_count: usize, table: &ShellTable, axes: &ShellAxes) -> Vec<ShellSphere> {
    (0..table.occupied_shells(electron_count))
        .filter_map(|shell| {
            let axis = axes.axis(shell)?;
            Some(ShellSphere {
                shell_index: shell,
                radius: table.radii[shell],
                axis,
                rotation: Vec3::new(axis.z.clamp(-1.0, 1.0).acos(), axis.y.atan2(axis.x), 0.0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes(seed: u64) -> ShellAxes {
        ShellAxes::random(&mut Rng::new(seed), ShellTable::default().len())
    }

    #[test]
    fn axes_are_unit_length() {
        let a = axes(1234);
        assert_eq!(a.len(), 6);
        for axis in a.iter() {
            assert!((axis.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn same_seed_same_axes() {
        assert_eq!(axes(77), axes(77));
        assert_ne!(axes(77), axes(78));
    }

    #[test]
    fn electron_stays_on_its_shell_radius() {
        let table = ShellTable::default();
        let a = axes(5);
        let orbit = OrbitParams::default();
        for i in 0..30 {
            let slot = table.slot(i, 30).unwrap();
            let axis = a.axis(slot.shell_index).unwrap();
            for t in [0.0, 0.7, 12.5] {
                let p = electron_position(&slot, axis, t, &orbit);
                assert!((p.length() - slot.radius).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn tilt_about_x_moves_orbit_into_xy_plane() {
        let slot = ShellSlot {
            shell_index: 0,
            position_in_shell: 0,
            total_in_shell: 4,
            radius: 2.0,
        };
        let orbit = OrbitParams::default();
        // t = 0, angle 0: raw point (2, 0, 0) is on the axis and stays put.
        let p = electron_position(&slot, Vec3::X, 0.0, &orbit);
        assert!((p - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);

        // Quarter phase: raw (0, 0, 2) rotates to (0, -2, 0) about +X.
        let slot = ShellSlot { position_in_shell: 1, ..slot };
        let p = electron_position(&slot, Vec3::X, 0.0, &orbit);
        assert!((p - Vec3::new(0.0, -2.0, 0.0)).length() < 1e-5, "got {p}");
    }

    #[test]
    fn outer_shells_orbit_slower() {
        let orbit = OrbitParams::default();
        let inner = ShellSlot { shell_index: 0, position_in_shell: 0, total_in_shell: 1, radius: 1.0 };
        let outer = ShellSlot { shell_index: 3, ..inner };
        let t = 1.0;
        // Zero tilt leaves the orbit in the XZ plane.
        let flat = OrbitParams { tilt: 0.0, ..orbit };
        let a_inner = electron_position(&inner, Vec3::Y, t, &flat);
        let a_outer = electron_position(&outer, Vec3::Y, t, &flat);
        let angle_inner = a_inner.z.atan2(a_inner.x);
        let angle_outer = a_outer.z.atan2(a_outer.x);
        assert!((angle_inner - 0.5).abs() < 1e-5);
        assert!((angle_outer - 0.125).abs() < 1e-5);
    }

    #[test]
    fn shell_mates_are_evenly_spaced() {
        let table = ShellTable::default();
        let flat = OrbitParams { tilt: 0.0, ..OrbitParams::default() };
        // Carbon: four electrons in shell 1, a quarter turn apart.
        let points: Vec<Vec3> = (2..6)
            .map(|i| electron_position(&table.slot(i, 6).unwrap(), Vec3::Y, 0.0, &flat))
            .collect();
        for w in points.windows(2) {
            let cos = w[0].normalize().dot(w[1].normalize());
            assert!(cos.abs() < 1e-5, "expected right angle, cos = {cos}");
        }
    }

    #[test]
    fn layout_is_deterministic_for_a_seed() {
        let mut state = AtomState::new(3);
        state.set_element(12);
        let table = ShellTable::default();
        let orbit = OrbitParams::default();
        let first = electron_layout(&state, &table, &axes(9), 2.0, &orbit);
        let second = electron_layout(&state, &table, &axes(9), 2.0, &orbit);
        assert_eq!(first, second);
        assert_eq!(first.len(), 12);
        assert_eq!(first[11].shell_index, 2);
        assert_eq!(first[11].shell_radius, 5.0);
    }

    #[test]
    fn overflow_electrons_are_not_placed() {
        let mut state = AtomState::new(3);
        state.set_configuration(0, Some(0), Some(90));
        let placed = electron_layout(
            &state,
            &ShellTable::default(),
            &axes(2),
            0.0,
            &OrbitParams::default(),
        );
        assert_eq!(placed.len(), 86);
    }

    #[test]
    fn spheres_only_for_occupied_shells() {
        let table = ShellTable::default();
        let a = axes(4);
        assert!(shell_spheres(0, &table, &a).is_empty());
        let spheres = shell_spheres(11, &table, &a);
        assert_eq!(spheres.len(), 3);
        assert_eq!(spheres[2].radius, 5.0);
        assert_eq!(spheres[1].axis, a.axis(1).unwrap());
        assert_eq!(shell_spheres(200, &table, &a).len(), 6);
    }

    #[test]
    fn sphere_rotation_matches_axis() {
        let table = ShellTable::default();
        let a = ShellAxes::from_axes([Vec3::Z, Vec3::Y]);
        let spheres = shell_spheres(4, &table, &a);
        assert!(spheres[0].rotation.x.abs() < 1e-6);
        assert!((spheres[1].rotation.x - FRAC_PI_2).abs() < 1e-6);
        assert!((spheres[1].rotation.y - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn group_spins_a_little_each_frame() {
        let orbit = OrbitParams::default();
        assert_eq!(group_rotation(0, &orbit), 0.0);
        assert!((group_rotation(500, &orbit) - 0.5).abs() < 1e-6);
        let wrapped = group_rotation(10_000, &orbit);
        assert!((0.0..TAU).contains(&wrapped));
        assert!((wrapped - (10.0 - TAU)).abs() < 1e-4);
    }
}
