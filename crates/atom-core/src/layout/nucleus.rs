//! Nucleus packing: pure math, no state.
//!
//! Nucleons sit on the surface of a small sphere using the spherical
//! Fibonacci distribution, which spreads any count approximately evenly.
//! Every position depends on the total count, so adding one nucleon moves
//! all of them.

use std::f32::consts::PI;

use glam::Vec3;
use serde::Serialize;

use crate::components::particle::{ParticleId, ParticleKind};
use crate::core::state::AtomState;

/// Default radius of the nucleon sphere.
pub const NUCLEUS_RADIUS: f32 = 0.8;

/// Where one nucleon should be drawn this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NucleonPlacement {
    pub id: ParticleId,
    pub kind: ParticleKind,
    pub position: Vec3,
}

/// Position of point `index` out of `count` on a Fibonacci sphere.
///
/// Callers guarantee `index < count`, so `count` is never zero here.
fn fibonacci_point(index: usize, count: usize, radius: f32) -> Vec3 {
    let n = count as f32;
    // Clamp keeps acos in-domain against rounding at the poles.
    let cos_phi = (-1.0 + 2.0 * index as f32 / n).clamp(-1.0, 1.0);
    let phi = cos_phi.acos();
    let theta = (n * PI).sqrt() * phi;

    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

/// `count` points on a sphere of `radius`. Zero points for `count == 0`.
pub fn fibonacci_sphere(count: usize, radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| fibonacci_point(i, count, radius))
        .collect()
}

/// Place every proton then every neutron of `state` on the nucleus sphere.
pub fn nucleus_layout(state: &AtomState, radius: f32) -> Vec<NucleonPlacement> {
    let total = state.counts().nucleons();
    state
        .nucleons()
        .enumerate()
        .map(|(i, particle)| NucleonPlacement {
            id: particle.id.clone(),
            kind: particle.kind,
            position: fibonacci_point(i, total, radius),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_empty() {
        assert!(fibonacci_sphere(0, NUCLEUS_RADIUS).is_empty());
    }

    #[test]
    fn single_point_sits_at_south_pole() {
        let pts = fibonacci_sphere(1, NUCLEUS_RADIUS);
        assert_eq!(pts.len(), 1);
        // phi = acos(-1) = pi
        assert!(pts[0].x.abs() < 1e-5);
        assert!(pts[0].y.abs() < 1e-5);
        assert!((pts[0].z + NUCLEUS_RADIUS).abs() < 1e-5);
    }

    #[test]
    fn count_and_finiteness() {
        for n in 0..120 {
            let pts = fibonacci_sphere(n, NUCLEUS_RADIUS);
            assert_eq!(pts.len(), n);
            assert!(pts.iter().all(|p| p.is_finite()), "non-finite point at n={n}");
        }
    }

    #[test]
    fn points_lie_on_sphere() {
        for p in fibonacci_sphere(40, 2.0) {
            assert!((p.length() - 2.0).abs() < 1e-4, "|p| = {}", p.length());
        }
    }

    #[test]
    fn points_pairwise_distinct() {
        for n in 2..110 {
            let pts = fibonacci_sphere(n, NUCLEUS_RADIUS);
            for i in 0..n {
                for j in (i + 1)..n {
                    assert!(
                        pts[i].distance(pts[j]) > 1e-4,
                        "n={n}: points {i} and {j} coincide"
                    );
                }
            }
        }
    }

    #[test]
    fn layout_places_protons_first() {
        let mut state = AtomState::new(4);
        state.set_configuration(2, Some(3), Some(0));
        let placed = nucleus_layout(&state, NUCLEUS_RADIUS);
        assert_eq!(placed.len(), 5);
        assert!(placed[..2].iter().all(|p| p.kind == ParticleKind::Proton));
        assert!(placed[2..].iter().all(|p| p.kind == ParticleKind::Neutron));
        assert_eq!(placed[0].id, state.protons()[0].id);

        let expected = fibonacci_sphere(5, NUCLEUS_RADIUS);
        for (p, e) in placed.iter().zip(expected) {
            assert_eq!(p.position, e);
        }
    }

    #[test]
    fn adding_a_nucleon_moves_the_rest() {
        let mut state = AtomState::new(4);
        state.set_configuration(3, Some(0), Some(0));
        let before = nucleus_layout(&state, NUCLEUS_RADIUS);
        state.add_particle(ParticleKind::Neutron);
        let after = nucleus_layout(&state, NUCLEUS_RADIUS);
        assert_eq!(after.len(), 4);
        assert_ne!(before[1].position, after[1].position);
    }

    #[test]
    fn electrons_do_not_enter_the_nucleus() {
        let mut state = AtomState::new(4);
        state.set_configuration(0, Some(0), Some(5));
        assert!(nucleus_layout(&state, NUCLEUS_RADIUS).is_empty());
    }
}
