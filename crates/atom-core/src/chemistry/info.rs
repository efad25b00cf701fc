//! Values shown in the atomic info panel, derived purely from particle counts.

use serde::Serialize;

use crate::chemistry::periodic_table::{element_name, UNKNOWN_ELEMENT};
use crate::core::state::ParticleCounts;

/// Subshells in the simplified filling order used for the configuration string.
/// This is the textbook approximation, not strict energy ordering.
pub const SUBSHELLS: [(&str, usize); 12] = [
    ("1s", 2),
    ("2s", 2),
    ("2p", 6),
    ("3s", 2),
    ("3p", 6),
    ("4s", 2),
    ("3d", 10),
    ("4p", 6),
    ("5s", 2),
    ("4d", 10),
    ("5p", 6),
    ("6s", 2),
];

/// Snapshot for the info panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtomicInfo {
    pub atomic_number: usize,
    pub mass_number: usize,
    pub electron_count: usize,
    /// Protons minus electrons.
    pub charge: i64,
    pub element_name: &'static str,
    pub electron_configuration: String,
}

impl AtomicInfo {
    pub fn from_counts(counts: ParticleCounts) -> Self {
        let name = u32::try_from(counts.protons).map_or(UNKNOWN_ELEMENT, element_name);
        Self {
            atomic_number: counts.protons,
            mass_number: counts.nucleons(),
            electron_count: counts.electrons,
            charge: counts.protons as i64 - counts.electrons as i64,
            element_name: name,
            electron_configuration: electron_configuration(counts.electrons),
        }
    }
}

/// Greedy fill over [`SUBSHELLS`], e.g. `"1s2, 2s2, 2p2"` for six electrons.
/// Electrons past the last listed subshell are not shown.
pub fn electron_configuration(electrons: usize) -> String {
    let mut remaining = electrons;
    let mut parts = Vec::new();
    for (label, capacity) in SUBSHELLS {
        if remaining == 0 {
            break;
        }
        let here = capacity.min(remaining);
        parts.push(format!("{label}{here}"));
        remaining -= here;
    }
    parts.join(", ")
}
