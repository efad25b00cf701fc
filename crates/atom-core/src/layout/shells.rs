//! Electron shell table and index-to-shell assignment.
//!
//! Shells are a visual grouping, not energy levels. Electrons fill shells in
//! order; the i-th electron's slot depends only on `i` and the current
//! electron count.

use serde::{Deserialize, Serialize};

/// Electrons per shell, innermost first.
pub const DEFAULT_CAPACITIES: [usize; 6] = [2, 8, 8, 18, 18, 32];

/// Display radius per shell, innermost first.
pub const DEFAULT_RADII: [f32; 6] = [2.0, 3.5, 5.0, 6.5, 8.0, 9.5];

/// Where an electron sits within the shell structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShellSlot {
    pub shell_index: usize,
    /// 0-based position among the electrons of this shell.
    pub position_in_shell: usize,
    /// Electrons actually occupying this shell (at most its capacity).
    pub total_in_shell: usize,
    /// Display radius of the shell.
    pub radius: f32,
}

/// Ordered shell capacities and their display radii.
///
/// The two vectors are parallel; see `AtomConfig::validate` for the checks a
/// loaded table must pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellTable {
    pub capacities: Vec<usize>,
    pub radii: Vec<f32>,
}

impl Default for ShellTable {
    fn default() -> Self {
        Self {
            capacities: DEFAULT_CAPACITIES.to_vec(),
            radii: DEFAULT_RADII.to_vec(),
        }
    }
}

impl ShellTable {
    /// Number of shells.
    pub fn len(&self) -> usize {
        self.capacities.len().min(self.radii.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Electrons the table can place (86 for the default table).
    pub fn total_capacity(&self) -> usize {
        self.capacities.iter().take(self.len()).sum()
    }

    pub fn capacity(&self, shell: usize) -> Option<usize> {
        (shell < self.len()).then(|| self.capacities[shell])
    }

    pub fn radius(&self, shell: usize) -> Option<f32> {
        (shell < self.len()).then(|| self.radii[shell])
    }

    /// Slot of electron `index` in an atom holding `electron_count` electrons.
    ///
    /// `None` when `index` is not a valid electron index or lies beyond the
    /// table's total capacity.
    pub fn slot(&self, index: usize, electron_count: usize) -> Option<ShellSlot> {
        if index >= electron_count {
            return None;
        }
        let mut filled_before = 0;
        for shell in 0..self.len() {
            let capacity = self.capacities[shell];
            if index < filled_before + capacity {
                return Some(ShellSlot {
                    shell_index: shell,
                    position_in_shell: index - filled_before,
                    total_in_shell: capacity.min(electron_count - filled_before),
                    radius: self.radii[shell],
                });
            }
            filled_before += capacity;
        }
        None
    }

    /// Electrons per occupied shell, innermost first. Overflow is not counted.
    pub fn occupancy(&self, electron_count: usize) -> Vec<usize> {
        let mut remaining = electron_count;
        let mut out = Vec::new();
        for shell in 0..self.len() {
            if remaining == 0 {
                break;
            }
            let here = self.capacities[shell].min(remaining);
            out.push(here);
            remaining -= here;
        }
        out
    }

    /// Number of shells holding at least one electron.
    pub fn occupied_shells(&self, electron_count: usize) -> usize {
        self.occupancy(electron_count).len()
    }

    /// Electrons the table has no room for.
    pub fn overflow(&self, electron_count: usize) -> usize {
        electron_count.saturating_sub(self.total_capacity())
    }
}
