//! Static element data for the periodic-table picker.
//!
//! Covers atomic numbers 1..=54 (hydrogen through xenon), laid out as the
//! first five periods of the 18-column table.

use serde::Serialize;

/// Highest atomic number the picker knows about.
pub const MAX_ATOMIC_NUMBER: u32 = 54;

/// Name returned for atomic numbers outside the table.
pub const UNKNOWN_ELEMENT: &str = "Unknown";

/// Symbols indexed by atomic number − 1.
const SYMBOLS: [&str; 54] = [
    "H", "He",
    "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar",
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co",
    "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr",
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh",
    "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe",
];

/// Names indexed by atomic number − 1.
const NAMES: [&str; 54] = [
    "Hydrogen", "Helium", "Lithium", "Beryllium", "Boron",
    "Carbon", "Nitrogen", "Oxygen", "Fluorine", "Neon",
    "Sodium", "Magnesium", "Aluminum", "Silicon", "Phosphorus",
    "Sulfur", "Chlorine", "Argon", "Potassium", "Calcium",
    "Scandium", "Titanium", "Vanadium", "Chromium", "Manganese",
    "Iron", "Cobalt", "Nickel", "Copper", "Zinc",
    "Gallium", "Germanium", "Arsenic", "Selenium", "Bromine",
    "Krypton", "Rubidium", "Strontium", "Yttrium", "Zirconium",
    "Niobium", "Molybdenum", "Technetium", "Ruthenium", "Rhodium",
    "Palladium", "Silver", "Cadmium", "Indium", "Tin",
    "Antimony", "Tellurium", "Iodine", "Xenon",
];

/// Picker grid: one row per period, one column per group. `""` is an empty cell.
pub const GRID: [[&str; 18]; 5] = [
    ["H", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "He"],
    ["Li", "Be", "", "", "", "", "", "", "", "", "", "", "B", "C", "N", "O", "F", "Ne"],
    ["Na", "Mg", "", "", "", "", "", "", "", "", "", "", "Al", "Si", "P", "S", "Cl", "Ar"],
    ["K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr"],
    ["Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe"],
];

/// One clickable cell of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub symbol: &'static str,
    pub atomic_number: u32,
    pub row: usize,
    pub col: usize,
}

/// Atomic number for a symbol. Case-sensitive ("Fe", not "FE").
pub fn atomic_number(symbol: &str) -> Option<u32> {
    SYMBOLS
        .iter()
        .position(|s| *s == symbol)
        .map(|idx| idx as u32 + 1)
}

pub fn symbol(atomic_number: u32) -> Option<&'static str> {
    index(atomic_number).map(|i| SYMBOLS[i])
}

/// Element name, or [`UNKNOWN_ELEMENT`] outside 1..=54.
pub fn element_name(atomic_number: u32) -> &'static str {
    index(atomic_number).map_or(UNKNOWN_ELEMENT, |i| NAMES[i])
}

/// Tile at a grid cell, if the cell is populated.
pub fn tile_at(row: usize, col: usize) -> Option<Tile> {
    let symbol = *GRID.get(row)?.get(col)?;
    Some(Tile {
        symbol,
        atomic_number: atomic_number(symbol)?,
        row,
        col,
    })
}

/// All populated tiles, row-major.
pub fn tiles() -> impl Iterator<Item = Tile> {
    (0..GRID.len()).flat_map(|row| (0..GRID[row].len()).filter_map(move |col| tile_at(row, col)))
}

/// The picker highlights the tile whose atomic number equals the proton count.
pub fn is_highlighted(symbol: &str, proton_count: usize) -> bool {
    atomic_number(symbol).is_some_and(|z| z as usize == proton_count)
}

fn index(atomic_number: u32) -> Option<usize> {
    (1..=MAX_ATOMIC_NUMBER)
        .contains(&atomic_number)
        .then(|| atomic_number as usize - 1)
}
