//! Life-like rule evaluation over the 26-cell toroidal neighborhood.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::lattice::Lattice;

/// Number of cells adjacent to any cell in three dimensions.
pub const NEIGHBORHOOD: u8 = 26;

/// Survival and birth thresholds for a Life-like rule.
///
/// A live cell survives when its neighbor count falls in
/// `survival_min..=survival_max`; a dead cell is born when its count is in
/// the birth set. Defaults to the classic thresholds: survive on 2-3
/// neighbors, birth on exactly 3.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub survival_min: u8,
    pub survival_max: u8,
    pub birth: Vec<u8>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            survival_min: 2,
            survival_max: 3,
            birth: vec![3],
        }
    }
}

impl Rule {
    /// Validates the thresholds.
    ///
    /// Rejects an empty survival range, an empty birth set, and any
    /// threshold above the neighborhood size.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.survival_min > self.survival_max {
            return Err(CoreError::invalid_config(format!(
                "survival range [{}, {}] is empty",
                self.survival_min, self.survival_max
            )));
        }
        if self.survival_max > NEIGHBORHOOD {
            return Err(CoreError::invalid_config(format!(
                "survival threshold {} above neighborhood size {}",
                self.survival_max, NEIGHBORHOOD
            )));
        }
        if self.birth.is_empty() {
            return Err(CoreError::invalid_config("birth set is empty"));
        }
        if let Some(&count) = self.birth.iter().find(|&&count| count > NEIGHBORHOOD) {
            return Err(CoreError::invalid_config(format!(
                "birth count {} above neighborhood size {}",
                count, NEIGHBORHOOD
            )));
        }
        Ok(())
    }

    /// Next state of one cell, read entirely from `lattice`.
    ///
    /// Pure per-cell computation with no shared mutable state; a whole
    /// generation is stepped by evaluating every cell against the same
    /// previous lattice. Coordinates wrap like neighbor lookups do.
    #[inline]
    pub fn next_state(&self, lattice: &Lattice, x: usize, y: usize, z: usize) -> bool {
        let n = lattice.size();
        let neighbors = count_neighbors(lattice, x, y, z);
        if lattice.cell(x % n, y % n, z % n) {
            self.survival_min <= neighbors && neighbors <= self.survival_max
        } else {
            self.birth.contains(&neighbors)
        }
    }

    /// Computes one full generation sequentially, reading only `lattice`.
    ///
    /// The scheduler runs the same per-cell computation in parallel; this
    /// form serves tests and one-shot callers.
    #[must_use]
    pub fn step(&self, lattice: &Lattice) -> Lattice {
        let n = lattice.size();
        let mut cells = Vec::with_capacity(lattice.cell_count());
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    cells.push(self.next_state(lattice, x, y, z));
                }
            }
        }
        Lattice { cells, size: n }
    }
}

/// Counts the alive cells among the 26 toroidally wrapped neighbors.
///
/// Each axis wraps independently modulo the lattice size, so coordinate `-1`
/// maps to `N-1` and `N` maps to `0`; the lattice has no true edges.
#[inline]
pub fn count_neighbors(lattice: &Lattice, x: usize, y: usize, z: usize) -> u8 {
    let n = lattice.size() as i64;
    let mut count = 0u8;
    for dz in -1i64..=1 {
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }
                let nx = (x as i64 + dx).rem_euclid(n) as usize;
                let ny = (y as i64 + dy).rem_euclid(n) as usize;
                let nz = (z as i64 + dz).rem_euclid(n) as usize;
                if lattice.cell(nx, ny, nz) {
                    count += 1;
                }
            }
        }
    }
    count
}
