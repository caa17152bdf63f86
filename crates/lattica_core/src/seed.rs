//! Initial-generation seeding strategies.
//!
//! Three independently selectable strategies write the starting population
//! into a freshly allocated lattice: a uniform random fill followed by a
//! pruning cleanup, a deterministic five-cell cluster, and a decoded
//! run-length pattern placed in the central z-slice.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::lattice::Lattice;
use crate::rule;

/// Default fill probability for [`SeedStrategy::UniformRandom`].
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.05;

/// Where a decoded pattern lands inside its z-slice.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PatternPlacement {
    /// Centered on the slice.
    Centered,
    /// Anchored at the given corner; `{ x: 0, y: 0 }` is origin-aligned.
    Offset { x: usize, y: usize },
}

/// Configuration-level choice of seeding strategy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SeedStrategy {
    /// Each cell independently alive with the given probability, then cells
    /// left with at most one live neighbor are pruned.
    UniformRandom { probability: f64 },
    /// Five-cell plus-shaped cluster at the lattice center.
    CenterCluster,
    /// A run-length-encoded pattern placed in the central z-slice.
    Pattern { rle: String, placement: PatternPlacement },
}

impl Default for SeedStrategy {
    fn default() -> Self {
        Self::CenterCluster
    }
}

impl SeedStrategy {
    /// Validates strategy parameters that do not depend on decoding.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::UniformRandom { probability } => {
                if !(0.0..=1.0).contains(probability) {
                    return Err(CoreError::invalid_config(format!(
                        "fill probability {probability} outside [0, 1]"
                    )));
                }
            }
            Self::CenterCluster => {}
            Self::Pattern { rle, .. } => {
                if rle.trim().is_empty() {
                    return Err(CoreError::invalid_config("seed pattern is empty"));
                }
            }
        }
        Ok(())
    }
}

/// Fills each cell independently with probability `probability`, then prunes
/// cells left with at most one live neighbor.
pub fn uniform_random<R: Rng>(
    lattice: &mut Lattice,
    probability: f64,
    rng: &mut R,
) -> Result<(), CoreError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(CoreError::invalid_config(format!(
            "fill probability {probability} outside [0, 1]"
        )));
    }
    let n = lattice.size();
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                lattice.set(x, y, z, rng.gen_bool(probability))?;
            }
        }
    }
    prune_isolated(lattice)
}

/// Clears every live cell with at most one live neighbor.
///
/// Counts are taken against a snapshot of the incoming lattice, so the
/// cleanup is independent of iteration order.
pub fn prune_isolated(lattice: &mut Lattice) -> Result<(), CoreError> {
    let filled = lattice.clone();
    let n = filled.size();
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                if filled.cell(x, y, z) && rule::count_neighbors(&filled, x, y, z) <= 1 {
                    lattice.set(x, y, z, false)?;
                }
            }
        }
    }
    Ok(())
}

/// Writes the five-cell plus-shaped cluster into the central z-slice,
/// centered at `(N/2, N/2, N/2)`. Independent of RNG state.
pub fn center_cluster(lattice: &mut Lattice) -> Result<(), CoreError> {
    let n = lattice.size();
    if n < 3 {
        return Err(CoreError::invalid_config(format!(
            "center cluster needs a lattice of size >= 3, got {n}"
        )));
    }
    let m = n / 2;
    lattice.set(m, m, m, true)?;
    lattice.set(m + 1, m, m, true)?;
    lattice.set(m - 1, m, m, true)?;
    lattice.set(m, m + 1, m, true)?;
    lattice.set(m, m - 1, m, true)?;
    Ok(())
}

/// Writes a decoded pattern into the `z = N/2` slice.
///
/// Pattern rows advance along the x axis, columns along the y axis. The
/// placement must keep every row inside the lattice.
pub fn place_pattern(
    lattice: &mut Lattice,
    rows: &[Vec<bool>],
    placement: PatternPlacement,
) -> Result<(), CoreError> {
    if rows.is_empty() {
        return Err(CoreError::invalid_config("pattern has no rows"));
    }
    let n = lattice.size();
    let height = rows.len();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let (x0, y0) = match placement {
        PatternPlacement::Centered => {
            if height > n || width > n {
                return Err(CoreError::invalid_config(format!(
                    "pattern of {height}x{width} cells does not fit in a lattice of size {n}"
                )));
            }
            ((n - height) / 2, (n - width) / 2)
        }
        PatternPlacement::Offset { x, y } => (x, y),
    };
    let fits = x0.checked_add(height).is_some_and(|end| end <= n)
        && y0.checked_add(width).is_some_and(|end| end <= n);
    if !fits {
        return Err(CoreError::invalid_config(format!(
            "pattern of {height}x{width} cells at offset ({x0}, {y0}) does not fit in a lattice of size {n}"
        )));
    }
    let z = n / 2;
    for (i, row) in rows.iter().enumerate() {
        for (j, &alive) in row.iter().enumerate() {
            if alive {
                lattice.set(x0 + i, y0 + j, z, true)?;
            }
        }
    }
    Ok(())
}
