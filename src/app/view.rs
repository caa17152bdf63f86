//! Plain-text rendering of a single z-slice, for the `--watch` mode.

use lattica_core::error::CoreError;
use lattica_core::lattice::Lattice;

/// Formats slice `z` with `#` for alive cells and `.` for dead ones, one
/// line per x row.
pub fn render_slice(lattice: &Lattice, z: usize) -> Result<String, CoreError> {
    let n = lattice.size();
    let mut out = String::with_capacity((n + 1) * n);
    for x in 0..n {
        for y in 0..n {
            out.push(if lattice.get(x, y, z)? { '#' } else { '.' });
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_marks_alive_cells() {
        let mut lattice = Lattice::new(3).unwrap();
        lattice.set(1, 2, 0, true).unwrap();
        let rendered = render_slice(&lattice, 0).unwrap();
        assert_eq!(rendered, "...\n..#\n...\n");
    }

    #[test]
    fn test_render_rejects_out_of_range_slice() {
        let lattice = Lattice::new(3).unwrap();
        assert!(render_slice(&lattice, 3).is_err());
    }
}
