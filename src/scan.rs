//! Direct grid-scan stepping.
//!
//! Computes the same generation as the query/transition pipeline, but reads
//! the neighborhood of each cell straight out of the grid and evaluates the
//! cells in parallel.

use crate::{next_state, Direction, Grid};

use rayon::iter::IndexedParallelIterator;
use rayon::iter::IntoParallelRefMutIterator;
use rayon::iter::ParallelIterator;

/// Compute the next generation of `grid` in one parallel pass.
pub fn step(grid: &Grid) -> Grid {
    let width = grid.get_width();
    let mut next = grid.empty_like();
    next.get_cells_mut()
        .par_iter_mut()
        .enumerate()
        .for_each(|(ix, cell)| {
            let (row, col) = ((ix / width) as isize, (ix % width) as isize);
            let live = Direction::directions()
                .filter(|dir| {
                    let (r, c) = dir.offset(row, col);
                    grid.query(r, c).is_alive()
                })
                .count();
            *cell = next_state(grid.query(row, col), live as u8);
        });
    next
}
