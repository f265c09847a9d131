//! Iterative 4-neighbour box smoothing.
//!
//! Each pass reads only the previous pass's grid, so rows within a pass are
//! independent and run in parallel. Border rows and columns are never
//! written and keep the values they had before the first pass.

use bevy::log::debug;
use rayon::prelude::*;

use crate::grid::ElevationGrid;

/// Run `iterations` smoothing passes and return the result.
pub fn smooth(grid: ElevationGrid, iterations: u32) -> ElevationGrid {
    if iterations == 0 {
        return grid;
    }
    // No interior cells to average.
    if grid.width < 3 || grid.height < 3 {
        return grid;
    }

    let mut current = grid;
    for _ in 0..iterations {
        current = smooth_pass(&current);
    }
    debug!(
        "Smoothed {}x{} heightmap with {} passes",
        current.width, current.height, iterations
    );
    current
}

/// One pass: interior cells become the mean of their four axis-aligned
/// neighbours in `prev`.
fn smooth_pass(prev: &ElevationGrid) -> ElevationGrid {
    let width = prev.width;
    let height = prev.height;
    let mut next = prev.clone();

    next.values_mut()
        .par_chunks_mut(width)
        .enumerate()
        .filter(|(y, _)| *y > 0 && *y + 1 < height)
        .for_each(|(y, row)| {
            let above = prev.row(y - 1);
            let here = prev.row(y);
            let below = prev.row(y + 1);
            for x in 1..width - 1 {
                // Pairwise sum keeps a flat neighbourhood exact.
                row[x] = ((here[x - 1] + here[x + 1]) + (above[x] + below[x])) * 0.25;
            }
        });

    next
}
