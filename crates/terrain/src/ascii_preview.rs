//! ASCII preview of an elevation grid.
//!
//! Each character covers a square block of cells (sampled at the block's
//! top-left corner). Heights are normalized by the grid's own min/max, so
//! the preview shows relief, not absolute elevation.

use crate::grid::ElevationGrid;

/// Low to high.
const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Character for an elevation already normalized to [0, 1].
pub fn height_to_char(t: f32) -> char {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let idx = (t * (RAMP.len() - 1) as f32).round() as usize;
    RAMP[idx]
}

/// Render `grid` with at most `max_columns` characters per line.
pub fn render_ascii(grid: &ElevationGrid, max_columns: usize) -> String {
    let Some((lo, hi)) = grid.min_max() else {
        return String::new();
    };
    let range = hi - lo;
    let step = grid.width.div_ceil(max_columns.max(1)).max(1);

    let mut out = String::new();
    for y in (0..grid.height).step_by(step) {
        for x in (0..grid.width).step_by(step) {
            let t = if range > f32::EPSILON {
                (grid.get(x, y) - lo) / range
            } else {
                0.0
            };
            out.push(height_to_char(t));
        }
        out.push('\n');
    }
    out
}
