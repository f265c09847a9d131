// ---------------------------------------------------------------------------
// TerrainError: configuration and grid-shape problems
// ---------------------------------------------------------------------------

use std::fmt;

use crate::config::MIN_GRID_SIDE;

/// Errors raised by the validation gate in front of heightmap generation and
/// by checked grid construction.
///
/// Settings are validated before any sampling starts, so a refused run never
/// leaves a partially filled grid behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// Width or height below the minimum side. A side of 1 would also make
    /// the `x / (width - 1)` domain mapping divide by zero.
    InvalidDimensions { width: usize, height: usize },
    /// Fractal noise needs at least one octave.
    ZeroOctaves,
    /// Sample buffer length does not equal `width * height`.
    ValueCountMismatch {
        width: usize,
        height: usize,
        found: usize,
    },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::InvalidDimensions { width, height } => write!(
                f,
                "Invalid grid dimensions {width}x{height}: both sides must be at least {MIN_GRID_SIDE}"
            ),
            TerrainError::ZeroOctaves => write!(f, "Noise octave count must be at least 1"),
            TerrainError::ValueCountMismatch {
                width,
                height,
                found,
            } => write!(
                f,
                "Grid {width}x{height} needs {} samples, found {found}",
                width.saturating_mul(*height)
            ),
        }
    }
}

impl std::error::Error for TerrainError {}
