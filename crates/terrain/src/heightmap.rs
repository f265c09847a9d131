//! Heightmap generation orchestrator.
//!
//! Pipeline for one run:
//! 1. Validate settings (nothing is sampled if this fails)
//! 2. Resolve the seed and build the `NoiseField` once
//! 3. Resolve domain offsets (configured or seeded jitter)
//! 4. Fill the grid, one parallel task per row
//! 5. Optional smoothing passes

use bevy::log::info;
use bevy::prelude::Resource;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::TerrainError;
use crate::grid::ElevationGrid;
use crate::noise_field::NoiseField;
use crate::seed::{resolve_offsets, resolve_seed};
use crate::settings::{NoiseParameters, TerrainSettings};
use crate::smoothing::smooth;

/// Result of a generation run. The grid is owned by whoever holds this.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heightmap {
    pub grid: ElevationGrid,
    /// Seed the run actually used; replaying it as a fixed seed reproduces
    /// the grid.
    pub seed: i32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Validated settings ready to produce heightmaps.
#[derive(Debug, Clone)]
pub struct HeightmapGenerator {
    settings: TerrainSettings,
}

impl HeightmapGenerator {
    pub fn new(settings: TerrainSettings) -> Result<Self, TerrainError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Run the full pipeline. Each call resolves its own seed, so with a
    /// random seed two calls produce different heightmaps.
    pub fn generate(&self) -> Heightmap {
        let s = &self.settings;
        let seed = resolve_seed(s.seed_state());
        let field = NoiseField::new(seed);
        let (offset_x, offset_y) = resolve_offsets(seed, &s.noise, &s.offset_jitter);
        let params = NoiseParameters {
            offset_x,
            offset_y,
            ..s.noise
        };

        info!(
            "Generating {}x{} heightmap (seed {}, {} octaves, offset ({:.2}, {:.2}))",
            s.width, s.height, seed, params.octaves, offset_x, offset_y
        );

        let mut grid = fill_grid(s.width, s.height, &field, &params);

        let iterations = s.smoothing.effective_iterations();
        if iterations > 0 {
            grid = smooth(grid, iterations);
        }

        Heightmap {
            grid,
            seed,
            offset_x,
            offset_y,
        }
    }
}

/// Validate `settings` and generate in one step.
pub fn generate_heightmap(settings: &TerrainSettings) -> Result<Heightmap, TerrainError> {
    Ok(HeightmapGenerator::new(settings.clone())?.generate())
}

/// Map grid cell `(x, y)` into the noise domain. Callers guarantee both
/// sides are at least 2.
#[inline]
pub fn domain_coords(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    params: &NoiseParameters,
) -> (f32, f32) {
    let x_coord = (x as f32 / (width - 1) as f32) * params.scale + params.offset_x;
    let y_coord = (y as f32 / (height - 1) as f32) * params.scale + params.offset_y;
    (x_coord, y_coord)
}

/// Sample every cell of a `width x height` grid. Every cell depends only on
/// its coordinates, so the row-parallel fill matches a sequential one bit
/// for bit.
pub fn fill_grid(
    width: usize,
    height: usize,
    field: &NoiseField,
    params: &NoiseParameters,
) -> ElevationGrid {
    debug_assert!(width >= 2 && height >= 2);
    let mut grid = ElevationGrid::filled(width, height, 0.0);
    grid.values_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                let (xc, yc) = domain_coords(x, y, width, height, params);
                *cell = field.sample(xc, yc, params);
            }
        });
    grid
}
