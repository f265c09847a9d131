use bevy::prelude::*;

pub mod ascii_preview;
pub mod config;
pub mod error;
pub mod grid;
pub mod heightmap;
pub mod noise_field;
pub mod seed;
pub mod settings;
pub mod smoothing;
pub mod surface;

pub use error::TerrainError;
pub use grid::ElevationGrid;
pub use heightmap::{generate_heightmap, Heightmap, HeightmapGenerator};
pub use noise_field::NoiseField;
pub use settings::{NoiseParameters, OffsetJitter, SeedState, SmoothingConfig, TerrainSettings};
pub use smoothing::smooth;
pub use surface::TerrainSurface;

// ---------------------------------------------------------------------------
// Startup generation
// ---------------------------------------------------------------------------

/// Generate the heightmap from `TerrainSettings` and publish it together
/// with its `TerrainSurface`. Refused settings are logged and nothing is
/// inserted.
pub fn generate_terrain_on_startup(mut commands: Commands, settings: Res<TerrainSettings>) {
    match generate_heightmap(&settings) {
        Ok(heightmap) => {
            let surface = TerrainSurface::from_heightmap(
                &heightmap,
                settings.noise.scale,
                settings.texture_tiling,
            );
            if let Some((lo, hi)) = heightmap.grid.min_max() {
                info!(
                    "Heightmap ready: seed {}, elevation range [{:.3}, {:.3}]",
                    heightmap.seed, lo, hi
                );
            }
            commands.insert_resource(surface);
            commands.insert_resource(heightmap);
        }
        Err(e) => {
            error!("Terrain generation refused: {}", e);
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Generates the terrain once at startup. Insert a `TerrainSettings`
/// resource before adding the plugin to override the defaults.
pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainSettings>()
            .add_systems(Startup, generate_terrain_on_startup);
    }
}
