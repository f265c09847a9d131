mod settings_file;

use std::path::PathBuf;
use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use terrain::ascii_preview::render_ascii;
use terrain::config::PREVIEW_COLUMNS;
use terrain::{Heightmap, TerrainPlugin, TerrainSettings, TerrainSurface};

use settings_file::{load_settings, write_heightmap, CONFIG_ENV, OUTPUT_ENV};

fn main() -> ExitCode {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));

    let settings = match std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
        Some(path) => match load_settings(&path) {
            Ok(s) => {
                info!("Loaded terrain settings from {}", path.display());
                s
            }
            Err(e) => {
                error!("Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => TerrainSettings::default(),
    };

    app.insert_resource(settings).add_plugins(TerrainPlugin);

    // One update runs the Startup generation system.
    app.update();

    let world = app.world();
    let Some(heightmap) = world.get_resource::<Heightmap>() else {
        error!("No heightmap was generated");
        return ExitCode::FAILURE;
    };

    let grid = &heightmap.grid;
    println!(
        "seed {}  size {}x{}  offset ({:.2}, {:.2})",
        heightmap.seed, grid.width, grid.height, heightmap.offset_x, heightmap.offset_y
    );
    if let Some((lo, hi)) = grid.min_max() {
        println!("elevation min {lo:.4}  max {hi:.4}  mean {:.4}", grid.mean());
    }
    if let Some(surface) = world.get_resource::<TerrainSurface>() {
        println!(
            "surface size {:?}  collider scale {:?}",
            surface.size, surface.collider_scale
        );
    }
    print!("{}", render_ascii(grid, PREVIEW_COLUMNS));

    if let Some(path) = std::env::var_os(OUTPUT_ENV).map(PathBuf::from) {
        if let Err(e) = write_heightmap(&path, heightmap) {
            error!("Failed to write {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        info!("Wrote heightmap to {}", path.display());
    }

    ExitCode::SUCCESS
}
