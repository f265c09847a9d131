//! End-to-end tests for heightmap generation through the public API and the
//! Bevy plugin.
//!
//! Run: cargo test -p terrain --test generation

use bevy::prelude::*;

use terrain::ascii_preview::render_ascii;
use terrain::{
    generate_heightmap, smooth, Heightmap, NoiseParameters, SmoothingConfig, TerrainError,
    TerrainPlugin, TerrainSettings, TerrainSurface,
};

fn fixed(width: usize, height: usize, seed: i32) -> TerrainSettings {
    TerrainSettings {
        width,
        height,
        ..TerrainSettings::with_seed(seed)
    }
}

// ---------------------------------------------------------------------------
// 1. Determinism and shape
// ---------------------------------------------------------------------------

#[test]
fn test_repeated_runs_bit_identical() {
    let settings = TerrainSettings {
        noise: NoiseParameters {
            octaves: 5,
            lacunarity: 2.3,
            persistence: 0.45,
            ..NoiseParameters::default()
        },
        smoothing: SmoothingConfig {
            enabled: true,
            iterations: 2,
        },
        ..fixed(64, 48, 1337)
    };
    let a = generate_heightmap(&settings).expect("valid settings");
    let b = generate_heightmap(&settings).expect("valid settings");
    let bits = |h: &Heightmap| h.grid.values().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn test_shape_matches_request() {
    for (w, h) in [(2, 2), (2, 9), (9, 2), (31, 17), (100, 100)] {
        let hm = generate_heightmap(&fixed(w, h, 3)).expect("valid settings");
        assert_eq!((hm.grid.width, hm.grid.height), (w, h));
        assert_eq!(hm.grid.values().len(), w * h);
    }
}

#[test]
fn test_default_shape_values_bounded() {
    // 3 octaves at persistence 0.5 sum to at most 1.75.
    let hm = generate_heightmap(&fixed(100, 100, 0)).expect("valid settings");
    let (lo, hi) = hm.grid.min_max().expect("non-empty grid");
    assert!(lo >= 0.0, "min {lo}");
    assert!(hi <= 1.75 + 1e-5, "max {hi}");
    assert!(hi > lo, "noise produced a flat grid");
}

#[test]
fn test_neighbouring_cells_are_close() {
    // Coherent noise: a fine grid over a small domain has no large jumps.
    let settings = TerrainSettings {
        noise: NoiseParameters {
            scale: 2.0,
            octaves: 1,
            ..NoiseParameters::default()
        },
        ..fixed(128, 128, 9)
    };
    let hm = generate_heightmap(&settings).expect("valid settings");
    for y in 0..hm.grid.height {
        for x in 0..hm.grid.width - 1 {
            let d = (hm.grid.get(x + 1, y) - hm.grid.get(x, y)).abs();
            assert!(d < 0.1, "jump of {d} at ({x}, {y})");
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Validation gate
// ---------------------------------------------------------------------------

#[test]
fn test_thin_grids_refused() {
    assert!(matches!(
        generate_heightmap(&fixed(1, 10, 0)),
        Err(TerrainError::InvalidDimensions { width: 1, .. })
    ));
    assert!(matches!(
        generate_heightmap(&fixed(10, 1, 0)),
        Err(TerrainError::InvalidDimensions { height: 1, .. })
    ));
}

#[test]
fn test_permissive_parameters_accepted() {
    let settings = TerrainSettings {
        noise: NoiseParameters {
            scale: 500.0,
            offset_x: -1.0e4,
            offset_y: -250.0,
            octaves: 8,
            lacunarity: 0.5,
            persistence: 1.5,
        },
        ..fixed(16, 16, 4)
    };
    let hm = generate_heightmap(&settings).expect("extreme shape is accepted");
    assert!(hm.grid.values().iter().all(|v| v.is_finite()));
}

// ---------------------------------------------------------------------------
// 3. Smoothing on generated terrain
// ---------------------------------------------------------------------------

#[test]
fn test_smoothing_keeps_generated_border() {
    let raw = generate_heightmap(&fixed(40, 30, 12)).expect("valid settings");
    let smoothed = smooth(raw.grid.clone(), 10);
    let (w, h) = (raw.grid.width, raw.grid.height);
    for x in 0..w {
        assert_eq!(smoothed.get(x, 0), raw.grid.get(x, 0));
        assert_eq!(smoothed.get(x, h - 1), raw.grid.get(x, h - 1));
    }
    for y in 0..h {
        assert_eq!(smoothed.get(0, y), raw.grid.get(0, y));
        assert_eq!(smoothed.get(w - 1, y), raw.grid.get(w - 1, y));
    }
}

// ---------------------------------------------------------------------------
// 4. Plugin wiring
// ---------------------------------------------------------------------------

#[test]
fn test_plugin_publishes_heightmap_and_surface() {
    let settings = TerrainSettings {
        texture_tiling: 2.0,
        ..fixed(33, 17, 42)
    };
    let expected = generate_heightmap(&settings).expect("valid settings");

    let mut app = App::new();
    app.insert_resource(settings).add_plugins(TerrainPlugin);
    app.update();

    let heightmap = app
        .world()
        .get_resource::<Heightmap>()
        .expect("heightmap inserted at startup");
    assert_eq!(*heightmap, expected);

    let surface = app
        .world()
        .get_resource::<TerrainSurface>()
        .expect("surface inserted at startup");
    assert_eq!(surface.size, Vec3::new(33.0, 20.0, 17.0));
    assert_eq!(surface.texture_tiling, Vec2::splat(2.0));
}

#[test]
fn test_plugin_refuses_invalid_settings() {
    let mut app = App::new();
    app.insert_resource(fixed(1, 1, 0)).add_plugins(TerrainPlugin);
    app.update();

    assert!(app.world().get_resource::<Heightmap>().is_none());
    assert!(app.world().get_resource::<TerrainSurface>().is_none());
}

#[test]
fn test_plugin_defaults_without_settings() {
    let mut app = App::new();
    app.add_plugins(TerrainPlugin);
    app.update();

    let heightmap = app
        .world()
        .get_resource::<Heightmap>()
        .expect("default settings are valid");
    assert_eq!((heightmap.grid.width, heightmap.grid.height), (100, 100));
    assert!(heightmap.seed >= 0);
}

// ---------------------------------------------------------------------------
// 5. Preview and serialization
// ---------------------------------------------------------------------------

#[test]
fn test_preview_of_generated_terrain() {
    let hm = generate_heightmap(&fixed(128, 64, 5)).expect("valid settings");
    let full = render_ascii(&hm.grid, 128);
    assert_eq!(full.lines().count(), 64);
    assert!(full.contains('@'), "highest cell should use the top ramp char");
    assert!(full.contains(' '), "lowest cell should use the bottom ramp char");

    let half = render_ascii(&hm.grid, 64);
    assert_eq!(half.lines().count(), 32);
    assert!(half.lines().all(|l| l.chars().count() == 64));
}

#[test]
fn test_heightmap_json_roundtrip() {
    let hm = generate_heightmap(&fixed(6, 5, 77)).expect("valid settings");
    let json = serde_json::to_string(&hm).expect("serialize heightmap");
    let back: Heightmap = serde_json::from_str(&json).expect("deserialize heightmap");
    assert_eq!(back.seed, hm.seed);
    assert_eq!((back.grid.width, back.grid.height), (6, 5));
    for (a, b) in back.grid.values().iter().zip(hm.grid.values()) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }
}
