//! Input bundle for a generation run.
//!
//! `TerrainSettings` is what a host fills in (directly, through a Bevy
//! resource, or from JSON). Missing JSON fields fall back to the defaults in
//! `config.rs`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_HEIGHT, DEFAULT_LACUNARITY, DEFAULT_MAX_OFFSET, DEFAULT_OCTAVES, DEFAULT_OFFSET_X,
    DEFAULT_OFFSET_Y, DEFAULT_PERSISTENCE, DEFAULT_SCALE, DEFAULT_SMOOTH_ITERATIONS,
    DEFAULT_TEXTURE_TILING, DEFAULT_WIDTH, MIN_GRID_SIDE,
};
use crate::error::TerrainError;

// ---------------------------------------------------------------------------
// Noise shape
// ---------------------------------------------------------------------------

/// Fractal noise shape, immutable for the duration of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParameters {
    /// Domain stretch applied to normalized grid coordinates.
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub octaves: u32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier per octave. Values outside [0, 1] are allowed.
    pub persistence: f32,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
            octaves: DEFAULT_OCTAVES,
            lacunarity: DEFAULT_LACUNARITY,
            persistence: DEFAULT_PERSISTENCE,
        }
    }
}

/// Amplitude of each octave, in sampling order.
pub fn octave_amplitudes(params: &NoiseParameters) -> Vec<f32> {
    let mut amplitude = 1.0_f32;
    let mut out = Vec::with_capacity(params.octaves.max(1) as usize);
    for _ in 0..params.octaves.max(1) {
        out.push(amplitude);
        amplitude *= params.persistence;
    }
    out
}

// ---------------------------------------------------------------------------
// Seed, offset jitter, smoothing
// ---------------------------------------------------------------------------

/// How the noise seed is chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedState {
    /// Draw a fresh nonnegative seed from OS entropy.
    Random,
    Fixed(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    pub enabled: bool,
    pub iterations: u32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            iterations: DEFAULT_SMOOTH_ITERATIONS,
        }
    }
}

impl SmoothingConfig {
    /// Number of passes that will actually run.
    pub fn effective_iterations(&self) -> u32 {
        if self.enabled {
            self.iterations
        } else {
            0
        }
    }
}

/// Replaces the configured domain offsets with seeded random ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetJitter {
    pub enabled: bool,
    /// Offsets are drawn from `[-|max_offset|, |max_offset|]`. A non-finite
    /// value leaves the configured offsets in place.
    pub max_offset: f32,
}

impl Default for OffsetJitter {
    fn default() -> Self {
        Self {
            enabled: false,
            max_offset: DEFAULT_MAX_OFFSET,
        }
    }
}

// ---------------------------------------------------------------------------
// TerrainSettings resource
// ---------------------------------------------------------------------------

/// Complete configuration for one heightmap generation run.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    pub width: usize,
    pub height: usize,
    pub noise: NoiseParameters,
    pub use_random_seed: bool,
    /// Used when `use_random_seed` is false.
    pub seed: i32,
    pub offset_jitter: OffsetJitter,
    pub smoothing: SmoothingConfig,
    /// Tile size of the surface texture, forwarded to the host untouched.
    pub texture_tiling: f32,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            noise: NoiseParameters::default(),
            use_random_seed: true,
            seed: 0,
            offset_jitter: OffsetJitter::default(),
            smoothing: SmoothingConfig::default(),
            texture_tiling: DEFAULT_TEXTURE_TILING,
        }
    }
}

impl TerrainSettings {
    /// Settings for a fixed-seed run with every other field at its default.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            use_random_seed: false,
            seed,
            ..Self::default()
        }
    }

    pub fn seed_state(&self) -> SeedState {
        if self.use_random_seed {
            SeedState::Random
        } else {
            SeedState::Fixed(self.seed)
        }
    }

    /// Reject configurations that cannot produce a grid. Everything else,
    /// including extreme persistence or negative offsets, is accepted.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.width < MIN_GRID_SIDE || self.height < MIN_GRID_SIDE {
            return Err(TerrainError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.noise.octaves == 0 {
            return Err(TerrainError::ZeroOctaves);
        }
        Ok(())
    }
}
