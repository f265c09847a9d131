//! Seeded fractal noise sampled at continuous 2D coordinates.
//!
//! The base primitive is Perlin gradient noise from `fastnoise-lite`. It is
//! continuous over the domain and a pure function of `(seed, x, y)`, so the
//! traversal order of the grid never changes the result and rows can be
//! sampled from several threads against one shared `NoiseField`.
//!
//! Gradient noise is 0 on the integer lattice for every seed. Coordinates that
//! land on whole numbers, as every corner of a grid does with integer offsets
//! and scale, therefore sample the same value whatever the seed. A 2x2 grid
//! with the default settings is all lattice corners and does not vary.

use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::config::BASE_NOISE_FREQUENCY;
use crate::settings::NoiseParameters;

/// Explicit noise generator built once per run from the resolved seed.
pub struct NoiseField {
    noise: FastNoiseLite,
}

impl NoiseField {
    pub fn new(seed: i32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(BASE_NOISE_FREQUENCY));
        Self { noise }
    }

    /// Single octave of the base primitive, remapped to [0, 1].
    #[inline]
    pub fn base(&self, x: f32, y: f32) -> f32 {
        let raw = self.noise.get_noise_2d(x, y);
        // Perlin outputs in [-1, 1]; normalize to [0, 1]
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Sum of `params.octaves` octaves of the base primitive. Frequency grows
    /// by `lacunarity` and amplitude by `persistence` per octave. The sum is
    /// not renormalized. An octave count of 0 samples one octave.
    pub fn sample(&self, x: f32, y: f32, params: &NoiseParameters) -> f32 {
        let mut value = 0.0_f32;
        let mut frequency = 1.0_f32;
        let mut amplitude = 1.0_f32;

        for _ in 0..params.octaves.max(1) {
            value += self.base(x * frequency, y * frequency) * amplitude;
            frequency *= params.lacunarity;
            amplitude *= params.persistence;
        }

        value
    }
}
