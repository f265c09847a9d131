//! Seed resolution and seeded domain-offset jitter.
//!
//! Random seeds come from OS entropy and are recorded on the result so a run
//! can be replayed as a fixed-seed run. Everything derived from the seed uses
//! `ChaCha8Rng` so it is identical across platforms.

use bevy::log::warn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::settings::{NoiseParameters, OffsetJitter, SeedState};

/// Stream id for the offset jitter draws, kept apart from any other use of
/// the seed.
const OFFSET_STREAM: u64 = 0x0FF5_E7;

/// Turn a `SeedState` into the concrete seed used for this run.
pub fn resolve_seed(state: SeedState) -> i32 {
    match state {
        SeedState::Fixed(seed) => seed,
        SeedState::Random => rand::thread_rng().gen_range(0..=i32::MAX),
    }
}

/// Deterministic RNG for values derived from a resolved seed.
pub fn seeded_rng(seed: i32, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u32 as u64);
    rng.set_stream(stream);
    rng
}

/// Domain offsets for this run: the configured ones, or seeded draws from
/// `[-max_offset, max_offset]` when jitter is enabled.
///
/// A non-finite `max_offset` has no usable range; the configured offsets are
/// kept and a warning is logged.
pub fn resolve_offsets(seed: i32, params: &NoiseParameters, jitter: &OffsetJitter) -> (f32, f32) {
    if !jitter.enabled {
        return (params.offset_x, params.offset_y);
    }
    let max = jitter.max_offset.abs();
    if !max.is_finite() {
        warn!(
            "Offset jitter ignored: max_offset {} is not finite, keeping ({}, {})",
            jitter.max_offset, params.offset_x, params.offset_y
        );
        return (params.offset_x, params.offset_y);
    }
    // Scale a unit draw so the sampled range width can never overflow f32.
    let mut rng = seeded_rng(seed, OFFSET_STREAM);
    let x = max * rng.gen_range(-1.0_f32..=1.0);
    let y = max * rng.gen_range(-1.0_f32..=1.0);
    (x, y)
}
