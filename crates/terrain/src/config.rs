pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 100;
pub const DEFAULT_SCALE: f32 = 20.0;
pub const DEFAULT_OFFSET_X: f32 = 100.0;
pub const DEFAULT_OFFSET_Y: f32 = 100.0;
pub const DEFAULT_OCTAVES: u32 = 3;
pub const DEFAULT_LACUNARITY: f32 = 2.0;
pub const DEFAULT_PERSISTENCE: f32 = 0.5;
pub const DEFAULT_MAX_OFFSET: f32 = 100.0;
pub const DEFAULT_SMOOTH_ITERATIONS: u32 = 5;
pub const DEFAULT_TEXTURE_TILING: f32 = 1.0;

/// Smallest accepted grid side. Domain mapping divides by `side - 1`.
pub const MIN_GRID_SIDE: usize = 2;

/// Frequency handed to the base noise primitive. Octave frequencies are
/// applied to the coordinates before sampling, so the primitive runs at 1.
pub const BASE_NOISE_FREQUENCY: f32 = 1.0;

/// Column budget for the ASCII preview printed by the CLI.
pub const PREVIEW_COLUMNS: usize = 64;
