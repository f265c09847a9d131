//! Host-facing description of the surface built from a heightmap.
//!
//! Meshing, collider construction and texturing belong to the host. This
//! resource carries the numbers it needs to size them consistently with the
//! grid: world extent, per-sample collider scale, collider centre and the
//! texture tile size.

use bevy::prelude::*;

use crate::heightmap::Heightmap;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TerrainSurface {
    /// World extent: grid width, vertical scale, grid height.
    pub size: Vec3,
    /// Scale of one heightmap sample in world units.
    pub collider_scale: Vec3,
    pub collider_center: Vec3,
    pub texture_tiling: Vec2,
}

impl TerrainSurface {
    /// Describe the surface for `heightmap`, using the noise `scale` as the
    /// vertical extent.
    pub fn from_heightmap(heightmap: &Heightmap, vertical_scale: f32, texture_tiling: f32) -> Self {
        let width = heightmap.grid.width as f32;
        let height = heightmap.grid.height as f32;
        let size = Vec3::new(width, vertical_scale, height);
        // Grids are at least 2x2, so neither divisor is zero.
        let collider_scale = Vec3::new(size.x / (width - 1.0), size.y, size.z / (height - 1.0));
        Self {
            size,
            collider_scale,
            collider_center: size * 0.5,
            texture_tiling: Vec2::splat(texture_tiling),
        }
    }
}
