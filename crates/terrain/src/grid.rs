use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Dense row-major grid of elevation samples.
///
/// Deserialization goes through `from_values`, so a JSON grid whose sample
/// count disagrees with its dimensions is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct ElevationGrid {
    pub width: usize,
    pub height: usize,
    values: Vec<f32>,
}

impl ElevationGrid {
    /// Grid with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            values: vec![value; width * height],
        }
    }

    pub fn from_values(
        width: usize,
        height: usize,
        values: Vec<f32>,
    ) -> Result<Self, TerrainError> {
        if width.checked_mul(height) != Some(values.len()) {
            return Err(TerrainError::ValueCountMismatch {
                width,
                height,
                found: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let idx = self.index(x, y);
        self.values[idx] = value;
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.values[start..start + self.width]
    }

    /// True for cells on any of the four outer edges.
    #[inline]
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// `(min, max)` over all samples, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut iter = self.values.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn mean(&self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.values.iter().map(|&v| v as f64).sum();
        (sum / self.values.len() as f64) as f32
    }
}

/// Unchecked wire shape of `ElevationGrid`.
#[derive(Deserialize)]
struct GridData {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl TryFrom<GridData> for ElevationGrid {
    type Error = TerrainError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        ElevationGrid::from_values(data.width, data.height, data.values)
    }
}
