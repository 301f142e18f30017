//! Grid buffers: planar complex fields and the real-valued height output.
//!
//! All grids are x-major: cell `(x, z)` is stored at `x * height + z`.

use crate::error::{OceanError, Result};
use crate::fft::alloc_zeroed;
use crate::params::GridSize;

/// Frequency-domain grid stored as separate real and imaginary planes
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexField {
    size: GridSize,
    re: Vec<f32>,
    im: Vec<f32>,
}

impl ComplexField {
    pub fn zeroed(size: GridSize) -> Result<Self> {
        Ok(Self {
            size,
            re: zeroed_cells(size)?,
            im: zeroed_cells(size)?,
        })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn index(&self, x: usize, z: usize) -> usize {
        x * self.size.height + z
    }

    /// `(real, imaginary)` at cell `(x, z)`
    pub fn get(&self, x: usize, z: usize) -> (f32, f32) {
        let i = self.index(x, z);
        (self.re[i], self.im[i])
    }

    pub fn set(&mut self, x: usize, z: usize, value: (f32, f32)) {
        let i = self.index(x, z);
        self.re[i] = value.0;
        self.im[i] = value.1;
    }

    pub fn real(&self) -> &[f32] {
        &self.re
    }

    pub fn imag(&self) -> &[f32] {
        &self.im
    }

    /// Both planes at once, for feeding the FFT
    pub(crate) fn planes_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (self.re.as_mut_slice(), self.im.as_mut_slice())
    }
}

/// Summary statistics of a height grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub variance: f32,
}

/// Real-valued surface heights, rewritten every evolution step
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    size: GridSize,
    values: Vec<f32>,
}

impl HeightGrid {
    pub fn zeroed(size: GridSize) -> Result<Self> {
        Ok(Self {
            size,
            values: zeroed_cells(size)?,
        })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    pub fn get(&self, x: usize, z: usize) -> f32 {
        self.values[x * self.size.height + z]
    }

    /// Heights in vertex order (`x * height + z`)
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.values
    }

    pub fn stats(&self) -> HeightStats {
        let n = self.values.len() as f64;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;

        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
            sum_sq += v as f64 * v as f64;
        }

        let mean = sum / n;
        HeightStats {
            min,
            max,
            mean: mean as f32,
            variance: (sum_sq / n - mean * mean).max(0.0) as f32,
        }
    }
}

fn zeroed_cells(size: GridSize) -> Result<Vec<f32>> {
    let cells = size.cells();
    alloc_zeroed(cells).map_err(|_| OceanError::Allocation(cells))
}
