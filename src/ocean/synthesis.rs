//! Initial frequency-domain height field `h0(k)` built from the Phillips spectrum.

use std::f32::consts::{FRAC_1_SQRT_2, TAU};

use glam::Vec2;

use super::field::ComplexField;
use crate::error::{OceanError, Result};
use crate::gaussian::{GaussianSampler, UniformSource};
use crate::params::{GridSize, WaveParams};
use crate::spectrum::phillips;

/// Per-cell wavevector `k` and angular frequency `ω(k) = sqrt(|k|·g)`.
///
/// Depends only on the grid size and gravity; rebuilt whenever either changes.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveVectorField {
    size: GridSize,
    wavevectors: Vec<Vec2>,
    angular_frequencies: Vec<f32>,
}

impl WaveVectorField {
    pub fn build(size: GridSize, gravity: f32) -> Result<Self> {
        let cells = size.cells();
        let mut wavevectors = Vec::new();
        let mut angular_frequencies = Vec::new();
        wavevectors
            .try_reserve_exact(cells)
            .map_err(|_| OceanError::Allocation(cells))?;
        angular_frequencies
            .try_reserve_exact(cells)
            .map_err(|_| OceanError::Allocation(cells))?;

        for x in 0..size.width {
            for z in 0..size.height {
                let k = Vec2::new(
                    TAU * x as f32 / size.width as f32,
                    TAU * z as f32 / size.height as f32,
                );
                wavevectors.push(k);
                angular_frequencies.push((k.length() * gravity).sqrt());
            }
        }

        Ok(Self {
            size,
            wavevectors,
            angular_frequencies,
        })
    }

    pub fn wavevector(&self, x: usize, z: usize) -> Vec2 {
        self.wavevectors[x * self.size.height + z]
    }

    pub fn angular_frequency(&self, x: usize, z: usize) -> f32 {
        self.angular_frequencies[x * self.size.height + z]
    }

    pub(crate) fn angular_frequencies(&self) -> &[f32] {
        &self.angular_frequencies
    }
}

/// Result of a full synthesis pass: the dispersion cache and `h0`.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialSpectrum {
    pub waves: WaveVectorField,
    pub h0: ComplexField,
}

/// Build `h0` over the whole grid.
///
/// Every cell is populated (not just a half-plane), because evolution reads
/// each bin together with its mirrored partner `[W-1-x][H-1-z]`. One Gaussian
/// pair is drawn per cell in x-major order, the zero bin included, so a
/// given sampler state always produces the same field.
///
/// ```text
/// h0(k) = (g1, g2) · sqrt(P(k)) / √2
/// ```
///
/// The result is built into fresh buffers; callers swap it in only once it
/// is complete.
pub fn synthesize<S: UniformSource>(
    size: GridSize,
    params: &WaveParams,
    sampler: &mut GaussianSampler<S>,
) -> Result<InitialSpectrum> {
    size.validate()?;
    params.validate()?;

    let waves = WaveVectorField::build(size, params.gravity)?;
    let mut h0 = ComplexField::zeroed(size)?;

    for x in 0..size.width {
        for z in 0..size.height {
            let k = waves.wavevector(x, z);
            let (g1, g2) = sampler.sample_pair();

            let energy = if k.length() == 0.0 {
                0.0
            } else {
                phillips(k, params)
            };
            let amplitude = energy.sqrt() * FRAC_1_SQRT_2;

            h0.set(x, z, (g1 * amplitude, g2 * amplitude));
        }
    }

    log::info!(
        "Synthesized {}x{} initial height field (wind=({}, {}), A={}, g={})",
        size.width,
        size.height,
        params.wind_speed_x,
        params.wind_speed_z,
        params.phillips_constant,
        params.gravity
    );

    Ok(InitialSpectrum { waves, h0 })
}
