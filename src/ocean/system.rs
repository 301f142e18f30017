//! High-level ocean surface: owns parameters, spectrum and per-tick buffers.

use super::evolution::Reconstructor;
use super::field::HeightGrid;
use super::gerstner::{GerstnerUniform, GerstnerWaves};
use super::synthesis::{synthesize, InitialSpectrum};
use crate::error::Result;
use crate::gaussian::GaussianSampler;
use crate::params::{validate_height_divisor, GridSize, SimulationConfig, WaveParams};

/// One simulated ocean patch.
///
/// Parameter changes go through the setters, which validate and then
/// resynthesise `h0` synchronously; `update` advances to a given time.
/// Neither entry point is safe to call concurrently (`&mut self`).
///
/// The Gaussian source is re-seeded from `seed` on every synthesis, so the
/// initial field depends only on (grid size, wave parameters, seed).
#[derive(Debug)]
pub struct OceanSurface {
    size: GridSize,
    params: WaveParams,
    seed: u64,
    height_divisor: f32,
    gerstner: GerstnerWaves,
    spectrum: InitialSpectrum,
    reconstructor: Reconstructor,
    heights: HeightGrid,
}

impl OceanSurface {
    /// Build the surface and synthesise its initial field
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let size = config.grid;

        let spectrum = synthesize(size, &config.waves, &mut GaussianSampler::seeded(seed))?;
        let reconstructor = Reconstructor::new(size)?;
        let heights = HeightGrid::zeroed(size)?;

        log::info!("Ocean surface ready ({}x{}, seed {})", size.width, size.height, seed);

        Ok(Self {
            size,
            params: config.waves,
            seed,
            height_divisor: config.height_divisor,
            gerstner: config.gerstner,
            spectrum,
            reconstructor,
            heights,
        })
    }

    /// Advance to `time_s` and return the refreshed height grid
    pub fn update(&mut self, time_s: f32) -> Result<&HeightGrid> {
        self.reconstructor
            .step(&self.spectrum, time_s, self.height_divisor, &mut self.heights)?;
        Ok(&self.heights)
    }

    /// Heights from the last `update` (all zero before the first one)
    pub fn heights(&self) -> &HeightGrid {
        &self.heights
    }

    pub fn spectrum(&self) -> &InitialSpectrum {
        &self.spectrum
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn height_divisor(&self) -> f32 {
        self.height_divisor
    }

    pub fn wind_speed_x(&self) -> f32 {
        self.params.wind_speed_x
    }

    pub fn wind_speed_z(&self) -> f32 {
        self.params.wind_speed_z
    }

    pub fn phillips_constant(&self) -> f32 {
        self.params.phillips_constant
    }

    pub fn gravity(&self) -> f32 {
        self.params.gravity
    }

    pub fn set_wind_speed_x(&mut self, value: f32) -> Result<()> {
        self.set_wave_params(WaveParams {
            wind_speed_x: value,
            ..self.params
        })
    }

    pub fn set_wind_speed_z(&mut self, value: f32) -> Result<()> {
        self.set_wave_params(WaveParams {
            wind_speed_z: value,
            ..self.params
        })
    }

    pub fn set_phillips_constant(&mut self, value: f32) -> Result<()> {
        self.set_wave_params(WaveParams {
            phillips_constant: value,
            ..self.params
        })
    }

    pub fn set_gravity(&mut self, value: f32) -> Result<()> {
        self.set_wave_params(WaveParams {
            gravity: value,
            ..self.params
        })
    }

    /// Replace all wave parameters at once and resynthesise.
    ///
    /// On error the previous parameters and spectrum stay in place.
    pub fn set_wave_params(&mut self, params: WaveParams) -> Result<()> {
        let spectrum = self.synthesize_with(self.size, &params, self.seed)?;
        self.params = params;
        self.spectrum = spectrum;
        Ok(())
    }

    /// Pick a new random sea state under the same parameters
    pub fn reseed(&mut self, seed: u64) -> Result<()> {
        let spectrum = self.synthesize_with(self.size, &self.params, seed)?;
        self.seed = seed;
        self.spectrum = spectrum;
        Ok(())
    }

    /// Change grid dimensions, rebuilding every buffer and the FFT scratch
    pub fn resize(&mut self, size: GridSize) -> Result<()> {
        let spectrum = self.synthesize_with(size, &self.params, self.seed)?;
        let reconstructor = Reconstructor::new(size)?;
        let heights = HeightGrid::zeroed(size)?;

        self.size = size;
        self.spectrum = spectrum;
        self.reconstructor = reconstructor;
        self.heights = heights;
        Ok(())
    }

    pub fn set_height_divisor(&mut self, divisor: f32) -> Result<()> {
        validate_height_divisor(divisor)?;
        self.height_divisor = divisor;
        Ok(())
    }

    pub fn gerstner(&self) -> &GerstnerWaves {
        &self.gerstner
    }

    pub fn set_gerstner_enabled(&mut self, enabled: bool) {
        self.gerstner.enabled = enabled;
    }

    pub fn gerstner_uniform(&self) -> GerstnerUniform {
        self.gerstner.to_uniform()
    }

    fn synthesize_with(
        &self,
        size: GridSize,
        params: &WaveParams,
        seed: u64,
    ) -> Result<InitialSpectrum> {
        synthesize(size, params, &mut GaussianSampler::seeded(seed)).inspect_err(|e| {
            log::warn!("Rejected ocean parameter change: {}", e);
        })
    }
}
