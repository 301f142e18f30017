//! Gerstner (trochoidal) wave overlay descriptors.
//!
//! These are handed to the shading stage as-is; the FFT pipeline never sums
//! them into the height grid.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{OceanError, Result};

/// Capacity of the overlay uniform block
pub const MAX_GERSTNER_WAVES: usize = 10;

/// One deterministic trochoidal wave
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct GerstnerWave {
    /// Travel direction (XYZ, Y usually 0)
    pub direction: [f32; 3],
    pub amplitude: f32,
    /// Radians per second
    pub angular_frequency: f32,
    pub wavelength: f32,
    pub phase_shift: f32,
}

impl Default for GerstnerWave {
    fn default() -> Self {
        Self {
            direction: [0.9, 0.0, 0.2],
            amplitude: 0.905,
            angular_frequency: 10.28,
            wavelength: 100.141593,
            phase_shift: 5.0,
        }
    }
}

/// GPU-ready block: fixed slots plus live count and enable flag
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct GerstnerUniform {
    pub waves: [GerstnerWave; MAX_GERSTNER_WAVES],
    pub count: u32,
    pub enabled: u32,
    pub _padding: [u32; 2],
}

/// Overlay configuration: up to `MAX_GERSTNER_WAVES` waves, disabled by default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GerstnerWaves {
    pub enabled: bool,
    pub waves: Vec<GerstnerWave>,
}

impl Default for GerstnerWaves {
    fn default() -> Self {
        Self {
            enabled: false,
            waves: vec![GerstnerWave::default()],
        }
    }
}

impl GerstnerWaves {
    pub fn empty() -> Self {
        Self {
            enabled: false,
            waves: Vec::new(),
        }
    }

    pub fn push(&mut self, wave: GerstnerWave) -> Result<()> {
        if self.waves.len() >= MAX_GERSTNER_WAVES {
            return Err(OceanError::TooManyGerstnerWaves {
                max: MAX_GERSTNER_WAVES,
            });
        }
        self.waves.push(wave);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.waves.len() > MAX_GERSTNER_WAVES {
            return Err(OceanError::TooManyGerstnerWaves {
                max: MAX_GERSTNER_WAVES,
            });
        }
        Ok(())
    }

    /// Pack into the fixed-size uniform layout; unused slots are zeroed
    pub fn to_uniform(&self) -> GerstnerUniform {
        let mut uniform = GerstnerUniform::zeroed();
        let count = self.waves.len().min(MAX_GERSTNER_WAVES);
        uniform.waves[..count].copy_from_slice(&self.waves[..count]);
        uniform.count = count as u32;
        uniform.enabled = self.enabled as u32;
        uniform
    }
}
