//! File-backed simulation configuration (TOML).

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ocean::{invalid, GridSize, WaveParams, DEFAULT_HEIGHT_DIVISOR};
use crate::error::{OceanError, Result};
use crate::ocean::GerstnerWaves;

/// Everything needed to build an `OceanSurface`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Divisor applied to reconstructed heights
    pub height_divisor: f32,

    /// Seed for the Gaussian source (random if absent)
    pub seed: Option<u64>,

    pub grid: GridSize,

    pub waves: WaveParams,

    /// Gerstner overlay handed to the shading stage
    pub gerstner: GerstnerWaves,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            height_divisor: DEFAULT_HEIGHT_DIVISOR,
            seed: None,
            grid: GridSize::default(),
            waves: WaveParams::default(),
            gerstner: GerstnerWaves::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.waves.validate()?;
        validate_height_divisor(self.height_divisor)?;
        self.gerstner.validate()
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| OceanError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|source| OceanError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse and validate; missing fields fall back to defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub(crate) fn validate_height_divisor(divisor: f32) -> Result<()> {
    if !divisor.is_finite() || divisor == 0.0 {
        return Err(invalid(
            "height divisor",
            divisor,
            "must be finite and non-zero",
        ));
    }
    Ok(())
}
