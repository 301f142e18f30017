//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::params::{GridSize, SimulationConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavefield")]
#[command(about = "Headless FFT ocean height-field simulator", long_about = None)]
pub struct Args {
    /// TOML config file (flags below override its values)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Grid cells along X (power of 2)
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid cells along Z (power of 2)
    #[arg(long)]
    pub height: Option<usize>,

    /// Wind speed along X (m/s)
    #[arg(long, value_name = "M_PER_S", allow_negative_numbers = true)]
    pub wind_x: Option<f32>,

    /// Wind speed along Z (m/s)
    #[arg(long, value_name = "M_PER_S", allow_negative_numbers = true)]
    pub wind_z: Option<f32>,

    /// Phillips constant (spectrum energy scale)
    #[arg(long)]
    pub phillips: Option<f32>,

    /// Gravity constant (m/s²)
    #[arg(long)]
    pub gravity: Option<f32>,

    /// Seed for the Gaussian source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of animation ticks to simulate
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Time step between ticks (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Write the final frame as a grayscale PNG
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Write the effective configuration as TOML
    #[arg(long, value_name = "PATH")]
    pub save_config: Option<PathBuf>,
}

impl Args {
    /// Build the effective configuration: file (or defaults), then flag overrides
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load_from_file(path)?,
            None => SimulationConfig::default(),
        };

        config.grid = GridSize::new(
            self.width.unwrap_or(config.grid.width),
            self.height.unwrap_or(config.grid.height),
        );
        if let Some(wind_x) = self.wind_x {
            config.waves.wind_speed_x = wind_x;
        }
        if let Some(wind_z) = self.wind_z {
            config.waves.wind_speed_z = wind_z;
        }
        if let Some(phillips) = self.phillips {
            config.waves.phillips_constant = phillips;
        }
        if let Some(gravity) = self.gravity {
            config.waves.gravity = gravity;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}
