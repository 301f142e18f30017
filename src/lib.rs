//! Wavefield library - FFT ocean height-field simulation
//!
//! A Phillips spectrum is sampled once into a frequency-domain field, then
//! advanced by the deep-water dispersion relation and inverted with a
//! radix-2 FFT every tick to produce a grid of surface heights.

pub mod cli;
pub mod error;
pub mod fft;
pub mod gaussian;
pub mod ocean;
pub mod params;
pub mod snapshot;
pub mod spectrum;

pub use error::{FftError, OceanError};
pub use ocean::{HeightGrid, OceanSurface};
pub use params::{GridSize, SimulationConfig, WaveParams};
