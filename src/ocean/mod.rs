//! Tessendorf-style ocean surface: spectrum synthesis, time evolution and
//! FFT reconstruction of a height grid.

mod evolution;
mod field;
mod gerstner;
mod synthesis;
mod system;

// Re-export public types
pub use evolution::{evolve_spectrum, Reconstructor};
pub use field::{ComplexField, HeightGrid, HeightStats};
pub use gerstner::{GerstnerUniform, GerstnerWave, GerstnerWaves, MAX_GERSTNER_WAVES};
pub use synthesis::{synthesize, InitialSpectrum, WaveVectorField};
pub use system::OceanSurface;
