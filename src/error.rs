//! Error types for the FFT engine and the ocean simulation.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by the radix-2 FFT engine.
///
/// Every variant is detected before any buffer is touched, so a failed
/// call leaves its inputs unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    #[error("FFT length must be a power of two, got {0}")]
    NotPowerOfTwo(usize),

    #[error("real and imaginary buffers differ in length ({real} vs {imag})")]
    LengthMismatch { real: usize, imag: usize },

    #[error("2D FFT expects {expected} samples per plane, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("failed to allocate FFT scratch buffer of {0} samples")]
    ScratchAllocation(usize),

    #[error("{width}x{height} grid exceeds the addressable sample count")]
    GridTooLarge { width: usize, height: usize },
}

/// Errors surfaced by the ocean simulation and its configuration layer.
#[derive(Error, Debug)]
pub enum OceanError {
    #[error("grid {axis} must be a power of two, got {value}")]
    GridNotPowerOfTwo { axis: &'static str, value: usize },

    #[error("{width}x{height} grid has more cells than can be addressed")]
    GridTooLarge { width: usize, height: usize },

    #[error("invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("at most {max} Gerstner waves are supported")]
    TooManyGerstnerWaves { max: usize },

    #[error("failed to allocate grid buffer of {0} cells")]
    Allocation(usize),

    #[error(transparent)]
    Fft(#[from] FftError),

    #[error("failed to access config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to write heightmap image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = OceanError> = std::result::Result<T, E>;
