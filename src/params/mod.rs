//! Parameter definitions with physical units and documented defaults.
//!
//! Tuning values (height divisor, default wind, gravity) are named here
//! rather than scattered through the simulation code.

mod config;
mod ocean;

// Re-export all types
pub use config::SimulationConfig;
pub(crate) use config::validate_height_divisor;
pub use ocean::{GridSize, WaveParams, DEFAULT_GRID_SIZE, DEFAULT_HEIGHT_DIVISOR};
