//! Wind-wave physics parameters and grid dimensions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{OceanError, Result};

/// Output divisor applied to reconstructed heights.
///
/// Empirical visual-amplitude scale, not a physical constant.
pub const DEFAULT_HEIGHT_DIVISOR: f32 = 5.0;

/// Default grid resolution per side
pub const DEFAULT_GRID_SIZE: usize = 64;

/// Parameters that fully determine the wave spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Wind speed along X (m/s)
    pub wind_speed_x: f32,

    /// Wind speed along Z (m/s)
    pub wind_speed_z: f32,

    /// Phillips constant `A` (overall energy scale, dimensionless)
    pub phillips_constant: f32,

    /// Gravity constant `g` (m/s², default 2.0 rather than 9.81)
    pub gravity: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wind_speed_x: 10.0,
            wind_speed_z: 10.0,
            phillips_constant: 0.00008,
            gravity: 2.0,
        }
    }
}

impl WaveParams {
    /// Wind velocity as a vector in the XZ plane
    pub fn wind(&self) -> Vec2 {
        Vec2::new(self.wind_speed_x, self.wind_speed_z)
    }

    /// Validate parameters (finite values, positive gravity, etc.)
    pub fn validate(&self) -> Result<()> {
        if !self.wind_speed_x.is_finite() {
            return Err(invalid("wind speed X", self.wind_speed_x, "must be finite"));
        }
        if !self.wind_speed_z.is_finite() {
            return Err(invalid("wind speed Z", self.wind_speed_z, "must be finite"));
        }
        if !self.phillips_constant.is_finite() || self.phillips_constant < 0.0 {
            return Err(invalid(
                "Phillips constant",
                self.phillips_constant,
                "must be finite and non-negative",
            ));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(invalid("gravity", self.gravity, "must be finite and positive"));
        }
        Ok(())
    }
}

/// Simulation grid dimensions (cells per side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSize {
    /// Cells along X (must be power of 2)
    pub width: usize,

    /// Cells along Z (must be power of 2)
    pub height: usize,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
        }
    }
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    ///
    /// Saturates at `usize::MAX` for sizes that `validate` rejects, so a
    /// later allocation fails cleanly instead of wrapping.
    pub fn cells(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Validate dimensions (both sides must be power of 2 for the FFT, and
    /// the cell count must fit in `usize`)
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_power_of_two() {
            return Err(OceanError::GridNotPowerOfTwo {
                axis: "width",
                value: self.width,
            });
        }
        if !self.height.is_power_of_two() {
            return Err(OceanError::GridNotPowerOfTwo {
                axis: "height",
                value: self.height,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(OceanError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

pub(crate) fn invalid(name: &'static str, value: f32, reason: &'static str) -> OceanError {
    OceanError::InvalidParameter {
        name,
        value,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_are_valid() {
        assert!(WaveParams::default().validate().is_ok());
        assert!(GridSize::default().validate().is_ok());
        assert_eq!(GridSize::default().cells(), 64 * 64);
    }

    #[rstest]
    #[case(WaveParams { gravity: 0.0, ..WaveParams::default() })]
    #[case(WaveParams { gravity: -9.81, ..WaveParams::default() })]
    #[case(WaveParams { phillips_constant: -1.0, ..WaveParams::default() })]
    #[case(WaveParams { wind_speed_x: f32::NAN, ..WaveParams::default() })]
    #[case(WaveParams { wind_speed_z: f32::INFINITY, ..WaveParams::default() })]
    fn test_rejects_invalid_params(#[case] params: WaveParams) {
        assert!(matches!(
            params.validate(),
            Err(OceanError::InvalidParameter { .. })
        ));
    }

    #[rstest]
    #[case(100, 64, "width")]
    #[case(64, 0, "height")]
    #[case(48, 48, "width")]
    fn test_rejects_non_power_of_two_grid(
        #[case] width: usize,
        #[case] height: usize,
        #[case] expected_axis: &str,
    ) {
        match GridSize::new(width, height).validate() {
            Err(OceanError::GridNotPowerOfTwo { axis, .. }) => assert_eq!(axis, expected_axis),
            other => panic!("expected grid error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_grid_whose_cell_count_overflows() {
        let side = 1usize << (usize::BITS / 2);
        let size = GridSize::new(side, side);

        assert!(matches!(
            size.validate(),
            Err(OceanError::GridTooLarge { width, height }) if width == side && height == side
        ));
        assert_eq!(size.cells(), usize::MAX);
        assert!(GridSize::new(side, side / 2).validate().is_ok());
    }

    #[test]
    fn test_wind_vector() {
        let params = WaveParams {
            wind_speed_x: 3.0,
            wind_speed_z: -4.0,
            ..WaveParams::default()
        };
        assert_eq!(params.wind(), Vec2::new(3.0, -4.0));
    }
}
