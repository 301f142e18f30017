//! Phillips spectrum: directional energy density of wind-driven waves.

use glam::Vec2;

use crate::params::WaveParams;

/// Phillips energy density `P(k)` for wavevector `k`.
///
/// ```text
/// L    = |W|² / g
/// P(k) = A · exp(-1 / (|k|² L²)) / |k|⁴ · (k · W)²
/// ```
///
/// The formula diverges at `k = 0`; that bin carries no energy and this
/// returns exactly `0.0` for it. No small-wave damping or directional
/// cutoff is applied.
pub fn phillips(k: Vec2, params: &WaveParams) -> f32 {
    let k_squared = k.length_squared();
    if k_squared == 0.0 {
        return 0.0;
    }

    let wind = params.wind();
    // Largest wave arising from a continuous wind of this speed
    let l = wind.length_squared() / params.gravity;
    // Suppresses waves moving perpendicular to the wind
    let alignment = k.dot(wind);

    params.phillips_constant * (-1.0 / (k_squared * l * l)).exp() / (k_squared * k_squared)
        * alignment
        * alignment
}
