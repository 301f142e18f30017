//! Time evolution of `h0` via the dispersion relation, and reconstruction of
//! spatial heights through the 2D inverse FFT.

use super::field::{ComplexField, HeightGrid};
use super::synthesis::InitialSpectrum;
use crate::error::{FftError, OceanError, Result};
use crate::fft::{Direction, Fft2d};
use crate::params::GridSize;

/// Advance `h0` to time `t`, writing the frequency-domain field into `out`.
///
/// Computes `h0(k)·e^{iωt} + h0(-k)·e^{-iωt}` per bin, with the mirrored
/// cell `[W-1-x][H-1-z]` standing in for `-k`.
///
/// Fails without writing if `out` and the spectrum differ in size.
pub fn evolve_spectrum(
    spectrum: &InitialSpectrum,
    time_s: f32,
    out: &mut ComplexField,
) -> Result<()> {
    let size = spectrum.h0.size();
    if out.size() != size {
        return Err(size_mismatch(size, out.size()));
    }

    let h0 = &spectrum.h0;
    let omegas = spectrum.waves.angular_frequencies();
    let (out_re, out_im) = out.planes_mut();

    for x in 0..size.width {
        for z in 0..size.height {
            let i = x * size.height + z;
            let (sin, cos) = (omegas[i] * time_s).sin_cos();
            let (re, im) = h0.get(x, z);
            let (mirror_re, mirror_im) = h0.get(size.width - 1 - x, size.height - 1 - z);

            out_re[i] = re * cos + im * sin + mirror_re * cos - mirror_im * sin;
            out_im[i] = im * cos + re * sin - mirror_im * cos - mirror_re * sin;
        }
    }
    Ok(())
}

fn size_mismatch(expected: GridSize, actual: GridSize) -> OceanError {
    FftError::BufferSize {
        expected: expected.cells(),
        actual: actual.cells(),
    }
    .into()
}

/// Owns the per-tick working set: evolved field and FFT scratch.
///
/// Allocated once per grid size and reused for every tick.
#[derive(Debug, Clone)]
pub struct Reconstructor {
    fft: Fft2d,
    evolved: ComplexField,
}

impl Reconstructor {
    pub fn new(size: GridSize) -> Result<Self> {
        let fft = Fft2d::new(size.width, size.height)?;
        let evolved = ComplexField::zeroed(size)?;
        Ok(Self { fft, evolved })
    }

    pub fn size(&self) -> GridSize {
        self.evolved.size()
    }

    /// Evolve to `time_s`, invert, and write `real / height_divisor` into `heights`.
    ///
    /// The imaginary part after inversion is discarded. Sizes are checked
    /// before anything is written, so a mismatch leaves `heights` untouched.
    pub fn step(
        &mut self,
        spectrum: &InitialSpectrum,
        time_s: f32,
        height_divisor: f32,
        heights: &mut HeightGrid,
    ) -> Result<()> {
        let size = self.size();
        for other in [spectrum.h0.size(), heights.size()] {
            if other != size {
                return Err(size_mismatch(size, other));
            }
        }

        evolve_spectrum(spectrum, time_s, &mut self.evolved)?;

        let (re, im) = self.evolved.planes_mut();
        self.fft.process(Direction::Inverse, re, im)?;

        for (height, &value) in heights.as_mut_slice().iter_mut().zip(self.evolved.real()) {
            *height = value / height_divisor;
        }

        log::debug!("Evolved {}x{} height field to t={:.3}s", size.width, size.height, time_s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaussian::GaussianSampler;
    use crate::ocean::synthesis::synthesize;
    use crate::params::{WaveParams, DEFAULT_HEIGHT_DIVISOR};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::TAU;

    fn reference_spectrum(size: GridSize, seed: u64) -> InitialSpectrum {
        synthesize(size, &WaveParams::default(), &mut GaussianSampler::seeded(seed)).unwrap()
    }

    /// Direct (non-fast) unscaled inverse 2D DFT, real part only, in f64
    fn naive_inverse_real(field: &ComplexField) -> Vec<f64> {
        let GridSize { width: w, height: h } = field.size();
        let (re, im) = (field.real(), field.imag());

        let mut a_re = vec![0.0f64; w * h];
        let mut a_im = vec![0.0f64; w * h];
        for z in 0..h {
            for x in 0..w {
                for kx in 0..w {
                    let phase = TAU * (kx * x) as f64 / w as f64;
                    let (s, c) = phase.sin_cos();
                    let (er, ei) = (re[kx * h + z] as f64, im[kx * h + z] as f64);
                    a_re[x * h + z] += er * c - ei * s;
                    a_im[x * h + z] += er * s + ei * c;
                }
            }
        }

        let mut out = vec![0.0f64; w * h];
        for x in 0..w {
            for z in 0..h {
                for kz in 0..h {
                    let phase = TAU * (kz * z) as f64 / h as f64;
                    let (s, c) = phase.sin_cos();
                    out[x * h + z] += a_re[x * h + kz] * c - a_im[x * h + kz] * s;
                }
            }
        }
        out
    }

    #[test]
    fn test_evolved_bin_matches_dispersion_formula() {
        let size = GridSize::new(8, 8);
        let spectrum = reference_spectrum(size, 21);
        let mut evolved = ComplexField::zeroed(size).unwrap();
        let t = 1.7;

        evolve_spectrum(&spectrum, t, &mut evolved).unwrap();

        let (x, z) = (2, 5);
        let theta = spectrum.waves.angular_frequency(x, z) * t;
        let (re, im) = spectrum.h0.get(x, z);
        let (mr, mi) = spectrum.h0.get(5, 2);
        let expected_re = re * theta.cos() + im * theta.sin() + mr * theta.cos() - mi * theta.sin();
        let expected_im = im * theta.cos() + re * theta.sin() - mi * theta.cos() - mr * theta.sin();

        let (actual_re, actual_im) = evolved.get(x, z);
        assert_relative_eq!(actual_re, expected_re, max_relative = 1e-5);
        assert_relative_eq!(actual_im, expected_im, max_relative = 1e-5);
    }

    #[test]
    fn test_time_zero_pairs_each_bin_with_its_mirror() {
        let size = GridSize::new(16, 8);
        let spectrum = reference_spectrum(size, 8);
        let mut evolved = ComplexField::zeroed(size).unwrap();

        evolve_spectrum(&spectrum, 0.0, &mut evolved).unwrap();

        for x in 0..size.width {
            for z in 0..size.height {
                let (re, im) = spectrum.h0.get(x, z);
                let (mr, mi) = spectrum.h0.get(size.width - 1 - x, size.height - 1 - z);
                assert_eq!(evolved.get(x, z), (re + mr, im - mi));
            }
        }
    }

    #[test]
    fn test_time_zero_heights_match_direct_inverse_dft() {
        let size = GridSize::default();
        let spectrum = reference_spectrum(size, 1234);
        let mut expected_field = ComplexField::zeroed(size).unwrap();
        evolve_spectrum(&spectrum, 0.0, &mut expected_field).unwrap();
        let expected = naive_inverse_real(&expected_field);

        let mut reconstructor = Reconstructor::new(size).unwrap();
        let mut heights = HeightGrid::zeroed(size).unwrap();
        reconstructor
            .step(&spectrum, 0.0, DEFAULT_HEIGHT_DIVISOR, &mut heights)
            .unwrap();

        let peak = expected.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        assert!(peak > 0.0);
        for (actual, reference) in heights.as_slice().iter().zip(&expected) {
            let reference = reference / DEFAULT_HEIGHT_DIVISOR as f64;
            assert!(
                (*actual as f64 - reference).abs() <= 1e-4 * peak,
                "got {}, expected {}",
                actual,
                reference
            );
        }
    }

    #[test]
    fn test_seeded_heights_are_pinned() {
        let size = GridSize::default();
        let spectrum = reference_spectrum(size, 1234);
        let mut reconstructor = Reconstructor::new(size).unwrap();
        let mut heights = HeightGrid::zeroed(size).unwrap();
        reconstructor
            .step(&spectrum, 0.0, DEFAULT_HEIGHT_DIVISOR, &mut heights)
            .unwrap();

        // Any change to the random stream or synthesis order moves these
        let (re, im) = spectrum.h0.get(1, 0);
        assert_relative_eq!(re, 0.748_158_1, max_relative = 1e-4);
        assert_relative_eq!(im, -0.559_264_99, max_relative = 1e-4);

        let pinned = [
            ((0, 0), 1.522_706_2),
            ((1, 0), 0.838_290_8),
            ((7, 13), -0.570_291_9),
            ((32, 32), -1.327_849_5),
            ((63, 63), -0.860_861_4),
        ];
        for ((x, z), expected) in pinned {
            assert_abs_diff_eq!(heights.get(x, z), expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_evolve_rejects_mismatched_output() {
        let spectrum = reference_spectrum(GridSize::new(8, 8), 3);
        let mut out = ComplexField::zeroed(GridSize::new(8, 4)).unwrap();

        let result = evolve_spectrum(&spectrum, 1.0, &mut out);

        assert!(matches!(
            result,
            Err(OceanError::Fft(FftError::BufferSize {
                expected: 64,
                actual: 32
            }))
        ));
        assert!(out.real().iter().chain(out.imag()).all(|&v| v == 0.0));
    }

    #[test]
    fn test_output_energy_obeys_parseval() {
        let size = GridSize::default();
        let spectrum = reference_spectrum(size, 77);
        let t = 5.0;

        let mut evolved = ComplexField::zeroed(size).unwrap();
        evolve_spectrum(&spectrum, t, &mut evolved).unwrap();

        // Real-part energy of an unscaled inverse DFT:
        // Σ Re(out)² = N/2 · (Σ|E_k|² + Re Σ E_k·E_{-k})
        let n = size.cells() as f64;
        let mut total = 0.0f64;
        let mut paired = 0.0f64;
        for x in 0..size.width {
            for z in 0..size.height {
                let (re, im) = evolved.get(x, z);
                let (nr, ni) = evolved.get(
                    (size.width - x) % size.width,
                    (size.height - z) % size.height,
                );
                let (re, im, nr, ni) = (re as f64, im as f64, nr as f64, ni as f64);
                total += re * re + im * im;
                paired += re * nr - im * ni;
            }
        }
        let divisor = DEFAULT_HEIGHT_DIVISOR as f64;
        let expected = n / 2.0 * (total + paired) / (divisor * divisor);

        let mut reconstructor = Reconstructor::new(size).unwrap();
        let mut heights = HeightGrid::zeroed(size).unwrap();
        reconstructor
            .step(&spectrum, t, DEFAULT_HEIGHT_DIVISOR, &mut heights)
            .unwrap();
        let actual: f64 = heights.as_slice().iter().map(|&h| h as f64 * h as f64).sum();

        assert!(expected > 0.0);
        assert_relative_eq!(actual, expected, max_relative = 1e-3);
        assert!(heights.stats().variance > 0.0);
    }

    #[test]
    fn test_height_divisor_scales_output() {
        let size = GridSize::new(16, 16);
        let spectrum = reference_spectrum(size, 4);
        let mut reconstructor = Reconstructor::new(size).unwrap();
        let mut unit = HeightGrid::zeroed(size).unwrap();
        let mut fifth = HeightGrid::zeroed(size).unwrap();

        reconstructor.step(&spectrum, 2.0, 1.0, &mut unit).unwrap();
        reconstructor.step(&spectrum, 2.0, 5.0, &mut fifth).unwrap();

        for (a, b) in unit.as_slice().iter().zip(fifth.as_slice()) {
            assert_relative_eq!(*a, b * 5.0, max_relative = 1e-5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_size_mismatch_leaves_heights_untouched() {
        let spectrum = reference_spectrum(GridSize::new(16, 16), 4);
        let mut reconstructor = Reconstructor::new(GridSize::new(8, 8)).unwrap();
        let mut heights = HeightGrid::zeroed(GridSize::new(8, 8)).unwrap();
        heights.as_mut_slice().fill(1.5);

        assert!(reconstructor
            .step(&spectrum, 1.0, DEFAULT_HEIGHT_DIVISOR, &mut heights)
            .is_err());
        assert!(heights.as_slice().iter().all(|&h| h == 1.5));
    }
}
