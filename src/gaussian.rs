//! Standard-normal pairs via the Marsaglia polar rejection method.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniform samples in `[0, 1)`.
///
/// Every `rand` generator is a source; tests can plug in scripted values.
pub trait UniformSource {
    fn next_unit(&mut self) -> f32;
}

impl<R: RngCore> UniformSource for R {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Draws pairs of independent N(0, 1) samples.
#[derive(Debug, Clone)]
pub struct GaussianSampler<S = StdRng> {
    source: S,
}

impl GaussianSampler<StdRng> {
    /// Deterministic sampler; the same seed always yields the same stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<S: UniformSource> GaussianSampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Two independent standard-normal samples.
    ///
    /// Uniform points in `[-1, 1]²` are rejected while they fall on or
    /// outside the unit circle, or exactly on the origin (where `ln(w)`
    /// diverges).
    pub fn sample_pair(&mut self) -> (f32, f32) {
        loop {
            let x1 = 2.0 * self.source.next_unit() - 1.0;
            let x2 = 2.0 * self.source.next_unit() - 1.0;
            let w = x1 * x1 + x2 * x2;
            if w >= 1.0 || w == 0.0 {
                continue;
            }

            let scale = ((-2.0 * w.ln()) / w).sqrt();
            return (x1 * scale, x2 * scale);
        }
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}
