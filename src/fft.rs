//! In-place radix-2 Cooley-Tukey FFT on planar (real, imaginary) buffers.
//!
//! Scaling is asymmetric: the forward transform divides by `N`, the inverse
//! transform applies no scaling. The height reconstruction relies on the
//! un-scaled inverse, so keep the two conventions paired.

use std::collections::TryReserveError;

use crate::error::FftError;

/// Transform direction.
///
/// `Forward` uses the `e^{-i}` kernel and scales by `1/N`; `Inverse` uses
/// `e^{+i}` and leaves magnitudes untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Returns `m` such that `n == 2^m`, or `None` if `n` is not a power of two.
pub fn log2_exact(n: usize) -> Option<u32> {
    n.is_power_of_two().then(|| n.trailing_zeros())
}

/// Allocate a zero-filled buffer, reporting allocation failure instead of aborting.
pub(crate) fn alloc_zeroed(len: usize) -> Result<Vec<f32>, TryReserveError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, 0.0);
    Ok(buffer)
}

/// 1D complex FFT over `re`/`im`, in place.
///
/// Fails without touching either buffer if the lengths differ or are not a
/// power of two. A length of one (`2^0`) is accepted and is a no-op.
pub fn fft_in_place(direction: Direction, re: &mut [f32], im: &mut [f32]) -> Result<(), FftError> {
    if re.len() != im.len() {
        return Err(FftError::LengthMismatch {
            real: re.len(),
            imag: im.len(),
        });
    }
    let n = re.len();
    let m = log2_exact(n).ok_or(FftError::NotPowerOfTwo(n))?;
    transform(direction, m, re, im);
    Ok(())
}

/// Core transform. Callers guarantee `re.len() == im.len() == 1 << m`.
fn transform(direction: Direction, m: u32, re: &mut [f32], im: &mut [f32]) {
    let n = 1usize << m;

    // Bit reversal with a running reversed counter
    let half = n >> 1;
    let mut j = 0usize;
    for i in 0..n.saturating_sub(1) {
        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
        let mut k = half;
        while k <= j {
            j -= k;
            k >>= 1;
        }
        j += k;
    }

    // Butterflies. Twiddles advance by recurrence rather than per-butterfly sin/cos.
    let mut c1 = -1.0f64;
    let mut c2 = 0.0f64;
    let mut l2 = 1usize;
    for _ in 0..m {
        let l1 = l2;
        l2 <<= 1;
        let mut u1 = 1.0f64;
        let mut u2 = 0.0f64;
        for j in 0..l1 {
            for i in (j..n).step_by(l2) {
                let i1 = i + l1;
                let t1 = u1 * re[i1] as f64 - u2 * im[i1] as f64;
                let t2 = u1 * im[i1] as f64 + u2 * re[i1] as f64;
                re[i1] = (re[i] as f64 - t1) as f32;
                im[i1] = (im[i] as f64 - t2) as f32;
                re[i] = (re[i] as f64 + t1) as f32;
                im[i] = (im[i] as f64 + t2) as f32;
            }
            let z = u1 * c1 - u2 * c2;
            u2 = u1 * c2 + u2 * c1;
            u1 = z;
        }
        c2 = ((1.0 - c1) / 2.0).sqrt();
        if direction == Direction::Forward {
            c2 = -c2;
        }
        c1 = ((1.0 + c1) / 2.0).sqrt();
    }

    if direction == Direction::Forward {
        let scale = 1.0 / n as f32;
        for (r, i) in re.iter_mut().zip(im.iter_mut()) {
            *r *= scale;
            *i *= scale;
        }
    }
}

/// Separable 2D FFT over a `width × height` planar grid.
///
/// Grid cells are stored x-major: cell `(x, z)` lives at `x * height + z`.
/// The row pass (length `width`) gathers through a scratch buffer sized to
/// `max(width, height)` that is allocated once and reused for every call.
/// Columns are contiguous and transform in place.
#[derive(Debug, Clone)]
pub struct Fft2d {
    width: usize,
    height: usize,
    cells: usize,
    width_log2: u32,
    height_log2: u32,
    scratch_re: Vec<f32>,
    scratch_im: Vec<f32>,
}

impl Fft2d {
    /// Plan a 2D transform. Both dimensions must be powers of two.
    pub fn new(width: usize, height: usize) -> Result<Self, FftError> {
        let width_log2 = log2_exact(width).ok_or(FftError::NotPowerOfTwo(width))?;
        let height_log2 = log2_exact(height).ok_or(FftError::NotPowerOfTwo(height))?;
        let cells = width
            .checked_mul(height)
            .ok_or(FftError::GridTooLarge { width, height })?;

        let scratch_len = width.max(height);
        let scratch_re =
            alloc_zeroed(scratch_len).map_err(|_| FftError::ScratchAllocation(scratch_len))?;
        let scratch_im =
            alloc_zeroed(scratch_len).map_err(|_| FftError::ScratchAllocation(scratch_len))?;

        Ok(Self {
            width,
            height,
            cells,
            width_log2,
            height_log2,
            scratch_re,
            scratch_im,
        })
    }

    /// Transform rows then columns of `re`/`im` in place.
    ///
    /// Buffer sizes are checked up front; on error nothing is mutated.
    pub fn process(
        &mut self,
        direction: Direction,
        re: &mut [f32],
        im: &mut [f32],
    ) -> Result<(), FftError> {
        let expected = self.cells;
        if re.len() != im.len() {
            return Err(FftError::LengthMismatch {
                real: re.len(),
                imag: im.len(),
            });
        }
        if re.len() != expected {
            return Err(FftError::BufferSize {
                expected,
                actual: re.len(),
            });
        }

        let (w, h) = (self.width, self.height);

        // Rows: fixed z, x varies (strided by height)
        let row_re = &mut self.scratch_re[..w];
        let row_im = &mut self.scratch_im[..w];
        for z in 0..h {
            for x in 0..w {
                row_re[x] = re[x * h + z];
                row_im[x] = im[x * h + z];
            }
            transform(direction, self.width_log2, row_re, row_im);
            for x in 0..w {
                re[x * h + z] = row_re[x];
                im[x * h + z] = row_im[x];
            }
        }

        // Columns: fixed x, z varies (contiguous)
        for (col_re, col_im) in re.chunks_exact_mut(h).zip(im.chunks_exact_mut(h)) {
            transform(direction, self.height_log2, col_re, col_im);
        }

        Ok(())
    }
}
