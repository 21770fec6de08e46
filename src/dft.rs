//! Naive discrete Fourier transform over one block of 16-bit PCM samples.
//!
//! A real-valued block of `N` samples has a conjugate-symmetric spectrum,
//! `X[N - k] == conj(X[k])`, so only bins `0..=N/2` carry information. The
//! forward transform computes and stores just those [`real_half_size`] bins
//! in a [`HalfSpectrum`]; the inverse rebuilds the upper half by mirroring
//! before resynthesizing the samples.
//!
//! Both directions are the direct `O(N^2)` summation. Each call is pure and
//! independent of every other block.

use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::error::DftError;
use crate::num::{Complex64, Float};

/// Number of non-redundant bins (DC through Nyquist inclusive) for a block
/// of `n` real samples: `ceil(n / 2) + (1 if n is even else 0)`.
///
/// Every component that stores, prints or mirrors a half-spectrum must use
/// this function so that their index arithmetic agrees.
#[inline]
pub const fn real_half_size(n: usize) -> usize {
    n.div_ceil(2) + if n % 2 == 0 { 1 } else { 0 }
}

/// Parity of a block length. Selects the reflection used to map an index of
/// the redundant upper half back into the stored half-spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub const fn of(n: usize) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Map index `i` in `[half, n)` onto the stored bin whose conjugate it
    /// equals, where `half == real_half_size(n)`.
    ///
    /// Even lengths reflect around `half - 1` (the Nyquist bin is stored and
    /// not repeated); odd lengths reflect around the gap between `half - 1`
    /// and `half`.
    #[inline]
    pub const fn mirror_index(self, half: usize, i: usize) -> usize {
        match self {
            Parity::Even => (half - 1) - (i - (half - 1)),
            Parity::Odd => (half - 1) - (i - half),
        }
    }
}

/// What to do when a reconstructed sample rounds outside `[-32768, 32767]`.
///
/// A spectrum produced by [`forward`] never triggers this. Spectra that were
/// edited or built by hand can. A NaN or infinite sample is always an error
/// ([`DftError::NonFiniteSample`]) whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Clamp to the nearest representable sample.
    #[default]
    Saturate,
    /// Keep the low 16 bits of the rounded integer.
    Wrap,
    /// Fail with [`DftError::SampleOverflow`].
    Reject,
}

impl Overflow {
    fn apply(self, index: usize, value: f64) -> Result<i16, DftError> {
        if !value.is_finite() {
            return Err(DftError::NonFiniteSample { index });
        }
        let min = i16::MIN as f64;
        let max = i16::MAX as f64;
        match self {
            Overflow::Saturate => Ok(value.clamp(min, max) as i16),
            Overflow::Wrap => Ok(value as i64 as i16),
            Overflow::Reject => {
                if (min..=max).contains(&value) {
                    Ok(value as i16)
                } else {
                    Err(DftError::SampleOverflow {
                        index,
                        value: value as i64,
                    })
                }
            }
        }
    }
}

/// The non-redundant half of a real block's spectrum.
///
/// Holds exactly `real_half_size(n)` bins for the block it was computed
/// from. The block length itself is not stored: callers pass it back to
/// [`inverse`].
#[derive(Debug, Clone, PartialEq)]
pub struct HalfSpectrum {
    bins: Vec<Complex64>,
}

impl HalfSpectrum {
    /// Wrap bins obtained elsewhere. Their count is checked against the
    /// block length when the spectrum is inverted.
    pub fn from_bins(bins: Vec<Complex64>) -> Self {
        Self { bins }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[Complex64] {
        &self.bins
    }

    pub fn get(&self, k: usize) -> Option<Complex64> {
        self.bins.get(k).copied()
    }

    pub fn into_bins(self) -> Vec<Complex64> {
        self.bins
    }

    /// Magnitude of every stored bin.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// Phase of every stored bin in radians.
    pub fn phases(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.arg()).collect()
    }
}

/// `exp(sign * 2πi * k / n)` with `k` already reduced modulo `n`.
#[inline(always)]
fn twiddle(sign: f64, k: usize, n: usize) -> Complex64 {
    Complex64::expi(sign * 2.0 * PI * k as f64 / n as f64)
}

/// Forward transform of one block.
///
/// `bin[f] = sum_i signal[i] * exp(-2πi * f * i / N)` for
/// `f in 0..real_half_size(N)`.
pub fn forward(signal: &[i16]) -> Result<HalfSpectrum, DftError> {
    let n = signal.len();
    if n == 0 {
        return Err(DftError::EmptyInput);
    }
    let half = real_half_size(n);
    let mut bins = Vec::with_capacity(half);
    for f in 0..half {
        let mut acc = Complex64::zero();
        for (i, &x) in signal.iter().enumerate() {
            // f * i grows to ~N^2/2; reduce it so the angle stays in [0, 2π)
            acc += twiddle(-1.0, (f * i) % n, n).scale(x as f64);
        }
        bins.push(acc);
    }
    #[cfg(feature = "verbose-logging")]
    log::trace!("forward: {} samples -> {} bins", n, half);
    Ok(HalfSpectrum { bins })
}

/// Inverse transform of one block with the default [`Overflow::Saturate`]
/// policy.
///
/// `n` must be the length of the block that produced `spectrum`.
pub fn inverse(spectrum: &HalfSpectrum, n: usize) -> Result<Vec<i16>, DftError> {
    inverse_with(spectrum, n, Overflow::default())
}

/// Inverse transform of one block.
///
/// Fails with [`DftError::LengthMismatch`] if `spectrum` does not hold
/// exactly `real_half_size(n)` bins.
pub fn inverse_with(
    spectrum: &HalfSpectrum,
    n: usize,
    overflow: Overflow,
) -> Result<Vec<i16>, DftError> {
    if n == 0 {
        return Err(DftError::EmptyInput);
    }
    let expected = real_half_size(n);
    if spectrum.len() != expected {
        return Err(DftError::LengthMismatch {
            expected,
            actual: spectrum.len(),
        });
    }
    let out = synthesize(&spectrum.bins, n, Parity::of(n), overflow)?;
    #[cfg(feature = "verbose-logging")]
    log::trace!("inverse: {} bins -> {} samples", expected, n);
    Ok(out)
}

/// Resynthesize `n` samples from `bins` using the given mirroring rule.
/// `bins.len()` must already equal `real_half_size(n)`.
fn synthesize(
    bins: &[Complex64],
    n: usize,
    parity: Parity,
    overflow: Overflow,
) -> Result<Vec<i16>, DftError> {
    let half = bins.len();
    let mut out = Vec::with_capacity(n);
    for f in 0..n {
        let mut acc = Complex64::zero();
        for i in 0..n {
            let bin = if i < half {
                bins[i]
            } else {
                bins[parity.mirror_index(half, i)].conj()
            };
            acc += bin * twiddle(1.0, (f * i) % n, n);
        }
        // the imaginary part is rounding noise for a real signal
        let value = Float::round(acc.re / n as f64);
        out.push(overflow.apply(f, value)?);
    }
    Ok(out)
}
