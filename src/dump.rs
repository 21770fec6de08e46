//! Human-readable dumps of spectra and signals for debugging.
//!
//! The output format is not stable.

use core::f64::consts::PI;
use core::fmt;

use crate::dft::{real_half_size, HalfSpectrum, Parity};
use crate::error::DftError;
use crate::num::Complex64;

/// Line-per-bin rendering of a block's full spectrum.
///
/// Bins past the stored half are rebuilt by mirroring, the same way the
/// inverse transform does it, so they show the negated phase and the same
/// magnitude as their stored counterpart. Frequencies and phases are in
/// units of π; mirrored bins are reported at negative frequency.
#[derive(Debug, Clone)]
pub struct SpectrumDump {
    spectrum: HalfSpectrum,
    n: usize,
    half_only: bool,
}

impl SpectrumDump {
    /// `n` is the length of the block `spectrum` was computed from.
    pub fn new(spectrum: HalfSpectrum, n: usize) -> Result<Self, DftError> {
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
        Ok(Self {
            spectrum,
            n,
            half_only: false,
        })
    }

    /// Print only the stored bins.
    pub fn half_only(mut self, half_only: bool) -> Self {
        self.half_only = half_only;
        self
    }

    /// Number of lines between the brackets.
    pub fn line_count(&self) -> usize {
        if self.half_only {
            self.spectrum.len()
        } else {
            self.n
        }
    }

    /// Bin `k` of the full spectrum and its signed normalized frequency.
    fn full_bin(&self, k: usize) -> (f64, Complex64) {
        let half = self.spectrum.len();
        let bins = self.spectrum.bins();
        if k < half {
            (2.0 * k as f64 / self.n as f64, bins[k])
        } else {
            let j = Parity::of(self.n).mirror_index(half, k);
            (
                -2.0 * (self.n - k) as f64 / self.n as f64,
                bins[j].conj(),
            )
        }
    }

    pub fn into_spectrum(self) -> HalfSpectrum {
        self.spectrum
    }
}

impl fmt::Display for SpectrumDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for k in 0..self.line_count() {
            let (freq, bin) = self.full_bin(k);
            writeln!(
                f,
                "bin {:>4}: freq {:+.6}pi phase {:+.6}pi magnitude {:.6}",
                k,
                freq,
                bin.arg() / PI,
                bin.norm()
            )?;
        }
        write!(f, "]")
    }
}

/// Comma-separated rendering of a signal inside brackets.
#[derive(Debug, Clone, Copy)]
pub struct SignalDump<'a>(pub &'a [i16]);

impl fmt::Display for SignalDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, "]")
    }
}
