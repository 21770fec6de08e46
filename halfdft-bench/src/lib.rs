//! Shared fixtures for the halfdft benchmarks and reference-parity tests.

use halfdft::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use realfft::RealFftPlanner;

/// Deterministic pseudo-random full-scale 16-bit signal.
pub fn test_signal(len: usize, seed: u64) -> Vec<i16> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<i16>()).collect()
}

/// Half-spectrum of `signal` computed with `realfft`, in the same layout
/// `halfdft::forward` produces.
pub fn reference_half_spectrum(signal: &[i16]) -> Result<Vec<Complex64>, realfft::FftError> {
    let mut planner = RealFftPlanner::<f64>::new();
    let r2c = planner.plan_fft_forward(signal.len());
    let mut input: Vec<f64> = signal.iter().map(|&s| s as f64).collect();
    let mut output = r2c.make_output_vec();
    r2c.process(&mut input, &mut output)?;
    Ok(output
        .iter()
        .map(|c| Complex64::new(c.re, c.im))
        .collect())
}
