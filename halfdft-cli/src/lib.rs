//! Commands behind the `halfdft` binary.

pub mod pcm;

use halfdft::block::{block_count, BlockSpectra};
use halfdft::dump::SpectrumDump;
use halfdft::{AnalysisConfig, DftError};
use std::error::Error;
use std::io::Write;

/// Options for printing block spectra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumOptions {
    pub block_size: usize,
    pub half_only: bool,
    pub max_blocks: Option<usize>,
}

fn analyze(samples: &[i16], block_size: usize) -> Result<BlockSpectra, DftError> {
    #[cfg(feature = "parallel")]
    {
        BlockSpectra::analyze_parallel(samples, block_size)
    }
    #[cfg(not(feature = "parallel"))]
    {
        BlockSpectra::analyze(samples, block_size)
    }
}

/// Print the spectrum of every block of `samples` to `out`.
///
/// Returns the number of blocks printed.
pub fn write_spectra<W: Write>(
    out: &mut W,
    samples: &[i16],
    opts: SpectrumOptions,
) -> Result<usize, Box<dyn Error>> {
    if opts.block_size == 0 {
        return Err(Box::new(DftError::InvalidBlockSize));
    }
    let take = match opts.max_blocks {
        Some(max) => samples.len().min(max.saturating_mul(opts.block_size)),
        None => samples.len(),
    };
    let spectra = analyze(&samples[..take], opts.block_size)?;
    let printed = spectra.len();
    for (idx, block) in spectra.into_blocks().into_iter().enumerate() {
        writeln!(out, "block {} ({} samples)", idx, block.len)?;
        let dump = SpectrumDump::new(block.spectrum, block.len)?.half_only(opts.half_only);
        writeln!(out, "{}", dump)?;
    }
    Ok(printed)
}

/// Outcome of a forward/inverse pass over a whole signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundtripReport {
    pub blocks: usize,
    pub samples: usize,
    /// Largest absolute difference between an input and output sample.
    pub max_error: u32,
}

/// Transform every block of `samples` and rebuild it.
pub fn roundtrip(
    samples: &[i16],
    cfg: AnalysisConfig,
) -> Result<(Vec<i16>, RoundtripReport), DftError> {
    let spectra = analyze(samples, cfg.block_size)?;
    #[cfg(feature = "parallel")]
    let rebuilt = spectra.synthesize_parallel(cfg.overflow)?;
    #[cfg(not(feature = "parallel"))]
    let rebuilt = spectra.synthesize(cfg.overflow)?;
    let max_error = samples
        .iter()
        .zip(&rebuilt)
        .map(|(&a, &b)| (a as i32 - b as i32).unsigned_abs())
        .max()
        .unwrap_or(0);
    log::debug!(
        "roundtrip of {} samples: {} blocks, max error {}",
        samples.len(),
        spectra.len(),
        max_error
    );
    let report = RoundtripReport {
        blocks: block_count(samples.len(), cfg.block_size),
        samples: rebuilt.len(),
        max_error,
    };
    Ok((rebuilt, report))
}
