//! Fixed-size block splitting and per-block analysis/synthesis.
//!
//! A long signal is cut into consecutive, non-overlapping blocks of
//! `block_size` samples (the last one may be shorter). Each block is
//! transformed on its own: no window, no overlap, no state carried across
//! block boundaries.

use alloc::vec::Vec;

use crate::dft::{forward, inverse_with, HalfSpectrum, Overflow};
use crate::error::DftError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Block size used by the reference tool.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Number of blocks a signal of `len` samples splits into.
#[inline]
pub const fn block_count(len: usize, block_size: usize) -> usize {
    len.div_ceil(block_size)
}

/// Iterator over consecutive blocks of a signal. See [`split`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    signal: &'a [i16],
    block_size: usize,
    pos: usize,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a [i16];

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.signal.len() {
            return None;
        }
        let end = (self.pos + self.block_size).min(self.signal.len());
        let block = &self.signal[self.pos..end];
        self.pos = end;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = block_count(self.signal.len() - self.pos, self.block_size);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Blocks<'_> {}

/// Split `signal` into blocks of `block_size` samples.
///
/// Yields `ceil(len / block_size)` blocks; all but the last have exactly
/// `block_size` samples. An empty signal yields no blocks.
pub fn split(signal: &[i16], block_size: usize) -> Result<Blocks<'_>, DftError> {
    if block_size == 0 {
        return Err(DftError::InvalidBlockSize);
    }
    Ok(Blocks {
        signal,
        block_size,
        pos: 0,
    })
}

/// Spectrum of one block together with the length it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSpectrum {
    pub len: usize,
    pub spectrum: HalfSpectrum,
}

impl BlockSpectrum {
    fn analyze(block: &[i16]) -> Result<Self, DftError> {
        Ok(Self {
            len: block.len(),
            spectrum: forward(block)?,
        })
    }

    fn synthesize(&self, overflow: Overflow) -> Result<Vec<i16>, DftError> {
        inverse_with(&self.spectrum, self.len, overflow)
    }
}

/// Owned, ordered spectra of every block of a signal.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSpectra {
    block_size: usize,
    blocks: Vec<BlockSpectrum>,
}

impl BlockSpectra {
    /// Forward-transform every block of `signal`, one after another.
    pub fn analyze(signal: &[i16], block_size: usize) -> Result<Self, DftError> {
        let blocks = split(signal, block_size)?
            .map(BlockSpectrum::analyze)
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "analyzed {} samples into {} blocks of {}",
            signal.len(),
            blocks.len(),
            block_size
        );
        Ok(Self { block_size, blocks })
    }

    /// Same result as [`BlockSpectra::analyze`], with blocks transformed on
    /// the rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn analyze_parallel(signal: &[i16], block_size: usize) -> Result<Self, DftError> {
        if block_size == 0 {
            return Err(DftError::InvalidBlockSize);
        }
        let blocks = signal
            .par_chunks(block_size)
            .map(BlockSpectrum::analyze)
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "analyzed {} samples into {} blocks of {} (parallel)",
            signal.len(),
            blocks.len(),
            block_size
        );
        Ok(Self { block_size, blocks })
    }

    /// Inverse-transform every block with its own recorded length and
    /// concatenate the results in block order.
    pub fn synthesize(&self, overflow: Overflow) -> Result<Vec<i16>, DftError> {
        let mut out = Vec::with_capacity(self.total_len());
        for block in &self.blocks {
            out.extend(block.synthesize(overflow)?);
        }
        #[cfg(feature = "verbose-logging")]
        log::debug!("synthesized {} blocks into {} samples", self.len(), out.len());
        Ok(out)
    }

    #[cfg(feature = "parallel")]
    pub fn synthesize_parallel(&self, overflow: Overflow) -> Result<Vec<i16>, DftError> {
        let parts = self
            .blocks
            .par_iter()
            .map(|b| b.synthesize(overflow))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.concat())
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of samples the spectra were computed from.
    pub fn total_len(&self) -> usize {
        self.blocks.iter().map(|b| b.len).sum()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, BlockSpectrum> {
        self.blocks.iter()
    }

    pub fn into_blocks(self) -> Vec<BlockSpectrum> {
        self.blocks
    }
}

impl<'a> IntoIterator for &'a BlockSpectra {
    type Item = &'a BlockSpectrum;
    type IntoIter = core::slice::Iter<'a, BlockSpectrum>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::real_half_size;
    use alloc::vec;

    #[test]
    fn split_1025_at_512() {
        let signal = vec![1i16; 1025];
        let lens: Vec<usize> = split(&signal, DEFAULT_BLOCK_SIZE)
            .unwrap()
            .map(|b| b.len())
            .collect();
        assert_eq!(lens, vec![512, 512, 1]);
    }

    #[test]
    fn split_exact_multiple() {
        let signal = vec![0i16; 1024];
        let blocks = split(&signal, 512).unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.into_iter().all(|b| b.len() == 512));
    }

    #[test]
    fn split_preserves_order() {
        let signal: Vec<i16> = (0..10).collect();
        let joined: Vec<i16> = split(&signal, 3).unwrap().flatten().copied().collect();
        assert_eq!(joined, signal);
    }

    #[test]
    fn split_empty_and_zero_size() {
        assert_eq!(split(&[], 512).unwrap().count(), 0);
        assert_eq!(split(&[1, 2], 0).unwrap_err(), DftError::InvalidBlockSize);
    }

    #[test]
    fn block_count_matches_ceil() {
        assert_eq!(block_count(1025, 512), 3);
        assert_eq!(block_count(1024, 512), 2);
        assert_eq!(block_count(0, 512), 0);
        assert_eq!(block_count(1, 512), 1);
    }

    #[test]
    fn analyze_records_each_block_length() {
        let signal: Vec<i16> = (0..13).map(|i| (i * 37 % 11) as i16 - 5).collect();
        let spectra = BlockSpectra::analyze(&signal, 5).unwrap();
        assert_eq!(spectra.len(), 3);
        assert_eq!(spectra.block_size(), 5);
        assert_eq!(spectra.total_len(), 13);
        let lens: Vec<usize> = spectra.iter().map(|b| b.len).collect();
        assert_eq!(lens, vec![5, 5, 3]);
        for b in &spectra {
            assert_eq!(b.spectrum.len(), real_half_size(b.len));
        }
        assert_eq!(spectra.synthesize(Overflow::Reject).unwrap(), signal);
    }

    #[test]
    fn analyze_empty_signal() {
        let spectra = BlockSpectra::analyze(&[], 512).unwrap();
        assert!(spectra.is_empty());
        assert!(spectra.synthesize(Overflow::Saturate).unwrap().is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let signal: Vec<i16> = (0..1100).map(|i| ((i * 7919) % 2001) as i16 - 1000).collect();
        let seq = BlockSpectra::analyze(&signal, 256).unwrap();
        let par = BlockSpectra::analyze_parallel(&signal, 256).unwrap();
        assert_eq!(seq, par);
        assert_eq!(
            par.synthesize_parallel(Overflow::Saturate).unwrap(),
            seq.synthesize(Overflow::Saturate).unwrap()
        );
    }
}
