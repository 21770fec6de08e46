//! Analysis settings and their environment overrides.
//!
//! With `std`, [`AnalysisConfig::from_env`] reads:
//!
//! - `HALFDFT_BLOCK_SIZE`: samples per block (positive integer)
//! - `HALFDFT_OVERFLOW`: `saturate`, `wrap` or `reject`
//!
//! Unparsable or zero values fall back to the defaults.

use crate::block::DEFAULT_BLOCK_SIZE;
use crate::dft::Overflow;

#[cfg(feature = "std")]
use std::sync::OnceLock;

pub const BLOCK_SIZE_ENV: &str = "HALFDFT_BLOCK_SIZE";
pub const OVERFLOW_ENV: &str = "HALFDFT_OVERFLOW";

/// Error returned when an overflow policy name is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOverflowError;

impl core::fmt::Display for ParseOverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "expected one of: saturate, wrap, reject")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseOverflowError {}

impl core::str::FromStr for Overflow {
    type Err = ParseOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("saturate") {
            Ok(Overflow::Saturate)
        } else if s.eq_ignore_ascii_case("wrap") {
            Ok(Overflow::Wrap)
        } else if s.eq_ignore_ascii_case("reject") {
            Ok(Overflow::Reject)
        } else {
            Err(ParseOverflowError)
        }
    }
}

impl Overflow {
    pub const fn name(self) -> &'static str {
        match self {
            Overflow::Saturate => "saturate",
            Overflow::Wrap => "wrap",
            Overflow::Reject => "reject",
        }
    }
}

/// Settings for splitting a signal and rebuilding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub block_size: usize,
    pub overflow: Overflow,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            overflow: Overflow::default(),
        }
    }
}

impl AnalysisConfig {
    /// Build a config from raw override strings, keeping the default for
    /// anything missing or invalid.
    pub fn from_overrides(block_size: Option<&str>, overflow: Option<&str>) -> Self {
        let mut cfg = Self::default();
        if let Some(size) = block_size
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v != 0)
        {
            cfg.block_size = size;
        }
        if let Some(policy) = overflow.and_then(|v| v.parse::<Overflow>().ok()) {
            cfg.overflow = policy;
        }
        cfg
    }

    /// Defaults overridden by `HALFDFT_*` environment variables. The
    /// environment is read once per process.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        static ENV: OnceLock<AnalysisConfig> = OnceLock::new();
        *ENV.get_or_init(|| {
            let block_size = std::env::var(BLOCK_SIZE_ENV).ok();
            let overflow = std::env::var(OVERFLOW_ENV).ok();
            AnalysisConfig::from_overrides(block_size.as_deref(), overflow.as_deref())
        })
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}
