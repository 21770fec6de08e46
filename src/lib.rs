//! # halfdft - half-spectrum DFT for 16-bit PCM
//!
//! Computes the discrete Fourier transform of blocks of signed 16-bit
//! samples and reconstructs the samples from it. Because the input is real,
//! the spectrum is conjugate symmetric and only the non-redundant half
//! (DC through Nyquist) is ever stored.
//!
//! ## Features
//!
//! - **Direct summation DFT** with no plan, cache or twiddle table: every
//!   block is transformed from scratch.
//! - **Exact round trip**: `inverse(forward(x), x.len()) == x` for any
//!   block of 16-bit samples.
//! - **Fixed-size block analysis** of arbitrarily long signals.
//! - **`no_std` + `alloc`** core; math goes through `libm`.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls and environment config
//! - `parallel`: transform blocks on the rayon thread pool
//! - `verbose-logging`: emit `log` records from block analysis
//!
//! ## Example
//!
//! ```
//! use halfdft::dft::{forward, inverse, real_half_size};
//!
//! let block = [3i16, -1, 4, 1, -5, 9];
//! let spectrum = forward(&block).unwrap();
//! assert_eq!(spectrum.len(), real_half_size(block.len()));
//! assert_eq!(inverse(&spectrum, block.len()).unwrap(), block);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

/// Minimal float trait and complex number type.
pub mod num;

/// Error type shared by every module.
pub mod error;

/// Forward and inverse half-spectrum DFT of a single block.
pub mod dft;

/// Splitting signals into fixed-size blocks and transforming each one.
pub mod block;

/// Block size and overflow policy settings.
pub mod config;

/// Debug printing of spectra and signals.
pub mod dump;

pub use block::{BlockSpectra, BlockSpectrum, DEFAULT_BLOCK_SIZE};
pub use config::AnalysisConfig;
pub use dft::{forward, inverse, inverse_with, real_half_size, HalfSpectrum, Overflow};
pub use error::DftError;
pub use num::{Complex, Complex64, Float};
