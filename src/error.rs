//! Error type shared by the transform core and the block splitter.

/// Errors reported by [`crate::dft`] and [`crate::block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DftError {
    /// A transform was asked to process zero samples.
    EmptyInput,
    /// The block size used for splitting was zero.
    InvalidBlockSize,
    /// A half-spectrum does not have `real_half_size(n)` bins for the
    /// block length supplied to the inverse transform.
    LengthMismatch { expected: usize, actual: usize },
    /// A reconstructed sample rounded outside the 16-bit range under
    /// [`crate::dft::Overflow::Reject`].
    SampleOverflow { index: usize, value: i64 },
    /// A reconstructed sample came out as NaN or infinity. Only possible for
    /// hand-built spectra holding non-finite bins.
    NonFiniteSample { index: usize },
}

impl core::fmt::Display for DftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DftError::EmptyInput => write!(f, "input signal is empty"),
            DftError::InvalidBlockSize => write!(f, "block size must be at least one sample"),
            DftError::LengthMismatch { expected, actual } => write!(
                f,
                "half-spectrum has {} bins but the block length requires {}",
                actual, expected
            ),
            DftError::SampleOverflow { index, value } => write!(
                f,
                "reconstructed sample {} rounds to {} which does not fit in 16 bits",
                index, value
            ),
            DftError::NonFiniteSample { index } => {
                write!(f, "reconstructed sample {} is not a finite number", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DftError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_both_lengths() {
        let msg = DftError::LengthMismatch {
            expected: 257,
            actual: 256,
        }
        .to_string();
        assert!(msg.contains("257"));
        assert!(msg.contains("256"));
    }

    #[test]
    fn display_overflow() {
        let msg = DftError::SampleOverflow {
            index: 3,
            value: 40000,
        }
        .to_string();
        assert_eq!(
            msg,
            "reconstructed sample 3 rounds to 40000 which does not fit in 16 bits"
        );
    }

    #[test]
    fn display_non_finite() {
        assert_eq!(
            DftError::NonFiniteSample { index: 7 }.to_string(),
            "reconstructed sample 7 is not a finite number"
        );
    }
}
