//! Nibble frequency accumulation.
//!
//! Each input byte is treated as two independent observations: its high
//! nibble and its low nibble. The histogram only counts; it holds no
//! decision logic and no shared state. Each check owns its own
//! histogram, so concurrent checks never contend.

use crate::verdict::CheckError;

/// Number of histogram bins (one per nibble value, 0x0 to 0xF).
pub const BIN_COUNT: usize = 16;

/// Hard ceiling on accumulated nibble observations.
///
/// Two nibbles per byte across a maximum-length buffer. The ceiling is
/// what makes the counters overflow-safe: even in the fully skewed case
/// where every observation lands in a single bin, that bin stays within
/// its representable range.
pub const MAX_SAMPLES: u32 = 65_536;

// The skewed worst case puts all MAX_SAMPLES observations in one bin.
const _: () = assert!(MAX_SAMPLES as u64 <= u32::MAX as u64);

/// Frequency counts of nibble values, plus the running sample total.
///
/// Invariant: the bins always sum to `samples`, and `samples` is always
/// even (a byte contributes exactly two observations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NibbleHistogram {
    /// Per-nibble observation counts, index = nibble value.
    bins: [u32; BIN_COUNT],
    /// Total observations recorded so far.
    samples: u32,
}

impl NibbleHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self {
            bins: [0; BIN_COUNT],
            samples: 0,
        }
    }

    /// Zeroes all bins and the sample count.
    pub fn reset(&mut self) {
        self.bins = [0; BIN_COUNT];
        self.samples = 0;
    }

    /// Records both nibbles of a byte.
    ///
    /// Fails with [`CheckError::TooLong`] and leaves the histogram
    /// untouched if recording would push the sample count past
    /// [`MAX_SAMPLES`]. The guard runs before any mutation.
    pub fn record(&mut self, byte: u8) -> Result<(), CheckError> {
        if self.samples + 2 > MAX_SAMPLES {
            return Err(CheckError::TooLong {
                got: u64::from(self.samples) + 2,
                limit: MAX_SAMPLES,
            });
        }

        self.bins[(byte >> 4) as usize] += 1;
        self.bins[(byte & 0x0F) as usize] += 1;
        self.samples += 2;
        Ok(())
    }

    /// Returns the per-nibble observation counts.
    #[inline]
    pub fn bins(&self) -> &[u32; BIN_COUNT] {
        &self.bins
    }

    /// Returns the total observations recorded.
    #[inline]
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Returns true if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }
}

impl Default for NibbleHistogram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_record_splits_nibbles() {
        let mut hist = NibbleHistogram::new();
        hist.record(0xA5).unwrap();

        assert_eq!(hist.bins()[0xA], 1);
        assert_eq!(hist.bins()[0x5], 1);
        assert_eq!(hist.samples(), 2);
    }

    #[test]
    fn test_equal_nibbles_count_twice() {
        let mut hist = NibbleHistogram::new();
        hist.record(0x77).unwrap();

        assert_eq!(hist.bins()[0x7], 2);
        assert_eq!(hist.samples(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut hist = NibbleHistogram::new();
        for byte in 0u8..=255 {
            hist.record(byte).unwrap();
        }
        hist.reset();

        assert!(hist.is_empty());
        assert_eq!(hist.bins().iter().sum::<u32>(), 0);
    }

    #[test]
    fn test_overflow_guard_fires_at_ceiling() {
        let mut hist = NibbleHistogram::new();

        // Exactly MAX_SAMPLES observations must all succeed.
        for i in 0..(MAX_SAMPLES / 2) {
            hist.record(i as u8).unwrap();
        }
        assert_eq!(hist.samples(), MAX_SAMPLES);

        // One more byte trips the guard and mutates nothing.
        let before = hist.clone();
        assert!(matches!(
            hist.record(0x00),
            Err(CheckError::TooLong { .. })
        ));
        assert_eq!(hist, before);
    }

    proptest! {
        #[test]
        fn prop_bins_sum_to_twice_byte_count(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let mut hist = NibbleHistogram::new();
            for &byte in &data {
                hist.record(byte).unwrap();
            }

            let total: u32 = hist.bins().iter().sum();
            prop_assert_eq!(total, 2 * data.len() as u32);
            prop_assert_eq!(hist.samples(), total);
            prop_assert_eq!(hist.samples() % 2, 0);
        }
    }
}
