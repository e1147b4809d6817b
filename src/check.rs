//! One-shot buffer checking.
//!
//! The convenience entry point for callers holding a complete buffer:
//! validates length bounds, then drives a fresh [`CheckContext`] over
//! every byte and finishes it. It is a closed-form composition of the
//! streaming protocol and is required to agree with it, verdict for
//! verdict, on any buffer within bounds.

use crate::chi_squared::MIN_SAMPLES;
use crate::histogram::MAX_SAMPLES;
use crate::stream::CheckContext;
use crate::verdict::{CheckError, Verdict};

/// Minimum buffer length in bytes (32 nibble samples).
pub const MIN_LEN_BYTES: usize = 16;

/// Maximum buffer length in bytes.
///
/// Sized so a maximum-length buffer fits the histogram's overflow-safe
/// sample ceiling.
pub const MAX_LEN_BYTES: usize = 32_768;

// The length bounds and the evaluator's sample bounds are one property
// each; keep them structurally tied rather than conventionally assumed.
const _: () = assert!(2 * MAX_LEN_BYTES as u64 <= MAX_SAMPLES as u64);
const _: () = assert!(2 * MIN_LEN_BYTES as u64 >= MIN_SAMPLES as u64);

/// Checks whether a buffer looks like plausible entropy-source output.
///
/// Fails with [`CheckError::TooShort`] below [`MIN_LEN_BYTES`] and
/// [`CheckError::TooLong`] above [`MAX_LEN_BYTES`]; otherwise returns
/// the chi-squared verdict for the whole buffer.
///
/// A word on acting on the verdict: there is a small but real chance
/// (roughly 1.2e-5) that a perfect source produces a buffer this test
/// rejects. Discarding and resampling on [`Verdict::BadRandomness`]
/// therefore skews what you keep, and applied to a genuinely unbiased
/// source it reduces the effective entropy collected. This function
/// classifies; what to do about a rejection is the caller's policy.
pub fn check_buffer(buf: &[u8]) -> Result<Verdict, CheckError> {
    if buf.len() < MIN_LEN_BYTES {
        return Err(CheckError::TooShort {
            got: 2 * buf.len() as u32,
            need: MIN_SAMPLES,
        });
    }
    if buf.len() > MAX_LEN_BYTES {
        return Err(CheckError::TooLong {
            got: 2 * buf.len() as u64,
            limit: MAX_SAMPLES,
        });
    }

    let mut ctx = CheckContext::new();
    for &byte in buf {
        ctx.add(byte)?;
    }
    ctx.finish()
}
