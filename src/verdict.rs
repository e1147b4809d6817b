//! Verdicts and the failure taxonomy for health checks.
//!
//! A completed check yields a [`Verdict`], a statistical judgment.
//! Everything else (too little input, too much input, misuse of a
//! consumed context) is a [`CheckError`] and says nothing about the
//! randomness of the bytes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Statistical outcome of a completed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The bytes are plausible output of a uniform source.
    Pass,
    /// The uniform-nibble hypothesis was rejected: the input looks
    /// biased, stuck, or patterned.
    BadRandomness,
}

impl Verdict {
    /// Returns true if the check passed.
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Failures that are not randomness judgments.
///
/// Counts are in nibble samples; each input byte contributes two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Not enough input for the statistic to have any power.
    #[error("too little input: {got} of the {need} nibble samples required")]
    TooShort {
        /// Samples accumulated (or implied by the buffer length).
        got: u32,
        /// Minimum samples the evaluator requires.
        need: u32,
    },

    /// Accepting the input would leave the overflow-safe counting range.
    #[error("too much input: {got} nibble samples exceeds the limit of {limit}")]
    TooLong {
        /// Samples the input would amount to.
        got: u64,
        /// Hard ceiling on accumulated samples.
        limit: u32,
    },

    /// The context was already finished; call `reset` before reuse.
    #[error("check context already consumed; reset it before reuse")]
    ContextConsumed,
}
