//! Incremental streaming interface.
//!
//! Drives the health test one byte at a time for callers that receive
//! entropy in dribbles: `reset` (or a fresh context), `add` per byte,
//! then `finish`. For any byte sequence within the length bounds this
//! protocol yields the same verdict as [`crate::check_buffer`].

use crate::chi_squared::{self, ChiSquaredReport};
use crate::histogram::NibbleHistogram;
use crate::verdict::{CheckError, Verdict};

/// Lifecycle of a context: accumulating until a successful finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Accumulating,
    Finished,
}

/// Caller-owned state for one in-progress check.
///
/// A context is a plain value with no hidden shared state: every
/// independent check gets its own, and two checks on separate contexts
/// are fully independent with no locking. A context is single-use:
/// once `finish` succeeds it is consumed, and further `add` or `finish`
/// calls fail until `reset` returns it to a fresh state.
#[derive(Debug, Clone)]
pub struct CheckContext {
    histogram: NibbleHistogram,
    phase: Phase,
}

impl CheckContext {
    /// Creates a fresh context ready to accumulate.
    pub fn new() -> Self {
        Self {
            histogram: NibbleHistogram::new(),
            phase: Phase::Accumulating,
        }
    }

    /// Returns the context to a fresh, empty accumulating state.
    pub fn reset(&mut self) {
        self.histogram.reset();
        self.phase = Phase::Accumulating;
    }

    /// Absorbs one byte (two nibble observations).
    ///
    /// Fails with [`CheckError::TooLong`] at the sample ceiling, leaving
    /// the histogram unchanged, or [`CheckError::ContextConsumed`] after
    /// a successful `finish`.
    pub fn add(&mut self, byte: u8) -> Result<(), CheckError> {
        if self.phase == Phase::Finished {
            return Err(CheckError::ContextConsumed);
        }
        self.histogram.record(byte)
    }

    /// Evaluates the accumulated histogram and consumes the context.
    ///
    /// Fails with [`CheckError::TooShort`] when fewer than
    /// [`chi_squared::MIN_SAMPLES`] observations have been absorbed; in
    /// that case the context keeps accumulating, so the caller can feed
    /// more bytes and finish again.
    pub fn finish(&mut self) -> Result<Verdict, CheckError> {
        self.finish_report().map(|report| report.verdict)
    }

    /// Like [`finish`](Self::finish), but returns the full evaluation
    /// breakdown for reporting.
    pub fn finish_report(&mut self) -> Result<ChiSquaredReport, CheckError> {
        if self.phase == Phase::Finished {
            return Err(CheckError::ContextConsumed);
        }

        let report = chi_squared::evaluate(&self.histogram)?;
        self.phase = Phase::Finished;
        Ok(report)
    }

    /// Returns the histogram accumulated so far.
    #[inline]
    pub fn histogram(&self) -> &NibbleHistogram {
        &self.histogram
    }
}

impl Default for CheckContext {
    fn default() -> Self {
        Self::new()
    }
}
