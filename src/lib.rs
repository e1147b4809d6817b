//! Entropy Health Library
//!
//! An online statistical health test for raw bytes drawn from an
//! entropy source (hardware RNG, noise source, or similar). It catches
//! gross defects (stuck bits, fixed patterns, biased bits) before the
//! bytes are trusted for cryptographic use.
//!
//! The test is a chi-squared goodness-of-fit check on the frequency of
//! nibble values: each byte contributes its high and low nibble to a
//! 16-bin histogram, and the finished histogram is compared against a
//! uniform null hypothesis at 15 degrees of freedom.
//!
//! # Architecture
//!
//! ```text
//! check_buffer ──┐
//!                ├──▶ CheckContext (add) ──▶ chi_squared (finish)
//! streaming  ────┘
//! ```
//!
//! # Design Principles
//!
//! - **Classification only**: the crate never generates, seeds, mixes,
//!   or repairs randomness; it returns a verdict for the caller to act on
//! - **No shared state**: every check owns its own context, so
//!   concurrent checks need no locking
//! - **Fail as values**: length and misuse failures are returned errors,
//!   never panics or aborts
//! - **No cryptographic claims**: this is a sanity check against obvious
//!   breakage, not a proof of entropy
//!
//! # One-shot check
//!
//! ```
//! use entropy_health::{check_buffer, Verdict};
//!
//! let stuck = [0u8; 32];
//! assert_eq!(check_buffer(&stuck), Ok(Verdict::BadRandomness));
//! ```
//!
//! # Streaming
//!
//! ```
//! use entropy_health::{CheckContext, Verdict};
//!
//! let mut ctx = CheckContext::new();
//! for byte in 0u8..=255 {
//!     ctx.add(byte).unwrap();
//! }
//! assert_eq!(ctx.finish(), Ok(Verdict::Pass));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod check;
pub mod chi_squared;
pub mod histogram;
pub mod stream;
pub mod verdict;

// Re-export commonly used items at crate root
pub use check::{check_buffer, MAX_LEN_BYTES, MIN_LEN_BYTES};
pub use chi_squared::{evaluate, ChiSquaredReport, CHI_SQUARED_THRESHOLD, MIN_SAMPLES};
pub use histogram::{NibbleHistogram, BIN_COUNT, MAX_SAMPLES};
pub use stream::CheckContext;
pub use verdict::{CheckError, Verdict};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
