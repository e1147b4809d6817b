//! Entropy Health CLI
//!
//! Command-line harness for exercising the health test. Checks the
//! contents of a file in bounded chunks, or generates random trial
//! buffers (optionally with an injected bias) and reports how many the
//! test flags. This is a consumer of the two library entry points only;
//! the verdict policy here (counting and exiting nonzero) is an
//! example, not part of the test itself.

use clap::Parser;
use entropy_health::{check_buffer, Verdict, MAX_LEN_BYTES, MIN_LEN_BYTES};
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Online chi-squared health test for raw entropy source output.
#[derive(Debug, Parser)]
#[command(name = "entropy-health", version)]
struct Args {
    /// File whose bytes should be checked, in 32 KiB chunks.
    /// When omitted, runs random trials instead.
    file: Option<PathBuf>,

    /// Number of trial buffers to generate and check.
    #[arg(long, default_value_t = 1000)]
    trials: usize,

    /// Length of each trial buffer in bytes.
    #[arg(long, default_value_t = 512)]
    len: usize,

    /// Pin the lowest bit of every other byte of each trial buffer,
    /// simulating a source with a stuck bit.
    #[arg(long)]
    bias: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Entropy Health v{}", entropy_health::VERSION);

    let args = Args::parse();

    let flagged = match args.file {
        Some(path) => check_file(&path),
        None => run_trials(args.trials, args.len, args.bias),
    };

    if flagged > 0 {
        std::process::exit(1);
    }
}

/// Checks a file chunk by chunk; returns the number of flagged chunks.
fn check_file(path: &Path) -> usize {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            std::process::exit(2);
        }
    };

    let mut flagged = 0;
    let mut checked = 0;

    for (i, chunk) in data.chunks(MAX_LEN_BYTES).enumerate() {
        if chunk.len() < MIN_LEN_BYTES {
            warn!(
                chunk = i,
                bytes = chunk.len(),
                "trailing chunk too short to check, skipping"
            );
            continue;
        }

        match check_buffer(chunk) {
            Ok(Verdict::Pass) => checked += 1,
            Ok(Verdict::BadRandomness) => {
                warn!(chunk = i, "chunk flagged as bad randomness");
                checked += 1;
                flagged += 1;
            }
            Err(e) => {
                eprintln!("Check failed on chunk {}: {}", i, e);
                std::process::exit(2);
            }
        }
    }

    info!(
        "Checked {} chunks of {}: {} flagged",
        checked,
        path.display(),
        flagged
    );
    flagged
}

/// Runs random trials; returns the number of flagged buffers.
fn run_trials(trials: usize, len: usize, bias: bool) -> usize {
    info!(trials, len, bias, "Generating trial buffers from ChaCha20");

    let mut rng = ChaCha20Rng::from_entropy();
    let mut buf = vec![0u8; len];
    let mut flagged = 0;

    for i in 0..trials {
        rng.fill_bytes(&mut buf);
        if bias {
            for byte in buf.iter_mut().step_by(2) {
                *byte &= 0xFE;
            }
        }

        match check_buffer(&buf) {
            Ok(Verdict::Pass) => {}
            Ok(Verdict::BadRandomness) => flagged += 1,
            Err(e) => {
                eprintln!("Trial {} failed: {}", i, e);
                std::process::exit(2);
            }
        }
    }

    info!(
        "Flagged {} of {} trial buffers ({:.3}%)",
        flagged,
        trials,
        100.0 * flagged as f64 / trials.max(1) as f64
    );
    flagged
}
