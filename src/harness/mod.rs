//! Benchmark harness
//!
//! Drives the solvers across a set of input sizes, times each run, and
//! checks that all algorithms that were run on a given input agree on the
//! maximum sum. Any disagreement is a correctness failure and fails the
//! sweep with [`Error::ResultMismatch`], never a warning.
//!
//! The harness owns the random source: inputs are sampled uniformly from a
//! bounded range using a seeded [`StdRng`], so a sweep is reproducible from
//! its configuration alone. Configuration is explicit, not ambient; it is
//! assembled through [`BenchmarkHarness::builder`] and validated at build
//! time.
//!
//! ## Usage
//!
//! ```rust
//! use maxsub::harness::BenchmarkHarness;
//!
//! let harness = BenchmarkHarness::builder()
//!     .sizes(vec![10, 50])
//!     .seed(7)
//!     .skip_threshold(500)
//!     .build()?;
//!
//! for record in harness.run()? {
//!     println!("{} @ {}: {:?}", record.algorithm(), record.input_size(), record.elapsed());
//! }
//! # Ok::<(), maxsub::Error>(())
//! ```

mod observer;
mod record;

pub use observer::{NoopObserver, ProgressObserver};
pub use record::BenchmarkRecord;

use crate::solver::Algorithm;
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::Instant;
use tracing::{debug, info};

/// Default bounded sampling range for generated inputs.
pub const DEFAULT_VALUE_RANGE: RangeInclusive<i64> = -100..=100;

/// Default input size above which the O(n³) brute-force run is skipped.
pub const DEFAULT_SKIP_THRESHOLD: usize = 500;

/// Benchmark sweep driver with validated configuration.
///
/// Fully synchronous and single-threaded: every algorithm for a given size
/// runs against the same generated sequence, in isolation, and records are
/// collected in deterministic `(size, algorithm)` order.
#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    sizes: Vec<usize>,
    seed: u64,
    skip_threshold: usize,
    repeat: u32,
    value_range: RangeInclusive<i64>,
}

impl BenchmarkHarness {
    /// Create a new harness builder.
    #[must_use]
    pub fn builder() -> BenchmarkHarnessBuilder {
        BenchmarkHarnessBuilder::default()
    }

    /// Get the configured input sizes, in execution order.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Get the RNG seed the sweep is reproducible from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the brute-force skip threshold.
    #[must_use]
    pub const fn skip_threshold(&self) -> usize {
        self.skip_threshold
    }

    /// Run the sweep without progress reporting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResultMismatch`] if the algorithms run on a size
    /// disagree on the maximum sum.
    pub fn run(&self) -> Result<Vec<BenchmarkRecord>> {
        self.run_with_observer(&mut NoopObserver)
    }

    /// Run the sweep, invoking `observer` as it progresses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResultMismatch`] if the algorithms run on a size
    /// disagree on the maximum sum.
    pub fn run_with_observer(
        &self,
        observer: &mut dyn ProgressObserver,
    ) -> Result<Vec<BenchmarkRecord>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut records = Vec::new();

        info!(sizes = ?self.sizes, seed = self.seed, "starting benchmark sweep");
        observer.on_sweep_started(&self.sizes);

        for &size in &self.sizes {
            let values: Vec<i64> = (0..size)
                .map(|_| rng.gen_range(self.value_range.clone()))
                .collect();
            debug!(size, "generated input");

            let mut size_records = Vec::with_capacity(Algorithm::ALL.len());
            for algorithm in Algorithm::ALL {
                if algorithm == Algorithm::BruteForce && size > self.skip_threshold {
                    debug!(
                        size,
                        threshold = self.skip_threshold,
                        "skipping brute force (cubic blowup guard)"
                    );
                    continue;
                }

                let record = self.timed_run(algorithm, &values)?;
                debug!(
                    size,
                    algorithm = %record.algorithm(),
                    elapsed_us = u64::try_from(record.elapsed().as_micros()).unwrap_or(u64::MAX),
                    "run completed"
                );
                observer.on_run_completed(&record);
                size_records.push(record);
            }

            let sum = verify_agreement(size, &size_records)?;
            info!(size, sum, "results verified");
            observer.on_size_verified(size, sum);
            records.extend(size_records);
        }

        Ok(records)
    }

    /// Time a single algorithm over `values`, averaging when repeat > 1.
    fn timed_run(&self, algorithm: Algorithm, values: &[i64]) -> Result<BenchmarkRecord> {
        let start = Instant::now();
        let mut result = algorithm.solve(values)?;
        for _ in 1..self.repeat {
            result = algorithm.solve(values)?;
        }
        let elapsed = start.elapsed() / self.repeat;

        Ok(BenchmarkRecord::new(values.len(), algorithm, elapsed, result))
    }
}

/// Compare the sums of all algorithms that actually ran on one size.
fn verify_agreement(size: usize, records: &[BenchmarkRecord]) -> Result<i64> {
    let mut iter = records.iter();
    let Some(baseline) = iter.next() else {
        return Err(Error::InvalidConfiguration(format!(
            "no algorithm ran at input size {size}"
        )));
    };

    for record in iter {
        if record.result().sum() != baseline.result().sum() {
            return Err(Error::ResultMismatch {
                size,
                baseline: format!("{} = {}", baseline.algorithm(), baseline.result().sum()),
                divergent: format!("{} = {}", record.algorithm(), record.result().sum()),
            });
        }
    }

    Ok(baseline.result().sum())
}

/// Builder for [`BenchmarkHarness`].
#[derive(Debug, Clone)]
pub struct BenchmarkHarnessBuilder {
    sizes: Vec<usize>,
    seed: u64,
    skip_threshold: usize,
    repeat: u32,
    value_range: RangeInclusive<i64>,
}

impl Default for BenchmarkHarnessBuilder {
    fn default() -> Self {
        Self {
            sizes: Vec::new(),
            seed: 0,
            skip_threshold: DEFAULT_SKIP_THRESHOLD,
            repeat: 1,
            value_range: DEFAULT_VALUE_RANGE,
        }
    }
}

impl BenchmarkHarnessBuilder {
    /// Set the input sizes to sweep, in execution order.
    #[must_use]
    pub fn sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Set the RNG seed (same seed + same configuration = same records).
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the input size above which brute force is skipped.
    #[must_use]
    pub const fn skip_threshold(mut self, threshold: usize) -> Self {
        self.skip_threshold = threshold;
        self
    }

    /// Set the invocation count per run; elapsed time is the mean over repeats.
    #[must_use]
    pub const fn repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    /// Set the inclusive sampling range for generated values.
    #[must_use]
    pub fn value_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.value_range = range;
        self
    }

    /// Validate the configuration and build the harness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if any size is zero, the
    /// repeat count is zero, or the value range is empty.
    pub fn build(self) -> Result<BenchmarkHarness> {
        if let Some(position) = self.sizes.iter().position(|&size| size == 0) {
            return Err(Error::InvalidConfiguration(format!(
                "input sizes must be non-zero (sizes[{position}] is 0)"
            )));
        }
        if self.repeat == 0 {
            return Err(Error::InvalidConfiguration(
                "repeat count must be at least 1".to_string(),
            ));
        }
        if self.value_range.is_empty() {
            return Err(Error::InvalidConfiguration(format!(
                "value range {:?} is empty (lower bound must not exceed upper bound)",
                self.value_range
            )));
        }

        Ok(BenchmarkHarness {
            sizes: self.sizes,
            seed: self.seed,
            skip_threshold: self.skip_threshold,
            repeat: self.repeat,
            value_range: self.value_range,
        })
    }
}
