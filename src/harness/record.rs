//! Benchmark record - one timed algorithm run

use crate::solver::{Algorithm, SubarrayResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One timed run of one algorithm over one generated input.
///
/// Records are created per `(size, algorithm)` pair, collected into an
/// ordered sequence for the whole sweep, and handed to the reporting
/// collaborator. The sequence order is deterministic: input `sizes` order,
/// then [`Algorithm::ALL`] order within a size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchmarkRecord {
    input_size: usize,
    algorithm: Algorithm,
    elapsed: Duration,
    result: SubarrayResult,
    recorded_at: DateTime<Utc>,
}

impl BenchmarkRecord {
    /// Create a new record with the current timestamp.
    #[must_use]
    pub fn new(
        input_size: usize,
        algorithm: Algorithm,
        elapsed: Duration,
        result: SubarrayResult,
    ) -> Self {
        Self {
            input_size,
            algorithm,
            elapsed,
            result,
            recorded_at: Utc::now(),
        }
    }

    /// Get the size of the generated input this run was timed on.
    #[must_use]
    pub const fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the algorithm variant that produced this record.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Get the wall-clock time of the run (mean over repeats when repeat > 1).
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the solver result of the run.
    #[must_use]
    pub const fn result(&self) -> SubarrayResult {
        self.result
    }

    /// Get the wall-clock timestamp at which the record was created.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
