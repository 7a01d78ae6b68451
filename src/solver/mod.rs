//! Maximum-subarray solvers
//!
//! Three interchangeable algorithms over a slice of signed integers, each
//! returning the maximum contiguous-subarray sum and its inclusive index
//! range:
//!
//! | Algorithm | Time | Space |
//! |---|---|---|
//! | [`brute_force`] | O(n³) | O(1) |
//! | [`optimized_enumeration`] | O(n²) | O(1) |
//! | [`dynamic_programming`] | O(n) | O(1) |
//!
//! All three agree on the maximum sum for every input. Brute force and
//! optimized enumeration additionally agree on the full `(sum, start, end)`
//! triple because they share the same enumeration order and strict-`>`
//! update. Kadane's algorithm guarantees sum equality only: when several
//! ranges tie on the maximum, its reported indices may differ from the
//! enumeration pair's.

mod brute_force;
mod kadane;
mod optimized;

pub use brute_force::brute_force;
pub use kadane::dynamic_programming;
pub use optimized::optimized_enumeration;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum contiguous-subarray sum and the inclusive index range producing it.
///
/// Invariants (upheld by every solver):
/// - `sum == values[start..=end].iter().sum()`
/// - `start <= end < values.len()` (the range is never empty)
/// - `sum` is maximal over all non-empty contiguous ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubarrayResult {
    sum: i64,
    start: usize,
    end: usize,
}

impl SubarrayResult {
    /// Create a result from a sum and an inclusive index range.
    #[must_use]
    pub const fn new(sum: i64, start: usize, end: usize) -> Self {
        Self { sum, start, end }
    }

    /// Get the maximum subarray sum.
    #[must_use]
    pub const fn sum(&self) -> i64 {
        self.sum
    }

    /// Get the start index of the maximal range.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Get the end index (inclusive) of the maximal range.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Borrow the maximal range out of the input it was computed from.
    ///
    /// # Panics
    ///
    /// Panics if `values` is shorter than the input the result came from.
    #[must_use]
    pub fn slice<'a>(&self, values: &'a [i64]) -> &'a [i64] {
        &values[self.start..=self.end]
    }
}

impl fmt::Display for SubarrayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sum {} over [{}, {}]", self.sum, self.start, self.end)
    }
}

/// Algorithm variant selector.
///
/// Used by the benchmark harness to dispatch and label runs; each variant
/// maps to one of the free functions in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Explicit per-range summation, O(n³)
    BruteForce,
    /// Incremental per-start running sums, O(n²)
    OptimizedEnumeration,
    /// Kadane's single-scan algorithm, O(n)
    DynamicProgramming,
}

impl Algorithm {
    /// All variants, in benchmark execution order.
    pub const ALL: [Self; 3] = [
        Self::BruteForce,
        Self::OptimizedEnumeration,
        Self::DynamicProgramming,
    ];

    /// Human-readable algorithm name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute force",
            Self::OptimizedEnumeration => "optimized enumeration",
            Self::DynamicProgramming => "dynamic programming",
        }
    }

    /// Asymptotic time complexity of the variant.
    #[must_use]
    pub const fn complexity(self) -> &'static str {
        match self {
            Self::BruteForce => "O(n³)",
            Self::OptimizedEnumeration => "O(n²)",
            Self::DynamicProgramming => "O(n)",
        }
    }

    /// Run this variant over `values`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `values` is empty.
    pub fn solve(self, values: &[i64]) -> Result<SubarrayResult> {
        match self {
            Self::BruteForce => brute_force(values),
            Self::OptimizedEnumeration => optimized_enumeration(values),
            Self::DynamicProgramming => dynamic_programming(values),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared empty-input guard; all three solvers apply the same policy.
pub(crate) fn ensure_non_empty(values: &[i64]) -> Result<()> {
    if values.is_empty() {
        Err(Error::EmptyInput)
    } else {
        Ok(())
    }
}
