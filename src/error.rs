//! Error types for Maxsub
//!
//! All errors are local validation failures: the core has no I/O, network,
//! or external resource, so there is no retry logic. Errors carry enough
//! context (input size, involved algorithms) to reproduce the failure.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Maxsub error types
#[derive(Error, Debug)]
pub enum Error {
    /// Empty input sequence (maximum subarray is defined over non-empty ranges)
    #[error("empty input: the maximum subarray of a zero-length sequence is undefined")]
    EmptyInput,

    /// Algorithms disagree on the maximum sum (critical bug, fatal to the sweep)
    #[error("result mismatch at input size {size}: {baseline} != {divergent}\nAlgorithms must agree on the maximum sum for every input. Please report this issue.")]
    ResultMismatch {
        /// Input size at which the divergence occurred
        size: usize,
        /// First algorithm's result, formatted as "name = sum"
        baseline: String,
        /// Divergent algorithm's result, formatted as "name = sum"
        divergent: String,
    },

    /// Rejected harness configuration
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
