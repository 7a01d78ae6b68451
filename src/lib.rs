//! # Maxsub: Maximum-Subarray Algorithm Suite
//!
//! Maxsub implements the maximum contiguous-subarray-sum problem with three
//! interchangeable algorithms spanning three complexity classes, plus a
//! benchmark harness that times each algorithm across input sizes and asserts
//! that they agree on the computed sum.
//!
//! ## Algorithms
//!
//! - **Brute force**: explicit per-range summation, O(n³) time, O(1) space
//! - **Optimized enumeration**: incremental running sums, O(n²) time
//! - **Dynamic programming** (Kadane's algorithm): single scan, O(n) time
//!
//! All three are pure functions over a slice of signed integers and return
//! the maximal sum together with the inclusive index range that produces it.
//! Cross-algorithm sum agreement is the defining correctness property; the
//! harness treats any divergence as a fatal [`Error::ResultMismatch`].
//!
//! ## Example
//!
//! ```rust
//! use maxsub::solver::{dynamic_programming, SubarrayResult};
//!
//! let values = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
//! let result = dynamic_programming(&values)?;
//! assert_eq!(result, SubarrayResult::new(6, 3, 6));
//! # Ok::<(), maxsub::Error>(())
//! ```
//!
//! ## Benchmark sweep
//!
//! ```rust
//! use maxsub::harness::BenchmarkHarness;
//!
//! let harness = BenchmarkHarness::builder()
//!     .sizes(vec![10, 50])
//!     .seed(42)
//!     .skip_threshold(500)
//!     .build()?;
//!
//! let records = harness.run()?;
//! assert_eq!(records.len(), 6); // 2 sizes x 3 algorithms
//! # Ok::<(), maxsub::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod harness;
pub mod report;
pub mod solver;

pub use error::{Error, Result};
pub use solver::{Algorithm, SubarrayResult};
