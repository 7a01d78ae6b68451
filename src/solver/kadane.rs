//! Dynamic programming (Kadane's algorithm), O(n)
//!
//! Single left-to-right scan tracking the best running sum ending at each
//! position. The best-seen result is updated with a strict `>` comparison
//! *before* the negative-reset check: when the running sum drops below zero
//! it is reset to zero and the pending start marker moves past the current
//! position. The strict update means an earlier equally-good range is kept
//! over a later one; on inputs with several maximal ranges the reported
//! indices may therefore differ from the enumeration solvers' (the sum never
//! does).

use super::{ensure_non_empty, SubarrayResult};
use crate::Result;

/// Find the maximum contiguous-subarray sum in a single scan.
///
/// Time complexity: O(n). Space complexity: O(1).
///
/// # Errors
///
/// Returns [`crate::Error::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```rust
/// use maxsub::solver::dynamic_programming;
///
/// let result = dynamic_programming(&[-2, 1, -3, 4, -1, 2, 1, -5, 4])?;
/// assert_eq!(result.sum(), 6);
/// assert_eq!((result.start(), result.end()), (3, 6));
/// # Ok::<(), maxsub::Error>(())
/// ```
pub fn dynamic_programming(values: &[i64]) -> Result<SubarrayResult> {
    ensure_non_empty(values)?;

    let mut best = SubarrayResult::new(values[0], 0, 0);
    let mut running = 0_i64;
    let mut pending_start = 0_usize;

    for (i, &value) in values.iter().enumerate() {
        running += value;

        if running > best.sum() {
            best = SubarrayResult::new(running, pending_start, i);
        }

        if running < 0 {
            running = 0;
            pending_start = i + 1;
        }
    }

    Ok(best)
}
