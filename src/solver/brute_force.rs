//! Brute-force enumeration, O(n³)
//!
//! The reference implementation the other two solvers are checked against:
//! every `(start, end)` pair is examined and the range sum is recomputed from
//! scratch by explicit summation, never incrementally. When several ranges
//! tie on the maximum sum, the first one reached in increasing-start, then
//! increasing-end order wins (strict `>` update).

use super::{ensure_non_empty, SubarrayResult};
use crate::Result;

/// Find the maximum contiguous-subarray sum by exhaustive enumeration.
///
/// Time complexity: O(n³). Space complexity: O(1).
///
/// # Errors
///
/// Returns [`crate::Error::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```rust
/// use maxsub::solver::brute_force;
///
/// let result = brute_force(&[-2, 1, -3, 4, -1, 2, 1, -5, 4])?;
/// assert_eq!(result.sum(), 6);
/// assert_eq!((result.start(), result.end()), (3, 6));
/// # Ok::<(), maxsub::Error>(())
/// ```
pub fn brute_force(values: &[i64]) -> Result<SubarrayResult> {
    ensure_non_empty(values)?;

    // The single-element range (0, 0) is the first candidate in enumeration
    // order, so seeding the best with it preserves the tie-break policy.
    let mut best = SubarrayResult::new(values[0], 0, 0);

    for start in 0..values.len() {
        for end in start..values.len() {
            let mut sum = 0_i64;
            for &value in &values[start..=end] {
                sum += value;
            }

            if sum > best.sum() {
                best = SubarrayResult::new(sum, start, end);
            }
        }
    }

    Ok(best)
}
