//! Optimized enumeration, O(n²)
//!
//! Same enumeration order and strict-`>` update as the brute-force solver,
//! but the inner O(n) summation is replaced by a running sum that is carried
//! forward as the end index advances. Produces the identical
//! `(sum, start, end)` triple as [`super::brute_force`] for every input,
//! tie-break included; this equivalence is the defining correctness property
//! linking the two and is enforced by property tests.

use super::{ensure_non_empty, SubarrayResult};
use crate::Result;

/// Find the maximum contiguous-subarray sum with incremental range sums.
///
/// Time complexity: O(n²). Space complexity: O(1).
///
/// # Errors
///
/// Returns [`crate::Error::EmptyInput`] if `values` is empty.
pub fn optimized_enumeration(values: &[i64]) -> Result<SubarrayResult> {
    ensure_non_empty(values)?;

    let mut best = SubarrayResult::new(values[0], 0, 0);

    for start in 0..values.len() {
        let mut sum = 0_i64;
        for (end, &value) in values.iter().enumerate().skip(start) {
            sum += value;

            if sum > best.sum() {
                best = SubarrayResult::new(sum, start, end);
            }
        }
    }

    Ok(best)
}
