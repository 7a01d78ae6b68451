//! Comprehensive property-based tests for maxsub
//!
//! Mathematical invariants of the solver contract:
//! - Returned range is non-empty and within bounds
//! - Summing the returned range reproduces the reported sum exactly
//! - The reported sum really is maximal (checked against brute force)
//! - Solvers are pure: repeated calls yield identical results
//!
//! Run with ProptestConfig::with_cases(100); brute-force cases stay small.

use maxsub::solver::{brute_force, dynamic_programming, optimized_enumeration, Algorithm};
use proptest::prelude::*;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Non-empty signed input small enough for the O(n³) solver
fn arb_small_input() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..=1000, 1..40)
}

/// Non-empty signed input for the O(n²)/O(n) solvers
fn arb_input() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..=1000, 1..400)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: range bounds satisfy 0 <= start <= end < len
    #[test]
    fn prop_range_within_bounds(values in arb_input()) {
        for solve in [optimized_enumeration, dynamic_programming] {
            let result = solve(&values).unwrap();
            prop_assert!(result.start() <= result.end());
            prop_assert!(result.end() < values.len());
        }
    }

    /// Property: summing values[start..=end] reproduces the reported sum
    #[test]
    fn prop_range_sum_reproduces_reported_sum(values in arb_input()) {
        for solve in [optimized_enumeration, dynamic_programming] {
            let result = solve(&values).unwrap();
            let reproduced: i64 = result.slice(&values).iter().sum();
            prop_assert_eq!(reproduced, result.sum());
        }
    }

    /// Property: the reported sum dominates every contiguous range
    /// (maximality, checked exhaustively on small inputs)
    #[test]
    fn prop_sum_is_maximal(values in arb_small_input()) {
        let reported = dynamic_programming(&values).unwrap().sum();

        for start in 0..values.len() {
            let mut sum = 0_i64;
            for &value in &values[start..] {
                sum += value;
                prop_assert!(sum <= reported, "range beats reported sum {}", reported);
            }
        }
    }

    /// Property: solvers are pure - two calls on the same input agree
    #[test]
    fn prop_idempotence(values in arb_small_input()) {
        for algorithm in Algorithm::ALL {
            let first = algorithm.solve(&values).unwrap();
            let second = algorithm.solve(&values).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    /// Property: brute-force bounds hold too (separate case budget, O(n³))
    #[test]
    fn prop_brute_force_invariants(values in arb_small_input()) {
        let result = brute_force(&values).unwrap();
        prop_assert!(result.start() <= result.end());
        prop_assert!(result.end() < values.len());

        let reproduced: i64 = result.slice(&values).iter().sum();
        prop_assert_eq!(reproduced, result.sum());
    }

    /// Property: result of any solver is at least the best single element
    #[test]
    fn prop_at_least_best_single_element(values in arb_input()) {
        let best_single = values.iter().copied().max().unwrap();
        for solve in [optimized_enumeration, dynamic_programming] {
            prop_assert!(solve(&values).unwrap().sum() >= best_single);
        }
    }
}
