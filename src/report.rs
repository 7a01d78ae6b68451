//! Human-readable sweep summaries
//!
//! The programmatic surface of a sweep is the ordered record sequence;
//! anything fancier (charts, tables, exports) is an external reporting
//! collaborator consuming that same sequence. This module renders the plain
//! text summary: per size, each algorithm's elapsed time and the verified
//! maximum sum.

use crate::harness::BenchmarkRecord;
use std::fmt::Write;

/// Render an ordered record sequence as a plain text summary.
///
/// Records are grouped by input size in their existing order; an absent
/// brute-force line means the run was skipped by the threshold guard.
#[must_use]
pub fn render_summary(records: &[BenchmarkRecord]) -> String {
    let mut out = String::new();
    let mut current_size: Option<usize> = None;

    for record in records {
        if current_size != Some(record.input_size()) {
            if current_size.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "input size {}", record.input_size());
            current_size = Some(record.input_size());
        }

        let _ = writeln!(
            out,
            "  {:<22} {:>10.4} ms   {} ({})",
            record.algorithm().name(),
            record.elapsed().as_secs_f64() * 1000.0,
            record.result(),
            record.algorithm().complexity(),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Algorithm, SubarrayResult};
    use std::time::Duration;

    fn record(size: usize, algorithm: Algorithm) -> BenchmarkRecord {
        BenchmarkRecord::new(
            size,
            algorithm,
            Duration::from_micros(1500),
            SubarrayResult::new(6, 3, 6),
        )
    }

    #[test]
    fn test_summary_groups_by_size() {
        let records = vec![
            record(10, Algorithm::BruteForce),
            record(10, Algorithm::OptimizedEnumeration),
            record(50, Algorithm::DynamicProgramming),
        ];
        let summary = render_summary(&records);

        assert!(summary.contains("input size 10"));
        assert!(summary.contains("input size 50"));
        assert!(summary.contains("brute force"));
        assert!(summary.contains("dynamic programming"));
        assert!(summary.contains("sum 6 over [3, 6]"));
    }

    #[test]
    fn test_summary_shows_elapsed_millis() {
        let summary = render_summary(&[record(10, Algorithm::DynamicProgramming)]);
        assert!(summary.contains("1.5000 ms"));
    }

    #[test]
    fn test_empty_records_render_empty_summary() {
        assert!(render_summary(&[]).is_empty());
    }
}
