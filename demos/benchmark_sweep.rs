//! Benchmark sweep demo
//!
//! Runs the three solvers across increasing input sizes, verifies that they
//! agree on the maximum sum, and prints a per-size timing summary showing
//! the O(n³) / O(n²) / O(n) separation.
//!
//! Run with: cargo run --example benchmark_sweep --release

use anyhow::Result;
use maxsub::harness::{BenchmarkHarness, BenchmarkRecord, ProgressObserver};
use maxsub::report::render_summary;
use maxsub::solver::Algorithm;
use tracing_subscriber::EnvFilter;

struct ConsoleProgress;

impl ProgressObserver for ConsoleProgress {
    fn on_sweep_started(&mut self, sizes: &[usize]) {
        println!("sweeping {} input sizes: {sizes:?}", sizes.len());
        println!();
    }

    fn on_run_completed(&mut self, record: &BenchmarkRecord) {
        println!(
            "  {} ({}) on {} elements: {:.4} ms",
            record.algorithm(),
            record.algorithm().complexity(),
            record.input_size(),
            record.elapsed().as_secs_f64() * 1000.0,
        );
    }

    fn on_size_verified(&mut self, size: usize, sum: i64) {
        println!("  verified: all algorithms agree on sum {sum} at size {size}");
        println!();
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Worked example first: the classic nine-element input.
    let values = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    println!("example input: {values:?}");
    for algorithm in Algorithm::ALL {
        let result = algorithm.solve(&values)?;
        println!(
            "  {} ({}): {} -> {:?}",
            algorithm,
            algorithm.complexity(),
            result,
            result.slice(&values),
        );
    }
    println!();

    // Full sweep, brute force skipped above the threshold.
    let harness = BenchmarkHarness::builder()
        .sizes(vec![10, 50, 100, 200, 500, 1000])
        .seed(42)
        .skip_threshold(500)
        .build()?;

    let records = harness.run_with_observer(&mut ConsoleProgress)?;

    println!("summary");
    println!("-------");
    print!("{}", render_summary(&records));

    println!();
    println!("records as JSON (external reporting contract):");
    println!("{}", serde_json::to_string_pretty(&records[..2.min(records.len())])?);

    Ok(())
}
