//! Progress observer for long-running sweeps
//!
//! Progress feedback is a cross-cutting concern: it is modelled as an
//! optional callback interface invoked by the harness, never as a hidden
//! side effect of the algorithm functions themselves. All methods have
//! empty default bodies so implementors opt into exactly the events they
//! care about.

use super::BenchmarkRecord;

/// Callback interface the harness invokes as a sweep progresses.
pub trait ProgressObserver {
    /// Called once before any input is generated.
    fn on_sweep_started(&mut self, sizes: &[usize]) {
        let _ = sizes;
    }

    /// Called after each timed algorithm run completes.
    fn on_run_completed(&mut self, record: &BenchmarkRecord) {
        let _ = record;
    }

    /// Called after all algorithms run on a size agreed on the maximum sum.
    fn on_size_verified(&mut self, size: usize, sum: i64) {
        let _ = (size, sum);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}
