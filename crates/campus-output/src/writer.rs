//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CycleSummaryRow, OutputResult, StudentSnapshotRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of student snapshots.
    fn write_snapshots(&mut self, rows: &[StudentSnapshotRow]) -> OutputResult<()>;

    /// Write one class-change summary row.
    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
