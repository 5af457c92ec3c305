//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use campus_agent::StudentStore;
use campus_core::Tick;
use campus_sim::{CycleReport, SimObserver};

use crate::row::{CycleSummaryRow, StudentSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes student snapshots and class-change
/// summaries to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_cycle_change(&mut self, tick: Tick, report: &CycleReport) {
        let row = CycleSummaryRow {
            tick:        tick.0,
            cycle:       report.cycle,
            routed:      report.routed as u64,
            unreachable: report.unreachable as u64,
            skipped:     report.skipped as u64,
            millis:      report.millis() as u64,
        };
        let result = self.writer.write_cycle_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, students: &StudentStore) {
        let rows: Vec<StudentSnapshotRow> = students
            .iter()
            .map(|s| StudentSnapshotRow {
                student_id: s.id.0,
                tick:       tick.0,
                x:          s.position.x,
                y:          s.position.y,
                path_len:   s.remaining() as u32,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
