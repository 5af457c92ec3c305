//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `student_snapshots.csv`
//! - `cycle_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CycleSummaryRow, OutputResult, StudentSnapshotRow};

pub const SNAPSHOT_FILE: &str = "student_snapshots.csv";
pub const SUMMARY_FILE: &str = "cycle_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files, and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["student_id", "tick", "x", "y", "path_len"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record(["tick", "cycle", "routed", "unreachable", "skipped", "millis"])?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[StudentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.student_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.path_len.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.cycle.to_string(),
            row.routed.to_string(),
            row.unreachable.to_string(),
            row.skipped.to_string(),
            row.millis.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
