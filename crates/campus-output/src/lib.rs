//! `campus-output`: simulation output writers for the `campus` crowd
//! simulation.
//!
//! | Backend | Files created                                        |
//! |---------|------------------------------------------------------|
//! | CSV     | `student_snapshots.csv`, `cycle_summaries.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `campus_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use campus_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CycleSummaryRow, StudentSnapshotRow};
pub use writer::OutputWriter;
