//! CSV timetable loader.
//!
//! # CSV format
//!
//! One row per (student, cycle) pair:
//!
//! ```csv
//! student_id,cycle,classroom_id
//! 0,0,3
//! 0,1,1
//! 1,0,2
//! 1,1,2
//! ```
//!
//! Rows may appear in any order.  Each student's cycles must run from `0`
//! without gaps; students absent from the file get an empty timetable.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use campus_core::ClassroomId;

use crate::{AgentError, AgentResult, Timetable};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TimetableRecord {
    student_id:   u32,
    cycle:        u32,
    classroom_id: u16,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load per-student timetables from a CSV file.
///
/// Returns a `Vec` of length `student_count`, indexed by `StudentId`.
pub fn load_timetables_csv(path: &Path, student_count: usize) -> AgentResult<Vec<Timetable>> {
    let file = std::fs::File::open(path)?;
    load_timetables_reader(file, student_count)
}

/// Like [`load_timetables_csv`] but accepts any `Read` source.
///
/// # Errors
///
/// [`AgentError::Parse`] for malformed rows, a `student_id` outside
/// `0..student_count`, a repeated `(student_id, cycle)` pair, or a gap in a
/// student's cycles.
pub fn load_timetables_reader<R: Read>(reader: R, student_count: usize) -> AgentResult<Vec<Timetable>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_student: HashMap<u32, HashMap<u32, ClassroomId>> = HashMap::new();
    let mut rows = 0usize;

    for result in csv_reader.deserialize::<TimetableRecord>() {
        let row = result.map_err(|e| AgentError::Parse(e.to_string()))?;
        if row.student_id as usize >= student_count {
            return Err(AgentError::Parse(format!(
                "student_id {} out of range (population is {student_count})",
                row.student_id
            )));
        }
        let cycles = by_student.entry(row.student_id).or_default();
        if cycles.insert(row.cycle, ClassroomId(row.classroom_id)).is_some() {
            return Err(AgentError::Parse(format!(
                "duplicate entry for student {} cycle {}",
                row.student_id, row.cycle
            )));
        }
        rows += 1;
    }

    let mut timetables = Vec::with_capacity(student_count);
    for i in 0..student_count as u32 {
        let Some(mut cycles) = by_student.remove(&i) else {
            timetables.push(Timetable::default());
            continue;
        };
        let classes = (0..cycles.len() as u32)
            .map(|c| {
                cycles.remove(&c).ok_or_else(|| {
                    AgentError::Parse(format!("student {i} has no entry for cycle {c}"))
                })
            })
            .collect::<AgentResult<Vec<_>>>()?;
        timetables.push(Timetable::new(classes));
    }

    debug!(rows, students = student_count, "loaded timetables");
    Ok(timetables)
}
