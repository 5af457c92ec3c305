//! Plain data row types written by output backends.

/// One student's position at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentSnapshotRow {
    pub student_id: u32,
    pub tick:       u64,
    pub x:          i32,
    pub y:          i32,
    /// Cells still queued; `0` when idle.
    pub path_len:   u32,
}

/// Outcome of one class change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummaryRow {
    pub tick:        u64,
    pub cycle:       u32,
    pub routed:      u64,
    pub unreachable: u64,
    pub skipped:     u64,
    /// Wall-clock routing time.
    pub millis:      u64,
}
