use thiserror::Error;

use campus_core::StudentId;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("timetable parse error: {0}")]
    Parse(String),

    #[error("expected {expected} timetables, got {got}")]
    CountMismatch { expected: usize, got: usize },

    #[error("random timetables need at least one classroom")]
    NoClassrooms,

    #[error("student {0} not found")]
    StudentNotFound(StudentId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AgentResult<T> = Result<T, AgentError>;
