use campus_agent::AgentError;
use campus_core::{ClassroomId, CoreError, StudentId};
use campus_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match student count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("student {student} is timetabled into unknown classroom {classroom}")]
    UnknownClassroom {
        student:   StudentId,
        classroom: ClassroomId,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
