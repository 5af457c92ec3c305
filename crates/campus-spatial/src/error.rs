//! Spatial-subsystem error type.

use thiserror::Error;

use campus_core::{ClassroomId, Coord};

/// Errors produced by `campus-spatial`.
///
/// An unreachable goal is not an error: searches report it as an empty path.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// Coordinate outside the grid.  Callers are expected to pre-validate, so
    /// this usually indicates a programming error.
    #[error("coordinate ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    /// A search start off the grid, or a goal off the grid or on a wall.
    #[error("{0} is not a usable search endpoint")]
    InvalidInput(Coord),

    #[error("classroom {0} not found in map")]
    ClassroomNotFound(ClassroomId),

    #[error("no classroom id left below the invalid sentinel")]
    ClassroomIdsExhausted,

    #[error("{name} of {value} exceeds the supported grid size")]
    DimensionTooLarge { name: &'static str, value: u32 },

    #[error("raster error: {0}")]
    Raster(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
