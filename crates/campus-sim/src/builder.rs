//! Fluent builder for constructing a [`Sim`].

use campus_agent::StudentStore;
use campus_core::{Coord, SimConfig};
use campus_spatial::{GridMap, Router};

use crate::{Sim, SimError, SimResult, validate_config};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: timers, final cycle, total ticks, …
/// - [`GridMap`]: e.g. from [`campus_spatial::load_from_rgb`]
/// - [`StudentStore`]: from [`campus_agent::StudentStoreBuilder`]
/// - `R: Router`: the routing algorithm (e.g. [`campus_spatial::AStarRouter`])
///
/// # Optional inputs
///
/// | Method                   | Default                                     |
/// |--------------------------|---------------------------------------------|
/// | `.initial_positions(v)`  | Each student seated in its first classroom  |
pub struct SimBuilder<R: Router> {
    config:    SimConfig,
    map:       GridMap,
    students:  StudentStore,
    positions: Option<Vec<Coord>>,
    router:    R,
}

impl<R: Router> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, map: GridMap, students: StudentStore, router: R) -> Self {
        Self { config, map, students, positions: None, router }
    }

    /// Supply explicit starting cells (must be length `student_count`).
    ///
    /// Skips the default seating; no first-cycle seats are handed out.
    pub fn initial_positions(mut self, positions: Vec<Coord>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place students, and return a ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`] for an unusable config.
    /// - [`SimError::UnknownClassroom`] if any timetable names a classroom
    ///   the map does not have.
    /// - [`SimError::AgentCountMismatch`] if `initial_positions` has the
    ///   wrong length.
    pub fn build(self) -> SimResult<Sim<R>> {
        validate_config(&self.config)?;

        for student in self.students.iter() {
            if let Some(classroom) = student.timetable.iter().find(|&id| self.map.classroom(id).is_none()) {
                return Err(SimError::UnknownClassroom { student: student.id, classroom });
            }
        }

        let mut sim = Sim {
            clock:     self.config.make_clock(),
            config:    self.config,
            map:       self.map,
            students:  self.students,
            router:    self.router,
            evacuated: false,
        };

        match self.positions {
            Some(p) => {
                if p.len() != sim.students.count() {
                    return Err(SimError::AgentCountMismatch {
                        expected: sim.students.count(),
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                for (student, at) in sim.students.iter_mut().zip(p) {
                    student.position = at;
                }
            }
            None => sim.populate()?,
        }

        Ok(sim)
    }
}
