//! Fluent builder for a [`StudentStore`].
//!
//! # Usage
//!
//! ```rust
//! use campus_agent::StudentStoreBuilder;
//! use campus_core::ClassroomId;
//!
//! let rooms = [ClassroomId(1), ClassroomId(2), ClassroomId(3)];
//! let store = StudentStoreBuilder::new(250, /*seed=*/ 42)
//!     .random_timetables(&rooms, 7)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count(), 250);
//! assert!(store.iter().all(|s| s.timetable.len() == 7));
//! ```
//!
//! Every student starts at `Coord::default()` with an empty path; the
//! simulation places them at their first seat.

use campus_core::{AgentRng, ClassroomId, Coord, StudentId};

use crate::{AgentError, AgentResult, Student, StudentStore, Timetable};

/// First names drawn from when no custom list is given.
pub const DEFAULT_FIRST_NAMES: &[&str] = &[
    "Alex", "Blake", "Casey", "Dana", "Eli", "Frankie", "Gray", "Harper",
    "Indy", "Jordan", "Kai", "Logan", "Morgan", "Noel", "Parker", "Quinn",
    "Riley", "Sage", "Taylor", "Val",
];

/// Last names drawn from when no custom list is given.
pub const DEFAULT_LAST_NAMES: &[&str] = &[
    "Abbott", "Brooks", "Chen", "Diaz", "Evans", "Fischer", "Garcia", "Hughes",
    "Ito", "Jensen", "Khan", "Lopez", "Moreau", "Nakamura", "Okafor", "Patel",
    "Rossi", "Silva", "Tran", "Walsh",
];

enum TimetableSource {
    /// Draw `cycles` classrooms per student, with replacement.
    Random { classrooms: Vec<ClassroomId>, cycles: usize },
    /// One pre-built timetable per student.
    Given(Vec<Timetable>),
}

pub struct StudentStoreBuilder {
    count:       usize,
    seed:        u64,
    timetables:  TimetableSource,
    first_names: Vec<String>,
    last_names:  Vec<String>,
}

impl StudentStoreBuilder {
    /// Create a builder for `count` students using `seed` as the global RNG
    /// seed.  Without further configuration every timetable is empty.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            timetables:  TimetableSource::Given(vec![Timetable::default(); count]),
            first_names: DEFAULT_FIRST_NAMES.iter().map(|s| s.to_string()).collect(),
            last_names:  DEFAULT_LAST_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Give each student `cycles` classrooms drawn uniformly from
    /// `classrooms`, with replacement.
    pub fn random_timetables(mut self, classrooms: &[ClassroomId], cycles: usize) -> Self {
        self.timetables = TimetableSource::Random { classrooms: classrooms.to_vec(), cycles };
        self
    }

    /// Use pre-built timetables (e.g. from the CSV loader), indexed by
    /// `StudentId`.
    pub fn timetables(mut self, timetables: Vec<Timetable>) -> Self {
        self.timetables = TimetableSource::Given(timetables);
        self
    }

    /// Replace the name lists.  If either list is empty students are named
    /// `"Student <id>"`.
    pub fn names<S: Into<String>>(
        mut self,
        first: impl IntoIterator<Item = S>,
        last: impl IntoIterator<Item = S>,
    ) -> Self {
        self.first_names = first.into_iter().map(Into::into).collect();
        self.last_names = last.into_iter().map(Into::into).collect();
        self
    }

    /// Construct the store.
    ///
    /// # Errors
    ///
    /// - [`AgentError::CountMismatch`] if given timetables don't number
    ///   `count`.
    /// - [`AgentError::NoClassrooms`] if random timetables were requested
    ///   with at least one cycle but no classrooms.
    pub fn build(self) -> AgentResult<StudentStore> {
        let mut given = match &self.timetables {
            TimetableSource::Given(t) if t.len() != self.count => {
                return Err(AgentError::CountMismatch { expected: self.count, got: t.len() });
            }
            TimetableSource::Random { classrooms, cycles } if classrooms.is_empty() && *cycles > 0 => {
                return Err(AgentError::NoClassrooms);
            }
            TimetableSource::Given(t) => t.iter(),
            TimetableSource::Random { .. } => Default::default(),
        };

        let students = (0..self.count as u32)
            .map(StudentId)
            .map(|id| {
                let mut rng = AgentRng::new(self.seed, id);
                let timetable = match &self.timetables {
                    TimetableSource::Random { classrooms, cycles } => {
                        Timetable::new(rng.choose_multiple_with_replacement(classrooms, *cycles))
                    }
                    TimetableSource::Given(_) => given.next().cloned().unwrap_or_default(),
                };
                let name = self.draw_name(id, &mut rng);
                Student::new(id, name, Coord::default(), timetable)
            })
            .collect();

        Ok(StudentStore::new(students))
    }

    fn draw_name(&self, id: StudentId, rng: &mut AgentRng) -> String {
        match (rng.choose(&self.first_names), rng.choose(&self.last_names)) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => format!("Student {}", id.0),
        }
    }
}
