//! `campus-agent`: student state and population building for the `campus`
//! crowd simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`student`]     | `Student`: position, queued path, timetable, name         |
//! | [`timetable`]   | `Timetable`: one `ClassroomId` per cycle                  |
//! | [`store`]       | `StudentStore`: all students, indexed by `StudentId`      |
//! | [`builder`]     | `StudentStoreBuilder` (random or loaded timetables)       |
//! | [`loader`]      | CSV timetable loader                                      |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod builder;
pub mod error;
pub mod loader;
pub mod store;
pub mod student;
pub mod timetable;


pub use builder::{DEFAULT_FIRST_NAMES, DEFAULT_LAST_NAMES, StudentStoreBuilder};
pub use error::{AgentError, AgentResult};
pub use loader::{load_timetables_csv, load_timetables_reader};
pub use store::StudentStore;
pub use student::Student;
pub use timetable::Timetable;
