//! `campus-core`: foundational types for the `campus` crowd simulation.
//!
//! This crate is a dependency of every other `campus-*` crate.  It has no
//! `campus-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`coord`]       | `Coord`, squared-distance helpers, 8-neighbour offsets |
//! | [`ids`]         | `StudentId`, `ClassroomId`                            |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-student, seeded from the global seed) |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by the TOML loader in `campus-sim`.               |

pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::{Coord, NEIGHBOUR_OFFSETS};
pub use error::{CoreError, CoreResult};
pub use ids::{ClassroomId, StudentId};
pub use rng::AgentRng;
pub use time::{SimClock, SimConfig, Tick};
