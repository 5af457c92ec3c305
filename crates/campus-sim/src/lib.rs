//! `campus-sim`: class-change scheduler and tick loop for the `campus`
//! crowd simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Change   on a change tick (first_change_ticks, then every
//!                cycle_period_ticks) and until the evacuation has been
//!                ordered: advance the map's cycle, hand out seats in
//!                StudentId order, route every student.
//!   ② Move     every student with a queued path steps one cell.
//!   ③ Observe  tick-end hook, plus a snapshot every
//!                output_interval_ticks.
//! ```
//!
//! Once the cycle counter reaches `config.final_cycle` every student is
//! routed to its nearest exit instead of a classroom, and no further
//! changes are scheduled.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-cycle path searches on Rayon's pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use campus_agent::StudentStoreBuilder;
//! use campus_core::SimConfig;
//! use campus_sim::{NoopObserver, SimBuilder};
//! use campus_spatial::AStarRouter;
//!
//! let rooms = map.classroom_ids();
//! let students = StudentStoreBuilder::new(250, 42)
//!     .random_timetables(&rooms, 7)
//!     .build()?;
//! let mut sim = SimBuilder::new(SimConfig::default(), map, students, AStarRouter).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::{load_config, parse_config, validate_config};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{CycleReport, Phase, Sim};
