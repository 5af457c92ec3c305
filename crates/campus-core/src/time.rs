//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! movement step: every student with a pending path moves exactly one tile
//! per tick.  The mapping to wall-clock time is held in `SimClock`:
//!
//!   elapsed_millis = tick * tick_millis
//!
//! Class changes are not timers of their own; they fire on ticks derived from
//! `SimConfig::first_change_ticks` and `SimConfig::cycle_period_ticks`, so a
//! run is a pure function of its configuration.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated milliseconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated milliseconds one tick represents.  Default: 100.
    pub tick_millis: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_millis: u32) -> Self {
        Self {
            tick_millis,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_millis(&self) -> u64 {
        self.current_tick.0 * self.tick_millis as u64
    }

    /// Break elapsed time into (minutes, seconds, millis) for log lines.
    pub fn elapsed_msm(&self) -> (u64, u32, u32) {
        let total = self.elapsed_millis();
        let minutes = total / 60_000;
        let secs = ((total % 60_000) / 1_000) as u32;
        let millis = (total % 1_000) as u32;
        (minutes, secs, millis)
    }

    /// How many ticks span `millis` milliseconds? (rounds up)
    #[inline]
    pub fn ticks_for_millis(&self, millis: u64) -> u64 {
        millis.div_ceil(self.tick_millis.max(1) as u64)
    }

    #[inline]
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        self.ticks_for_millis(secs * 1_000)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s, ms) = self.elapsed_msm();
        write!(f, "{} ({:02}:{:02}.{:03})", self.current_tick, m, s, ms)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Loaded from TOML by `campus-sim::config` or built in code.  The defaults
/// reproduce a 100 ms step, a first class change after two seconds, a class
/// change every thirty seconds, and evacuation once seven blocks are done.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulated milliseconds per tick.
    pub tick_millis: u32,

    /// Tick of the first class change.
    pub first_change_ticks: u64,

    /// Ticks between class changes.
    pub cycle_period_ticks: u64,

    /// Once the map's cycle counter reaches this value, students are routed
    /// to their nearest exit instead of a classroom and no further changes
    /// are scheduled.  Also the number of timetable entries per student.
    pub final_cycle: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical timetables.
    pub seed: u64,

    /// Number of students to populate.
    pub student_count: usize,

    /// Emit a position snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_millis:           100,
            first_change_ticks:    20,
            cycle_period_ticks:    300,
            final_cycle:           7,
            total_ticks:           20 + 7 * 300 + 300,
            seed:                  42,
            student_count:         250,
            output_interval_ticks: 10,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_millis)
    }

    /// Reject settings the tick loop cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_millis == 0 {
            return Err(CoreError::Config("tick_millis must be positive".into()));
        }
        if self.cycle_period_ticks == 0 && self.final_cycle > 1 {
            return Err(CoreError::Config(format!(
                "cycle_period_ticks is 0 but final_cycle {} needs more than one change",
                self.final_cycle
            )));
        }
        Ok(())
    }

    /// `true` if a class change is due at `tick`.
    ///
    /// The caller stops asking once the final cycle has been reached.
    pub fn is_change_tick(&self, tick: Tick) -> bool {
        if tick.0 < self.first_change_ticks {
            return false;
        }
        let since = tick.0 - self.first_change_ticks;
        match self.cycle_period_ticks {
            0 => since == 0,
            period => since.is_multiple_of(period),
        }
    }
}
