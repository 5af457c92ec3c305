//! Simulation observer trait for progress reporting and data collection.

use campus_agent::StudentStore;
use campus_core::Tick;

use crate::CycleReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct ChangeLogger;
///
/// impl SimObserver for ChangeLogger {
///     fn on_cycle_change(&mut self, tick: Tick, report: &CycleReport) {
///         println!("{tick}: cycle {} routed {} students", report.cycle, report.routed);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a class change (or the evacuation order) has routed
    /// every student.
    fn on_cycle_change(&mut self, _tick: Tick, _report: &CycleReport) {}

    /// Called at the end of each tick.
    ///
    /// `moved` is the number of students that stepped this tick.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    fn on_snapshot(&mut self, _tick: Tick, _students: &StudentStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
