//! The `Sim` struct, the class-change scheduler, and the tick loop.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use campus_agent::StudentStore;
use campus_core::{Coord, SimClock, SimConfig, StudentId, Tick};
use campus_spatial::{GridMap, Route, Router, SpatialError, SpatialResult};

use crate::{SimError, SimObserver, SimResult};

// ── Cycle reports ─────────────────────────────────────────────────────────────

/// What a class change routed students towards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Each student's timetabled classroom for the new cycle.
    Classes,
    /// Each student's nearest exit.
    Evacuate,
}

/// Outcome of one [`Sim::change_classes`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleReport {
    /// The map's cycle counter after the change.
    pub cycle:       u32,
    pub phase:       Phase,
    /// Students given a non-empty path.
    pub routed:      usize,
    /// Students whose target could not be reached; they are left idle.
    pub unreachable: usize,
    /// Students with no usable target: no timetable entry for the cycle, no
    /// exit on the map, a target cell that is a wall or off the map, or a
    /// start cell off the map.
    pub skipped:     usize,
    /// Wall-clock time spent allocating seats and searching.
    pub elapsed:     Duration,
}

impl CycleReport {
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// One pending search: who, from where, to where.
struct RouteJob {
    student: StudentId,
    from:    Coord,
    to:      Coord,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<R>` owns the map and every student, and drives the tick loop
/// described in the [crate docs](crate).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    /// Global configuration (timers, final cycle, seed, …).
    pub config: SimConfig,

    /// Simulation clock: tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// The school: tiles, exits, classrooms, and the cycle counter.
    pub map: GridMap,

    pub students: StudentStore,

    /// Routing engine used for every class change.
    pub router: R,

    /// Set once the evacuation order has been given.
    pub(crate) evacuated: bool,
}

impl<R: Router> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// The tick the clock is currently on.
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    /// `true` once students have been sent to the exits.
    #[inline]
    pub fn is_evacuated(&self) -> bool {
        self.evacuated
    }

    /// Place every student at the next seat of its first-cycle classroom.
    ///
    /// Seats are handed out in `StudentId` order and are not checked against
    /// walls.  Students with an empty timetable keep their position.
    pub fn populate(&mut self) -> SimResult<()> {
        let cycle = self.map.cycle();
        for student in self.students.iter_mut() {
            let Some(room) = student.timetable.get(cycle) else {
                continue;
            };
            student.position = self.map.next_seat(room)?;
            student.clear_path();
        }
        Ok(())
    }

    /// Advance the map to the next cycle and route every student.
    ///
    /// Before `config.final_cycle` each student heads for a fresh seat in
    /// its timetabled classroom; from then on, for its nearest exit.  Each
    /// student's path is replaced by the search result (empty if the target
    /// is unreachable).
    ///
    /// # Errors
    ///
    /// [`SimError::UnknownClassroom`] if a timetable names a classroom the
    /// map lacks for the coming cycle.  The map and students are left as
    /// they were.
    pub fn change_classes(&mut self) -> SimResult<CycleReport> {
        let started = Instant::now();
        let next = self.map.cycle() + 1;
        if next < self.config.final_cycle {
            self.check_timetables(next)?;
        }
        self.map.next_cycle();
        let cycle = self.map.cycle();
        let phase = if cycle >= self.config.final_cycle {
            self.evacuated = true;
            Phase::Evacuate
        } else {
            Phase::Classes
        };

        // Targets are chosen sequentially: seat order depends on StudentId.
        let mut jobs = Vec::with_capacity(self.students.count());
        let mut skipped = 0;
        for student in self.students.iter_mut() {
            let target = match phase {
                Phase::Evacuate => self.map.nearest_exit(student.position),
                Phase::Classes => match student.timetable.get(cycle) {
                    Some(room) => Some(self.map.next_seat(room)?),
                    None => None,
                },
            };
            match target {
                Some(to) => jobs.push(RouteJob { student: student.id, from: student.position, to }),
                None => {
                    debug!(student = %student.id, cycle, "no target this cycle");
                    student.clear_path();
                    skipped += 1;
                }
            }
        }

        let routes = self.search_all(&jobs);

        let mut routed = 0;
        let mut unreachable = 0;
        for (job, result) in jobs.iter().zip(routes) {
            let student = self.students.try_get_mut(job.student)?;
            match result {
                Ok(route) if route.is_unreachable() => {
                    debug!(student = %job.student, from = %job.from, to = %job.to, "target unreachable");
                    student.clear_path();
                    unreachable += 1;
                }
                Ok(route) => {
                    student.set_path(route.cells);
                    routed += 1;
                }
                Err(SpatialError::InvalidInput(at)) => {
                    warn!(student = %job.student, cell = %at, "skipping route through invalid cell");
                    student.clear_path();
                    skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let report = CycleReport {
            cycle,
            phase,
            routed,
            unreachable,
            skipped,
            elapsed: started.elapsed(),
        };
        info!(
            cycle,
            phase = ?report.phase,
            routed,
            unreachable,
            skipped,
            millis = report.millis() as u64,
            "class change"
        );
        Ok(report)
    }

    /// Every timetable entry for `cycle` must name a classroom on the map.
    pub(crate) fn check_timetables(&self, cycle: u32) -> SimResult<()> {
        let unknown = self.students.iter().find_map(|s| {
            s.timetable
                .get(cycle)
                .filter(|&room| self.map.classroom(room).is_none())
                .map(|room| (s.id, room))
        });
        match unknown {
            Some((student, classroom)) => Err(SimError::UnknownClassroom { student, classroom }),
            None => Ok(()),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        if !self.evacuated && self.config.is_change_tick(now) {
            let report = self.change_classes()?;
            observer.on_cycle_change(now, &report);
        }

        let moved = self.students.advance_all();
        observer.on_tick_end(now, moved);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.students);
        }

        self.clock.advance();
        Ok(())
    }

    /// Run every search against the read-only map.
    ///
    /// With the `parallel` Cargo feature the searches run on Rayon's thread
    /// pool; results come back in job order either way.
    fn search_all(&self, jobs: &[RouteJob]) -> Vec<SpatialResult<Route>> {
        let map = &self.map;
        let router = &self.router;

        #[cfg(not(feature = "parallel"))]
        {
            jobs.iter().map(|j| router.route(map, j.from, j.to)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            jobs.par_iter().map(|j| router.route(map, j.from, j.to)).collect()
        }
    }
}
