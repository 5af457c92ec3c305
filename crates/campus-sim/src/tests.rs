//! Integration tests for campus-sim.

use campus_agent::{StudentStore, StudentStoreBuilder, Timetable};
use campus_core::{ClassroomId, Coord, SimConfig, StudentId, Tick};
use campus_spatial::{AStarRouter, GridMap, GridMapBuilder, Tile};

use crate::{CycleReport, NoopObserver, Sim, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const ROOM_A: ClassroomId = ClassroomId(1);
const ROOM_B: ClassroomId = ClassroomId(2);
const EXIT: Coord = Coord::new(19, 11);

/// Changes at ticks 2, 32 and 62; the third change evacuates.
fn test_config() -> SimConfig {
    SimConfig {
        tick_millis:           100,
        first_change_ticks:    2,
        cycle_period_ticks:    30,
        final_cycle:           3,
        total_ticks:           2 + 3 * 30 + 30,
        seed:                  42,
        student_count:         2,
        output_interval_ticks: 10,
    }
}

/// 20×12 open floor: room A (0,0)–(8,8), room B (10,0)–(18,8), one exit in
/// the south-east corner.
fn school_builder() -> GridMapBuilder {
    let mut b = GridMapBuilder::new(20, 12);
    assert_eq!(b.add_classroom(Coord::new(0, 0), Coord::new(8, 8)).unwrap(), ROOM_A);
    assert_eq!(b.add_classroom(Coord::new(10, 0), Coord::new(18, 8)).unwrap(), ROOM_B);
    b.set_tile(EXIT, Tile::Exit).unwrap();
    b
}

fn school() -> GridMap {
    school_builder().build().unwrap()
}

fn students(timetables: Vec<Timetable>) -> StudentStore {
    StudentStoreBuilder::new(timetables.len(), 42)
        .timetables(timetables)
        .build()
        .unwrap()
}

fn a_b_a(n: usize) -> StudentStore {
    students(vec![Timetable::new(vec![ROOM_A, ROOM_B, ROOM_A]); n])
}

fn build(map: GridMap, store: StudentStore) -> Sim<AStarRouter> {
    SimBuilder::new(test_config(), map, store, AStarRouter).build().unwrap()
}

fn position(sim: &Sim<AStarRouter>, i: u32) -> Coord {
    sim.students.get(StudentId(i)).unwrap().position
}

#[derive(Default)]
struct Recorder {
    changes:   Vec<(Tick, CycleReport)>,
    snapshots: Vec<Tick>,
    moved:     usize,
    ended:     Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_cycle_change(&mut self, tick: Tick, report: &CycleReport) {
        self.changes.push((tick, report.clone()));
    }
    fn on_tick_end(&mut self, _tick: Tick, moved: usize) {
        self.moved += moved;
    }
    fn on_snapshot(&mut self, tick: Tick, _students: &StudentStore) {
        self.snapshots.push(tick);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use campus_core::CoreError;

    use crate::SimError;

    #[test]
    fn populate_seats_students_in_first_room() {
        let sim = build(school(), a_b_a(3));
        assert_eq!(position(&sim, 0), Coord::new(2, 2));
        assert_eq!(position(&sim, 1), Coord::new(4, 2));
        assert_eq!(position(&sim, 2), Coord::new(6, 2));
        assert_eq!(sim.map.classroom(ROOM_A).unwrap().seats_taken(), 3);
        assert!(sim.students.iter().all(|s| s.is_idle()));
        assert_eq!(sim.map.cycle(), 0);
    }

    #[test]
    fn explicit_positions_skip_seating() {
        let sim = SimBuilder::new(test_config(), school(), a_b_a(2), AStarRouter)
            .initial_positions(vec![Coord::new(5, 10), Coord::new(6, 10)])
            .build()
            .unwrap();
        assert_eq!(position(&sim, 1), Coord::new(6, 10));
        assert_eq!(sim.map.classroom(ROOM_A).unwrap().seats_taken(), 0);
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = SimBuilder::new(test_config(), school(), a_b_a(2), AStarRouter)
            .initial_positions(vec![Coord::new(0, 0)])
            .build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { expected: 2, got: 1, .. })));
    }

    #[test]
    fn unknown_classroom_errors() {
        let store = students(vec![Timetable::new(vec![ROOM_A, ClassroomId(9)])]);
        let result = SimBuilder::new(test_config(), school(), store, AStarRouter).build();
        assert!(matches!(
            result,
            Err(SimError::UnknownClassroom { student: StudentId(0), classroom: ClassroomId(9) })
        ));
    }

    #[test]
    fn invalid_config_errors() {
        let config = SimConfig { tick_millis: 0, ..test_config() };
        let result = SimBuilder::new(config, school(), a_b_a(1), AStarRouter).build();
        assert!(matches!(result, Err(SimError::Core(CoreError::Config(_)))));
    }
}

// ── Class changes ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod change_tests {
    use super::*;
    use crate::Phase;

    #[test]
    fn change_routes_to_next_room() {
        let mut sim = build(school(), a_b_a(2));
        let report = sim.change_classes().unwrap();

        assert_eq!(report.cycle, 1);
        assert_eq!(report.phase, Phase::Classes);
        assert_eq!((report.routed, report.unreachable, report.skipped), (2, 0, 0));
        assert!(!sim.is_evacuated());

        let s0 = sim.students.get(StudentId(0)).unwrap();
        let s1 = sim.students.get(StudentId(1)).unwrap();
        assert_eq!(s0.goal(), Some(Coord::new(12, 2)));
        assert_eq!(s1.goal(), Some(Coord::new(14, 2)));
        // Routes start at the current cell.
        assert_eq!(s0.path().next(), Some(Coord::new(2, 2)));
        assert_eq!(sim.map.classroom(ROOM_B).unwrap().seats_taken(), 2);
        assert_eq!(sim.map.classroom(ROOM_A).unwrap().seats_taken(), 0);
    }

    #[test]
    fn final_cycle_sends_everyone_to_the_exit() {
        let mut sim = build(school(), a_b_a(2));
        sim.change_classes().unwrap();
        sim.change_classes().unwrap();
        let report = sim.change_classes().unwrap();

        assert_eq!(report.cycle, 3);
        assert_eq!(report.phase, Phase::Evacuate);
        assert_eq!(report.routed, 2);
        assert!(sim.is_evacuated());
        assert!(sim.students.iter().all(|s| s.goal() == Some(EXIT)));
    }

    #[test]
    fn unknown_room_leaves_the_map_untouched() {
        let mut sim = build(school(), a_b_a(2));
        sim.students.get_mut(StudentId(1)).unwrap().timetable =
            Timetable::new(vec![ROOM_A, ClassroomId(9), ROOM_A]);

        let result = sim.change_classes();
        assert!(matches!(
            result,
            Err(crate::SimError::UnknownClassroom { student: StudentId(1), classroom: ClassroomId(9) })
        ));
        assert_eq!(sim.map.cycle(), 0);
        assert_eq!(sim.map.classroom(ROOM_B).unwrap().seats_taken(), 0);
        assert!(sim.students.iter().all(|s| s.is_idle()));
    }

    #[test]
    fn missing_timetable_entry_is_skipped() {
        let store = students(vec![
            Timetable::new(vec![ROOM_A]),
            Timetable::new(vec![ROOM_A, ROOM_B]),
        ]);
        let mut sim = build(school(), store);
        let report = sim.change_classes().unwrap();
        assert_eq!((report.routed, report.skipped), (1, 1));
        assert!(sim.students.get(StudentId(0)).unwrap().is_idle());
    }

    #[test]
    fn seat_in_a_wall_is_skipped() {
        let mut b = school_builder();
        // The first seat of room B.
        b.set_tile(Coord::new(12, 2), Tile::Wall).unwrap();
        let mut sim = build(b.build().unwrap(), a_b_a(2));

        let report = sim.change_classes().unwrap();
        assert_eq!((report.routed, report.skipped), (1, 1));
        assert!(sim.students.get(StudentId(0)).unwrap().is_idle());
        assert_eq!(sim.students.get(StudentId(1)).unwrap().goal(), Some(Coord::new(14, 2)));
    }

    #[test]
    fn walled_in_room_is_unreachable() {
        let mut b = school_builder();
        // Seal room B behind a wall ring at x=9..=19, y=0..=9 except its interior.
        b.fill_rect(Coord::new(9, 0), Coord::new(9, 9), Tile::Wall).unwrap();
        b.fill_rect(Coord::new(9, 9), Coord::new(19, 9), Tile::Wall).unwrap();
        let mut sim = build(b.build().unwrap(), a_b_a(1));

        let report = sim.change_classes().unwrap();
        assert_eq!(report.unreachable, 1);
        assert_eq!(report.routed, 0);
        let s = sim.students.get(StudentId(0)).unwrap();
        assert!(s.is_idle());
        assert_eq!(s.position, Coord::new(2, 2));
    }

    #[test]
    fn exitless_map_skips_evacuation() {
        let mut b = GridMapBuilder::new(20, 12);
        b.add_classroom(Coord::new(0, 0), Coord::new(8, 8)).unwrap();
        let store = students(vec![Timetable::new(vec![ROOM_A]); 2]);
        let config = SimConfig { final_cycle: 1, ..test_config() };
        let mut sim = SimBuilder::new(config, b.build().unwrap(), store, AStarRouter)
            .build()
            .unwrap();

        let report = sim.change_classes().unwrap();
        assert_eq!(report.phase, Phase::Evacuate);
        assert_eq!(report.skipped, 2);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::Phase;

    #[test]
    fn nobody_moves_before_the_first_change() {
        let mut sim = build(school(), a_b_a(2));
        let mut rec = Recorder::default();
        sim.run_ticks(2, &mut rec).unwrap();
        assert!(rec.changes.is_empty());
        assert_eq!(rec.moved, 0);
        assert_eq!(sim.now(), Tick(2));
    }

    #[test]
    fn first_step_after_routing_stays_in_place() {
        let mut sim = build(school(), a_b_a(1));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(position(&sim, 0), Coord::new(2, 2));
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(position(&sim, 0), Coord::new(3, 2));
    }

    #[test]
    fn full_run_schedule() {
        let mut sim = build(school(), a_b_a(2));
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let ticks: Vec<_> = rec.changes.iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, vec![Tick(2), Tick(32), Tick(62)]);
        let cycles: Vec<_> = rec.changes.iter().map(|(_, r)| r.cycle).collect();
        assert_eq!(cycles, vec![1, 2, 3]);
        assert_eq!(rec.changes[2].1.phase, Phase::Evacuate);

        // No change is scheduled at tick 92 after the evacuation.
        assert_eq!(sim.map.cycle(), 3);
        assert_eq!(rec.ended, Some(Tick(122)));
        assert_eq!(rec.snapshots.len(), 13);

        assert!(sim.students.iter().all(|s| s.position == EXIT && s.is_idle()));
    }

    #[test]
    fn students_arrive_at_seats_between_changes() {
        let mut sim = build(school(), a_b_a(2));
        // Through tick 31: routed at 2, eleven cells to walk.
        sim.run_ticks(32, &mut NoopObserver).unwrap();
        assert_eq!(position(&sim, 0), Coord::new(12, 2));
        assert_eq!(position(&sim, 1), Coord::new(14, 2));
    }

    #[test]
    fn student_seated_on_a_wall_still_leaves() {
        let mut b = school_builder();
        // Seat 16 of either room lands on row y=10, below the rooms; wall
        // off room A's.
        b.set_tile(Coord::new(2, 10), Tile::Wall).unwrap();
        let mut sim = build(b.build().unwrap(), a_b_a(17));
        assert_eq!(position(&sim, 16), Coord::new(2, 10));

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        // Only the return to room A is skipped: its seat is the wall.
        let skipped: Vec<_> = rec.changes.iter().map(|(_, r)| r.skipped).collect();
        assert_eq!(skipped, vec![0, 1, 0]);
        assert_eq!(rec.changes[0].1.routed, 17);
        assert_eq!(position(&sim, 16), EXIT);
    }

    #[test]
    fn runs_are_deterministic() {
        let mut a = build(school(), a_b_a(5));
        let mut b = build(school(), a_b_a(5));
        a.run_ticks(50, &mut NoopObserver).unwrap();
        b.run_ticks(50, &mut NoopObserver).unwrap();
        assert_eq!(a.students.as_slice(), b.students.as_slice());
    }

    #[test]
    fn crowded_rooms_overflow_past_the_far_wall() {
        // Room A holds 16 seats; the 17th lands outside the rectangle.
        let mut sim = build(school(), a_b_a(17));
        assert_eq!(position(&sim, 16), Coord::new(2, 10));
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.students.iter().all(|s| s.position == EXIT));
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use std::io::Write;

    use campus_core::{CoreError, SimConfig};

    use crate::{SimError, load_config, parse_config};

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), SimConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config("seed = 7\nfinal_cycle = 3\n").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.final_cycle, 3);
        assert_eq!(config.tick_millis, SimConfig::default().tick_millis);
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(parse_config("seed = \"seven\""), Err(SimError::Config(_))));
    }

    #[test]
    fn zero_tick_length_rejected() {
        assert!(matches!(
            parse_config("tick_millis = 0"),
            Err(SimError::Core(CoreError::Config(_)))
        ));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "student_count = 12").unwrap();
        assert_eq!(load_config(file.path()).unwrap().student_count, 12);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_config(&dir.path().join("campus.toml")), Err(SimError::Io(_))));
    }
}
