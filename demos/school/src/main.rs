//! school: class changes and an evacuation in a synthetic eight-room school.
//!
//! Usage: `school [config.toml] [timetables.csv]`
//!
//! Without arguments the default configuration runs 250 students through
//! seven class blocks, then sends everyone to the nearest exit.  Set
//! `RUST_LOG=debug` to see individual unreachable students.

mod school;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campus_agent::{StudentStoreBuilder, load_timetables_csv};
use campus_core::SimConfig;
use campus_output::{CsvWriter, SimOutputObserver};
use campus_sim::{SimBuilder, load_config};
use campus_spatial::{AStarRouter, load_from_rgb};

const OUTPUT_DIR: &str = "output/school";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);

    // 1. Configuration.
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig::default(),
    };
    info!(
        students = config.student_count,
        blocks = config.final_cycle,
        ticks = config.total_ticks,
        seed = config.seed,
        "configuration"
    );

    // 2. Floor plan.
    let pixels = school::render();
    let map = load_from_rgb(school::WIDTH, school::HEIGHT, &pixels)?;
    info!(
        width = map.width(),
        height = map.height(),
        classrooms = map.classroom_count(),
        exits = map.exits().len(),
        "floor plan loaded"
    );

    // 3. Students: timetables from CSV if given, otherwise drawn at random.
    let builder = StudentStoreBuilder::new(config.student_count, config.seed);
    let builder = match args.next() {
        Some(path) => builder.timetables(load_timetables_csv(Path::new(&path), config.student_count)?),
        None => builder.random_timetables(&map.classroom_ids(), config.final_cycle as usize),
    };
    let students = builder.build()?;

    // 4. Sim.
    let mut sim = SimBuilder::new(config.clone(), map, students, AStarRouter).build()?;

    // 5. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer);

    // 6. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    let exits = sim.map.exits();
    let out = sim.students.iter().filter(|s| exits.contains(&s.position)).count();
    println!("Simulated {} in {:.3} s", sim.clock, elapsed.as_secs_f64());
    println!("  {out} of {} students reached an exit", sim.students.count());
    println!("  output written to {OUTPUT_DIR}/");
    println!();

    println!("{:<22} {:<30} {:<10}", "Student", "Timetable", "Position");
    println!("{}", "-".repeat(62));
    for s in sim.students.iter().take(8) {
        println!("{:<22} {:<30} {:<10}", s.name, s.timetable.to_string(), s.position.to_string());
    }

    Ok(())
}
