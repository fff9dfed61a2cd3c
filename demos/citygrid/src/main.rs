//! citygrid — end-to-end ambulance dispatch demo.
//!
//! A small synthetic city: two stations, a downtown hub, a shopping street,
//! a harbor, and one hilltop location no road reaches.  Five calls arrive,
//! including one with a call type missing from the priority table and one at
//! the unreachable hilltop.  The same scenario is dispatched once per solver
//! variant; both produce an `ambulance_call_log_<variant>.csv` under
//! `output/citygrid/` plus a console performance summary.

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Result;

use ems_dispatch::{
    load_calls_reader, load_fleet_reader, load_priorities_reader, CallQueue,
    DispatchEngine, Fleet,
};
use ems_graph::{
    load_segments_reader, AStarSolver, PathSolver, RoadGraph, RoadGraphBuilder,
    UniformCostSolver,
};
use ems_output::{report, CallLogObserver, CallLogWriter};

// ── Embedded scenario data ────────────────────────────────────────────────────

const ROADS_CSV: &str = "\
Start,End,Distance,Traffic Delay,Speed Limit,Start_X,Start_Y,End_X,End_Y
Station_North,Downtown,6,4,40,0,4,2,2
Station_South,Downtown,5,2,50,0,0,2,2
Downtown,Oak_St,4,1,40,2,2,5,2
Oak_St,Harbor,3,2,30,5,2,7,1
Downtown,Harbor,8,3,60,2,2,7,1
Station_North,Oak_St,9,5,45,0,4,5,2
";

const AMBULANCES_CSV: &str = "\
Ambulance Number,Staging Location
A1,Station_North
A2,Station_South
A3,Oak_St
";

const CALLS_CSV: &str = "\
Call ID,Call Type,Location
C1,Trauma,Harbor
C2,Cardiac,Oak_St
C3,Transfer,Downtown
C4,Cardiac,Hilltop
C5,Wellness,Station_North
";

const PRIORITIES_CSV: &str = "\
Call Type,Priority
Cardiac,1
Trauma,2
Transfer,5
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== citygrid — ems_dispatch demo ===");
    println!();

    // 1. Load everything through one builder so vehicle and call locations
    //    share the road network's node table.
    let mut builder = RoadGraphBuilder::new();
    let segments = load_segments_reader(Cursor::new(ROADS_CSV), &mut builder)?;
    let fleet = load_fleet_reader(Cursor::new(AMBULANCES_CSV), &mut builder)?;
    let table = load_priorities_reader(Cursor::new(PRIORITIES_CSV))?;
    let queue = load_calls_reader(Cursor::new(CALLS_CSV), &mut builder, &table)?;
    let graph = builder.build();

    println!(
        "Road network: {} locations, {} segments",
        graph.node_count(),
        segments
    );
    println!("Fleet: {} ambulances  |  Calls: {}", fleet.len(), queue.len());
    println!();

    // 2. Dispatch the same scenario once per solver variant.
    std::fs::create_dir_all("output/citygrid")?;
    run_variant("dijkstra", UniformCostSolver, &graph, fleet.clone(), &queue)?;
    run_variant("astar", AStarSolver, &graph, fleet, &queue)?;

    Ok(())
}

fn run_variant<S: PathSolver>(
    name: &str,
    solver: S,
    graph: &RoadGraph,
    fleet: Fleet,
    queue: &CallQueue,
) -> Result<()> {
    let log_path = PathBuf::from(format!("output/citygrid/ambulance_call_log_{name}.csv"));
    let writer = CallLogWriter::create(&log_path)?;
    let mut obs = CallLogObserver::new(writer, graph);

    let mut engine = DispatchEngine::new(graph, solver, fleet);
    let summary = engine.run(queue, &mut obs)?;

    if let Some(e) = obs.take_error() {
        eprintln!("log error: {e}");
    }

    println!("--- {name} ---");
    report::print_performance_summary(&summary);
    println!(
        "Dispatched: {}  |  Unassigned: {}  |  Log: {}",
        summary.dispatched,
        summary.unassigned,
        log_path.display()
    );
    println!();
    Ok(())
}
