//! midtown — smallest end-to-end rideflow scenario.
//!
//! Replays one evening of requests over a synthetic 12-node street grid
//! under two policies (first-come-first-served vs. pruned pickup-time) and
//! prints both summaries side by side.  Trace CSVs land in
//! `output/<policy>/` for plotting.

mod network;

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Result;

use rh_core::SimRng;
use rh_dispatch::{FifoPolicy, MatchPolicy, PrunedPickupPolicy};
use rh_input::{load_drivers_reader, load_passengers_reader};
use rh_output::{CsvTraceWriter, TraceObserver};
use rh_sim::SimulationBuilder;

use network::build_network;

const SEED: u64 = 42;

// Six drivers trickling in through the afternoon.
const DRIVERS_CSV: &str = "\
Date/Time,Lat,Lon
4/25/2014 15:00:00,40.750,-73.990
4/25/2014 15:20:00,40.760,-73.970
4/25/2014 15:40:00,40.770,-73.980
4/25/2014 16:05:00,40.750,-73.960
4/25/2014 16:30:00,40.770,-73.990
4/25/2014 17:00:00,40.760,-73.990
";

// An evening of requests, sorted by time, criss-crossing the grid.
const PASSENGERS_CSV: &str = "\
Date/Time,Source Lat,Source Lon,Dest Lat,Dest Lon
4/25/2014 16:00:00,40.750,-73.990,40.770,-73.960
4/25/2014 16:10:00,40.760,-73.980,40.750,-73.990
4/25/2014 16:25:00,40.770,-73.960,40.750,-73.980
4/25/2014 16:40:00,40.750,-73.970,40.770,-73.990
4/25/2014 17:05:00,40.760,-73.960,40.750,-73.990
4/25/2014 17:20:00,40.770,-73.980,40.760,-73.960
4/25/2014 17:45:00,40.750,-73.990,40.770,-73.970
4/25/2014 18:10:00,40.760,-73.990,40.750,-73.960
4/25/2014 18:40:00,40.770,-73.990,40.760,-73.980
4/25/2014 19:15:00,40.750,-73.960,40.770,-73.990
";

fn run_policy<P: MatchPolicy>(label: &str, policy: P) -> Result<()> {
    let network = build_network();
    println!(
        "[{label}] network: {} nodes, {} edges, speed limit {}",
        network.node_count(),
        network.edge_count(),
        network.max_speed_limit,
    );

    let mut rng = SimRng::new(SEED);
    let drivers = load_drivers_reader(Cursor::new(DRIVERS_CSV), &mut rng)?;
    let passengers = load_passengers_reader(Cursor::new(PASSENGERS_CSV))?;
    println!("[{label}] {} drivers, {} passengers", drivers.len(), passengers.len());

    let out_dir = PathBuf::from("output").join(label);
    std::fs::create_dir_all(&out_dir)?;
    let mut observer = TraceObserver::new(CsvTraceWriter::new(&out_dir)?);

    let mut sim = SimulationBuilder::new(network, drivers, passengers, policy).build()?;
    let report = sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        eprintln!("[{label}] trace error: {e}");
    }

    println!("{}", report.metrics.summary());
    println!(
        "[{label}] skipped {}, unserved {}, retired {}",
        report.skipped_passengers, report.unserved_passengers, report.retired_drivers,
    );
    println!("[{label}] traces written to {}", out_dir.display());
    Ok(())
}

fn main() -> Result<()> {
    println!("=== midtown — rideflow dispatch demo ===\n");
    run_policy("fifo", FifoPolicy)?;
    println!();
    run_policy("pruned", PrunedPickupPolicy::new())?;
    Ok(())
}
