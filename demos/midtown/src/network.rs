//! Synthetic midtown street grid: 4 avenues × 3 streets, every block
//! drivable both ways, with rush-hour slowdowns baked into the hourly
//! weights.

use rh_core::Coord;
use rh_spatial::{HOURS_PER_DAY, HourlyWeight, RoadNetwork, RoadNetworkBuilder};

/// Free-flow minutes per block.
const BLOCK_MINUTES: f64 = 2.0;

/// Build the 24-hour weight cycle for one block: free-flow off-peak,
/// 2.5× slower in the morning (7–9) and evening (16–19) rushes.
fn block_weights() -> [HourlyWeight; HOURS_PER_DAY] {
    let free_flow = HourlyWeight { travel_time: BLOCK_MINUTES / 60.0, max_speed: 25.0 };
    let congested = HourlyWeight { travel_time: BLOCK_MINUTES * 2.5 / 60.0, max_speed: 10.0 };

    let mut weights = [free_flow; HOURS_PER_DAY];
    for hour in (7..=9usize).chain(16..=19) {
        weights[hour] = congested;
    }
    weights
}

/// A 4×3 grid around (40.75, -73.99), nodes 0.01° apart.
pub fn build_network() -> RoadNetwork {
    const COLS: usize = 4;
    const ROWS: usize = 3;

    let mut b = RoadNetworkBuilder::with_capacity(COLS * ROWS, 4 * COLS * ROWS);
    let weights = block_weights();

    let mut nodes = Vec::with_capacity(COLS * ROWS);
    for row in 0..ROWS {
        for col in 0..COLS {
            nodes.push(b.add_node(Coord::new(
                40.75 + row as f64 * 0.01,
                -73.99 + col as f64 * 0.01,
            )));
        }
    }

    let at = |row: usize, col: usize| nodes[row * COLS + col];
    for row in 0..ROWS {
        for col in 0..COLS {
            if col + 1 < COLS {
                b.add_edge(at(row, col), at(row, col + 1), weights);
                b.add_edge(at(row, col + 1), at(row, col), weights);
            }
            if row + 1 < ROWS {
                b.add_edge(at(row, col), at(row + 1, col), weights);
                b.add_edge(at(row + 1, col), at(row, col), weights);
            }
        }
    }

    b.build()
}
