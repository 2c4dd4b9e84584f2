//! Validate-and-assemble construction for [`Simulation`].

use rh_core::DriverId;
use rh_dispatch::{Driver, MatchPolicy, MatcherState, Passenger, PendingPool};
use rh_spatial::{KdTree, RoadNetwork};

use crate::{SimError, SimResult, Simulation};

/// Builder for [`Simulation<P>`].
///
/// Takes the already-parsed input tables (loading them is `rh-input`'s
/// job) and checks the preconditions the loop depends on:
///
/// - the passenger stream is sorted by request time;
/// - the node set is non-empty, so the nearest-node index can exist.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimulationBuilder::new(network, drivers, passengers, FifoPolicy).build()?;
/// ```
pub struct SimulationBuilder<P: MatchPolicy> {
    network: RoadNetwork,
    drivers: Vec<Driver>,
    passengers: Vec<Passenger>,
    policy: P,
}

impl<P: MatchPolicy> SimulationBuilder<P> {
    pub fn new(
        network: RoadNetwork,
        drivers: Vec<Driver>,
        passengers: Vec<Passenger>,
        policy: P,
    ) -> Self {
        Self { network, drivers, passengers, policy }
    }

    /// Validate inputs, build the spatial index, seed the pending pool,
    /// and return a ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation<P>> {
        // The replay serves passengers in table order; that is only the
        // arrival order if the stream is time-sorted.
        for (index, pair) in self.passengers.windows(2).enumerate() {
            if pair[1].request_time < pair[0].request_time {
                return Err(SimError::OutOfOrderPassengers { index: index + 1 });
            }
        }

        // Fatal on an empty node set.
        let index = KdTree::build(&self.network.node_pos)?;

        let mut pending = PendingPool::new();
        for (i, driver) in self.drivers.iter().enumerate() {
            pending.push(driver.available_at, DriverId(i as u32));
        }

        let state = MatcherState::new(self.drivers, self.passengers);
        Ok(Simulation::assemble(self.network, index, state, pending, self.policy))
    }
}
