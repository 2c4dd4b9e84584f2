//! `MatchContext` — the view of the world a policy (and the ride
//! transaction) operates on.
//!
//! The context borrows the read-only geo/network layer and the mutable
//! matcher state together so policies get one coherent parameter instead of
//! four.  Its helpers fold in the cross-cutting bookkeeping every caller
//! would otherwise repeat: subsystem timing, the per-driver nearest-node
//! memo, and pair-time cache writes.

use std::time::Instant;

use rh_core::{Coord, DriverId, EdgeId, NodeId};
use rh_spatial::{Heuristic, KdTree, RoadNetwork, SpatialResult, TrafficMap};

use crate::state::MatcherState;

/// Borrowed world view for one dispatch step.
pub struct MatchContext<'a> {
    /// The road graph (read-only).
    pub network: &'a RoadNetwork,
    /// The nearest-node index (read-only).
    pub index: &'a KdTree,
    /// All mutable dispatch state.
    pub state: &'a mut MatcherState,
    /// Congestion overlay, consulted and committed by the traffic-aware
    /// policy only.
    pub traffic: &'a mut TrafficMap,
}

impl<'a> MatchContext<'a> {
    /// Nearest graph node to an arbitrary coordinate.  Timed under the
    /// nearest-node subsystem counter.
    pub fn nearest_node(&mut self, pos: Coord) -> NodeId {
        let started = Instant::now();
        let node = self.index.nearest(pos.lat, pos.lon);
        self.state.metrics.nearest_node.record(started.elapsed());
        node
    }

    /// The graph node `driver` currently occupies, via the memo when the
    /// driver has not moved since it was last resolved.
    pub fn driver_node(&mut self, driver: DriverId) -> NodeId {
        if let Some(&node) = self.state.nearest_memo.get(&driver) {
            return node;
        }
        let node = self.nearest_node(self.state.drivers[driver.index()].pos);
        self.state.nearest_memo.insert(driver, node);
        node
    }

    /// Routed travel time in hours.  Timed under the shortest-path counter
    /// and written through the pair-time cache.
    pub fn travel_time(
        &mut self,
        from: NodeId,
        to: NodeId,
        hour: u32,
        heuristic: Heuristic,
    ) -> SpatialResult<f64> {
        let started = Instant::now();
        let result = rh_spatial::travel_time(self.network, from, to, hour, heuristic);
        self.state.metrics.shortest_path.record(started.elapsed());

        if let Ok(hours) = result {
            self.state.pair_times.insert(from, to, hours);
        }
        result
    }

    /// Congestion-aware travel time and path.  Timed like
    /// [`travel_time`](Self::travel_time); the path is **not** committed to
    /// the traffic map — the caller commits the winning candidate.
    pub fn travel_time_with_traffic(
        &mut self,
        from: NodeId,
        to: NodeId,
        hour: u32,
        heuristic: Heuristic,
    ) -> SpatialResult<(f64, Vec<EdgeId>)> {
        let started = Instant::now();
        let result =
            rh_spatial::travel_time_with_traffic(self.network, self.traffic, from, to, hour, heuristic);
        self.state.metrics.shortest_path.record(started.elapsed());

        if let Ok((hours, _)) = &result {
            self.state.pair_times.insert(from, to, *hours);
        }
        result
    }
}
