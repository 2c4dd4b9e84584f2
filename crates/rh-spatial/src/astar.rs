//! Time-dependent shortest-path engine.
//!
//! # Algorithm
//!
//! A* over the CSR road graph with hour-indexed edge weights and a
//! selectable heuristic.  The open set is a lazy-deletion binary min-heap:
//! stale entries (whose recorded cost no longer matches the node's best
//! known cost) are popped and skipped rather than decreased in place.
//! Popping the target terminates the search immediately.
//!
//! # Heuristics
//!
//! | Variant      | Estimate                                   | Optimal? |
//! |--------------|--------------------------------------------|----------|
//! | `Dijkstra`   | 0                                          | yes      |
//! | `Euclidean`  | straight-line degrees ÷ global speed limit | yes      |
//! | `Manhattan`  | `\|Δlat\| + \|Δlon\|` in raw degrees       | no       |
//!
//! `Euclidean` is admissible because no edge can be traversed faster than
//! the global maximum speed allows.  `Manhattan` is a deliberately
//! over-eager estimate kept as the fast approximation used by the pruned
//! candidate policy; it trades optimality guarantees for fewer expansions.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rh_core::{Coord, EdgeId, NodeId};

use crate::network::{HOURS_PER_DAY, RoadNetwork};
use crate::traffic::TrafficMap;
use crate::{SpatialError, SpatialResult};

// ── Heuristic ─────────────────────────────────────────────────────────────────

/// Remaining-cost estimator for the search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// No estimate (h ≡ 0): plain Dijkstra.
    Dijkstra,
    /// Straight-line distance scaled by the network's global speed limit.
    Euclidean,
    /// Manhattan distance in raw degrees — fast, not admissible in general.
    Manhattan,
}

impl Heuristic {
    /// Estimated remaining hours from `pos` to `goal`.
    #[inline]
    fn estimate(self, pos: Coord, goal: Coord, max_speed_limit: f64) -> f64 {
        match self {
            Heuristic::Dijkstra => 0.0,
            Heuristic::Euclidean => pos.distance(goal) / max_speed_limit,
            Heuristic::Manhattan => pos.manhattan(goal),
        }
    }
}

// ── Public queries ────────────────────────────────────────────────────────────

/// Travel time in hours from `s` to `t` starting at `hour`.
///
/// Fails with [`SpatialError::Unreachable`] if no path exists.
pub fn travel_time(
    net: &RoadNetwork,
    s: NodeId,
    t: NodeId,
    hour: u32,
    heuristic: Heuristic,
) -> SpatialResult<f64> {
    search(net, None, s, t, hour, heuristic).map(|(time, _)| time)
}

/// Travel time plus the directed edge sequence from `s` to `t`.
pub fn travel_time_and_path(
    net: &RoadNetwork,
    s: NodeId,
    t: NodeId,
    hour: u32,
    heuristic: Heuristic,
) -> SpatialResult<(f64, Vec<EdgeId>)> {
    search(net, None, s, t, hour, heuristic)
}

/// Congestion-aware variant: each edge's travel time is scaled by the
/// traffic map's multiplier (`1 + committed-path count`).
///
/// The returned path is **not** committed to the map; the caller decides
/// which candidate path wins and commits it via [`TrafficMap::commit`].
pub fn travel_time_with_traffic(
    net: &RoadNetwork,
    traffic: &TrafficMap,
    s: NodeId,
    t: NodeId,
    hour: u32,
    heuristic: Heuristic,
) -> SpatialResult<(f64, Vec<EdgeId>)> {
    search(net, Some(traffic), s, t, hour, heuristic)
}

// ── Open-set entry ────────────────────────────────────────────────────────────

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f` first; equal `f` breaks toward the lower node id for determinism.
struct OpenEntry {
    f: f64,
    g: f64,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: smaller f (then lower id) sorts as "greater" so it is
        // popped first from the max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

// ── Search core ───────────────────────────────────────────────────────────────

fn search(
    net: &RoadNetwork,
    traffic: Option<&TrafficMap>,
    s: NodeId,
    t: NodeId,
    hour: u32,
    heuristic: Heuristic,
) -> SpatialResult<(f64, Vec<EdgeId>)> {
    if s == t {
        return Ok((0.0, Vec::new()));
    }

    let n = net.node_count();
    let hour = hour as usize % HOURS_PER_DAY;
    let goal = net.coord(t);

    // g[v] = best known hours from s; prev_edge[v] = edge that achieved it.
    let mut g = vec![f64::INFINITY; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];
    g[s.index()] = 0.0;

    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        f: heuristic.estimate(net.coord(s), goal, net.max_speed_limit),
        g: 0.0,
        node: s,
    });

    while let Some(OpenEntry { g: cost, node, .. }) = open.pop() {
        if node == t {
            return Ok((cost, reconstruct(net, &prev_edge, t)));
        }

        // Skip stale heap entries.
        if cost > g[node.index()] {
            continue;
        }

        for edge in net.out_edges(node) {
            let neighbor = net.edge_to[edge.index()];
            let mut weight = net.edge_hours[edge.index()][hour].travel_time;
            if let Some(traffic) = traffic {
                weight *= traffic.multiplier(node, neighbor);
            }
            let new_cost = cost + weight;

            if new_cost < g[neighbor.index()] {
                g[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                open.push(OpenEntry {
                    f: new_cost
                        + heuristic.estimate(net.coord(neighbor), goal, net.max_speed_limit),
                    g: new_cost,
                    node: neighbor,
                });
            }
        }
    }

    Err(SpatialError::Unreachable { from: s, to: t })
}

fn reconstruct(net: &RoadNetwork, prev_edge: &[EdgeId], t: NodeId) -> Vec<EdgeId> {
    let mut edges = Vec::new();
    let mut cur = t;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = net.edge_from[e.index()];
    }
    edges.reverse();
    edges
}
