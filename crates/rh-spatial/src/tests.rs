//! Unit tests for rh-spatial.
//!
//! All tests use hand-crafted networks so they run without any input files.

#[cfg(test)]
mod helpers {
    use rh_core::{Coord, NodeId};

    use crate::network::HOURS_PER_DAY;
    use crate::{HourlyWeight, RoadNetwork, RoadNetworkBuilder};

    pub fn weight(travel_time: f64, max_speed: f64) -> HourlyWeight {
        HourlyWeight { travel_time, max_speed }
    }

    /// Add an undirected road with the same weight at all hours.
    pub fn add_road(b: &mut RoadNetworkBuilder, u: NodeId, v: NodeId, w: HourlyWeight) {
        b.add_edge_uniform(u, v, w);
        b.add_edge_uniform(v, u, w);
    }

    /// Build a small grid network for testing.
    ///
    /// Nodes (lat, lon):
    ///   0:(0,0)  1:(0,1)  2:(0,2)
    ///   3:(1,0)           4:(1,2)
    ///
    /// Undirected edges: 0-1, 1-2, 2-4, 0-3, 3-4.
    ///
    /// Travel times are constant across hours and chosen so the shortest
    /// route 0→4 is always 0→1→2→4 (0.3 h) over 0→3→4 (0.6 h).
    pub fn grid_network() -> (RoadNetwork, [NodeId; 5]) {
        let mut b = RoadNetworkBuilder::new();

        let n0 = b.add_node(Coord::new(0.0, 0.0));
        let n1 = b.add_node(Coord::new(0.0, 1.0));
        let n2 = b.add_node(Coord::new(0.0, 2.0));
        let n3 = b.add_node(Coord::new(1.0, 0.0));
        let n4 = b.add_node(Coord::new(1.0, 2.0));

        add_road(&mut b, n0, n1, weight(0.1, 30.0));
        add_road(&mut b, n1, n2, weight(0.1, 30.0));
        add_road(&mut b, n2, n4, weight(0.1, 30.0));
        add_road(&mut b, n0, n3, weight(0.5, 30.0));
        add_road(&mut b, n3, n4, weight(0.1, 30.0));

        (b.build(), [n0, n1, n2, n3, n4])
    }

    /// Two parallel corridors whose relative cost flips at hour 8: the
    /// northern route 0→1→3 is cheap off-peak, the southern 0→2→3 cheap
    /// during the morning rush.
    pub fn rush_hour_network() -> (RoadNetwork, [NodeId; 4]) {
        let mut b = RoadNetworkBuilder::new();

        let n0 = b.add_node(Coord::new(0.0, 0.0));
        let n1 = b.add_node(Coord::new(0.1, 1.0));
        let n2 = b.add_node(Coord::new(-0.1, 1.0));
        let n3 = b.add_node(Coord::new(0.0, 2.0));

        let mut north = [weight(0.1, 40.0); HOURS_PER_DAY];
        north[8] = weight(0.9, 40.0); // congested at 8 am
        let south = [weight(0.2, 40.0); HOURS_PER_DAY];

        b.add_edge(n0, n1, north);
        b.add_edge(n1, n3, north);
        b.add_edge(n0, n2, south);
        b.add_edge(n2, n3, south);

        (b.build(), [n0, n1, n2, n3])
    }

    /// Reference single-source shortest path: textbook Dijkstra with no
    /// heuristic and no early exit, for cross-checking the engine.
    pub fn reference_dijkstra(net: &RoadNetwork, s: NodeId, t: NodeId, hour: u32) -> Option<f64> {
        let n = net.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut done = vec![false; n];
        dist[s.index()] = 0.0;

        loop {
            let mut u = None;
            let mut best = f64::INFINITY;
            for i in 0..n {
                if !done[i] && dist[i] < best {
                    best = dist[i];
                    u = Some(i);
                }
            }
            let Some(u) = u else { break };
            done[u] = true;

            for e in net.out_edges(NodeId(u as u32)) {
                let v = net.edge_to[e.index()].index();
                let w = net.edge_hours[e.index()][hour as usize].travel_time;
                if dist[u] + w < dist[v] {
                    dist[v] = dist[u] + w;
                }
            }
        }

        dist[t.index()].is_finite().then_some(dist[t.index()])
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rh_core::Coord;

    use super::helpers::{self, weight};
    use crate::{RoadNetworkBuilder, SpatialError};

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn csr_out_edges() {
        let (net, [n0, n1, n2, n3, n4]) = helpers::grid_network();

        assert_eq!(net.out_degree(n0), 2); // n0→n1, n0→n3
        assert_eq!(net.out_degree(n1), 2);
        assert_eq!(net.out_degree(n2), 2);
        assert_eq!(net.out_degree(n3), 2);
        assert_eq!(net.out_degree(n4), 2);

        for e in net.out_edges(n0) {
            assert_eq!(net.edge_from[e.index()], n0);
        }
        let n0_neighbors: Vec<_> = net.neighbors(n0).collect();
        assert_eq!(n0_neighbors, vec![n1, n3]);
    }

    #[test]
    fn edge_attr_by_hour() {
        let (net, [n0, n1, _, n3]) = helpers::rush_hour_network();

        assert_eq!(net.edge_attr(n0, n1, 3).unwrap().travel_time, 0.1);
        assert_eq!(net.edge_attr(n0, n1, 8).unwrap().travel_time, 0.9);

        // n3 has no outgoing edges at all.
        assert!(matches!(
            net.edge_attr(n3, n0, 0),
            Err(SpatialError::NoSuchEdge { .. })
        ));
    }

    #[test]
    fn parallel_edges_detected_first_wins() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(Coord::new(0.0, 0.0));
        let c = b.add_node(Coord::new(0.0, 1.0));
        b.add_edge_uniform(a, c, weight(0.1, 30.0));
        b.add_edge_uniform(a, c, weight(0.7, 30.0)); // duplicate pair
        let net = b.build();

        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.parallel_edges_dropped, 1);
        assert_eq!(net.edge_attr(a, c, 0).unwrap().travel_time, 0.1);
    }

    #[test]
    fn global_speed_limit_spans_all_hours() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(Coord::new(0.0, 0.0));
        let c = b.add_node(Coord::new(0.0, 1.0));
        let mut hours = [weight(0.1, 25.0); crate::HOURS_PER_DAY];
        hours[17] = weight(0.1, 65.0); // one fast hour
        b.add_edge(a, c, hours);
        let net = b.build();

        assert_eq!(net.max_speed_limit, 65.0);
    }

    #[test]
    fn node_distance_is_euclidean() {
        let (net, [n0, _, n2, ..]) = helpers::grid_network();
        assert_eq!(net.node_distance(n0, n2), 2.0);
        assert_eq!(net.node_distance(n2, n0), 2.0);
    }

    #[test]
    fn directed_only_edge() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(Coord::new(0.0, 0.0));
        let c = b.add_node(Coord::new(0.0, 1.0));
        b.add_edge_uniform(a, c, weight(0.1, 30.0)); // one-way a → c
        let net = b.build();

        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 0);
        assert!(net.edge_between(c, a).is_none());
    }
}

// ── k-d tree ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kdtree {
    use rh_core::{Coord, NodeId, SimRng};

    use crate::{KdTree, SpatialError};

    #[test]
    fn empty_input_fails() {
        assert!(matches!(KdTree::build(&[]), Err(SpatialError::NoNodes)));
    }

    #[test]
    fn exact_hit() {
        let coords = vec![
            Coord::new(0.0, 0.0),
            Coord::new(0.0, 1.0),
            Coord::new(1.0, 0.0),
        ];
        let tree = KdTree::build(&coords).unwrap();
        assert_eq!(tree.nearest(0.0, 1.0), NodeId(1));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn nearest_between_points() {
        let coords = vec![Coord::new(0.0, 0.0), Coord::new(0.0, 1.0)];
        let tree = KdTree::build(&coords).unwrap();
        assert_eq!(tree.nearest(0.0, 0.4), NodeId(0));
        assert_eq!(tree.nearest(0.0, 0.6), NodeId(1));
    }

    #[test]
    fn duplicate_coordinates_resolve_to_lower_id() {
        let coords = vec![
            Coord::new(5.0, 5.0),
            Coord::new(1.0, 1.0),
            Coord::new(1.0, 1.0), // duplicate of node 1
            Coord::new(1.0, 1.0), // and another
        ];
        let tree = KdTree::build(&coords).unwrap();
        assert_eq!(tree.nearest(1.0, 1.0), NodeId(1));
        assert_eq!(tree.nearest(1.2, 0.9), NodeId(1));
    }

    #[test]
    fn equidistant_query_takes_lower_id() {
        let coords = vec![Coord::new(0.0, 2.0), Coord::new(0.0, 0.0)];
        let tree = KdTree::build(&coords).unwrap();
        // (0, 1) is exactly between both nodes.
        assert_eq!(tree.nearest(0.0, 1.0), NodeId(0));
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = SimRng::new(20_140_425);
        let coords: Vec<Coord> = (0..500)
            .map(|_| Coord::new(rng.gen_range(40.0..41.0), rng.gen_range(-74.5..-73.5)))
            .collect();
        let tree = KdTree::build(&coords).unwrap();

        for _ in 0..200 {
            let q = Coord::new(rng.gen_range(39.9..41.1), rng.gen_range(-74.6..-73.4));
            let found = tree.nearest(q.lat, q.lon);

            let best_sq = coords
                .iter()
                .map(|c| c.distance_sq(q))
                .fold(f64::INFINITY, f64::min);
            // The spatial index must never return a node farther than the
            // true nearest.
            assert_eq!(coords[found.index()].distance_sq(q), best_sq);
        }
    }

    #[test]
    fn rebuild_is_deterministic() {
        let mut rng = SimRng::new(7);
        let coords: Vec<Coord> = (0..200)
            .map(|_| Coord::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
            .collect();
        let a = KdTree::build(&coords).unwrap();
        let b = KdTree::build(&coords).unwrap();

        for _ in 0..100 {
            let (lat, lon) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            assert_eq!(a.nearest(lat, lon), b.nearest(lat, lon));
        }
    }
}

// ── Path engine ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use rh_core::{Coord, NodeId, SimRng};

    use super::helpers::{self, add_road, reference_dijkstra, weight};
    use crate::{
        Heuristic, RoadNetworkBuilder, SpatialError, travel_time, travel_time_and_path,
    };

    #[test]
    fn trivial_same_node() {
        let (net, [n0, ..]) = helpers::grid_network();
        assert_eq!(travel_time(&net, n0, n0, 0, Heuristic::Dijkstra).unwrap(), 0.0);
        let (time, path) = travel_time_and_path(&net, n0, n0, 0, Heuristic::Euclidean).unwrap();
        assert_eq!(time, 0.0);
        assert!(path.is_empty());
    }

    #[test]
    fn shortest_path_correct() {
        let (net, [n0, n1, n2, _, n4]) = helpers::grid_network();
        let (time, path) = travel_time_and_path(&net, n0, n4, 12, Heuristic::Dijkstra).unwrap();

        assert!((time - 0.3).abs() < 1e-12);
        assert_eq!(path.len(), 3);
        assert_eq!(net.edge_from[path[0].index()], n0);
        assert_eq!(net.edge_to[path[0].index()], n1);
        assert_eq!(net.edge_to[path[1].index()], n2);
        assert_eq!(net.edge_to[path[2].index()], n4);
    }

    #[test]
    fn path_edge_times_sum_to_total() {
        let (net, [n0, _, _, _, n4]) = helpers::grid_network();
        let hour = 9;
        let (time, path) = travel_time_and_path(&net, n0, n4, hour, Heuristic::Dijkstra).unwrap();

        let sum: f64 = path
            .iter()
            .map(|e| net.edge_hours[e.index()][hour as usize].travel_time)
            .sum();
        assert!((sum - time).abs() < 1e-12);
    }

    #[test]
    fn hour_selects_weights() {
        let (net, [n0, _, _, n3]) = helpers::rush_hour_network();

        // Off-peak the northern corridor wins; at 8 am the southern one.
        let off_peak = travel_time(&net, n0, n3, 3, Heuristic::Dijkstra).unwrap();
        let rush = travel_time(&net, n0, n3, 8, Heuristic::Dijkstra).unwrap();
        assert!((off_peak - 0.2).abs() < 1e-12);
        assert!((rush - 0.4).abs() < 1e-12);
    }

    #[test]
    fn euclidean_matches_dijkstra_optimum() {
        // Admissible heuristics must agree with the reference optimum on
        // every solvable pair.
        let mut rng = SimRng::new(99);
        let mut b = RoadNetworkBuilder::new();
        let nodes: Vec<NodeId> = (0..30)
            .map(|_| b.add_node(Coord::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))))
            .collect();
        // Ring + random chords keeps everything reachable.
        for i in 0..nodes.len() {
            let j = (i + 1) % nodes.len();
            add_road(&mut b, nodes[i], nodes[j], weight(rng.gen_range(0.05..0.5), 50.0));
        }
        for _ in 0..20 {
            let i = rng.gen_range(0..nodes.len());
            let j = rng.gen_range(0..nodes.len());
            if i != j {
                add_road(&mut b, nodes[i], nodes[j], weight(rng.gen_range(0.05..0.5), 50.0));
            }
        }
        let net = b.build();

        for _ in 0..50 {
            let s = nodes[rng.gen_range(0..nodes.len())];
            let t = nodes[rng.gen_range(0..nodes.len())];
            let expected = reference_dijkstra(&net, s, t, 0).unwrap();
            let dij = travel_time(&net, s, t, 0, Heuristic::Dijkstra).unwrap();
            let euc = travel_time(&net, s, t, 0, Heuristic::Euclidean).unwrap();
            assert!((dij - expected).abs() < 1e-9, "dijkstra {dij} vs {expected}");
            assert!((euc - expected).abs() < 1e-9, "euclidean {euc} vs {expected}");
        }
    }

    #[test]
    fn manhattan_finds_a_route() {
        // No optimality guarantee, but it must still return a valid time.
        let (net, [n0, _, _, _, n4]) = helpers::grid_network();
        let time = travel_time(&net, n0, n4, 0, Heuristic::Manhattan).unwrap();
        assert!(time >= 0.3 - 1e-12);
    }

    #[test]
    fn unreachable_target() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(Coord::new(0.0, 0.0));
        let c = b.add_node(Coord::new(1.0, 0.0));
        // No edges at all.
        let net = b.build();

        assert!(matches!(
            travel_time(&net, a, c, 0, Heuristic::Dijkstra),
            Err(SpatialError::Unreachable { .. })
        ));
    }

    #[test]
    fn one_way_blocks_return() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(Coord::new(0.0, 0.0));
        let c = b.add_node(Coord::new(0.0, 1.0));
        b.add_edge_uniform(a, c, weight(0.1, 30.0));
        let net = b.build();

        assert!(travel_time(&net, a, c, 0, Heuristic::Euclidean).is_ok());
        assert!(travel_time(&net, c, a, 0, Heuristic::Euclidean).is_err());
    }
}

// ── Congestion overlay ────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use super::helpers;
    use crate::{Heuristic, TrafficMap, travel_time_with_traffic};

    #[test]
    fn untouched_map_changes_nothing() {
        let (net, [n0, _, _, _, n4]) = helpers::grid_network();
        let traffic = TrafficMap::new();
        let (time, path) =
            travel_time_with_traffic(&net, &traffic, n0, n4, 0, Heuristic::Dijkstra).unwrap();
        assert!((time - 0.3).abs() < 1e-12);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn committed_paths_raise_cost_and_reroute() {
        let (net, [n0, _, _, n3, n4]) = helpers::grid_network();
        let mut traffic = TrafficMap::new();

        // Load the short corridor until the long way round wins:
        // 0.3 h × (1 + count) > 0.6 h once count ≥ 2.
        for _ in 0..2 {
            let (_, path) =
                travel_time_with_traffic(&net, &traffic, n0, n4, 0, Heuristic::Dijkstra).unwrap();
            traffic.commit(&net, &path);
        }

        let (time, path) =
            travel_time_with_traffic(&net, &traffic, n0, n4, 0, Heuristic::Dijkstra).unwrap();
        assert!((time - 0.6).abs() < 1e-12, "expected reroute, got {time}");
        assert_eq!(net.edge_to[path[0].index()], n3);
    }

    #[test]
    fn query_does_not_commit() {
        let (net, [n0, _, _, _, n4]) = helpers::grid_network();
        let traffic = TrafficMap::new();
        for _ in 0..3 {
            travel_time_with_traffic(&net, &traffic, n0, n4, 0, Heuristic::Dijkstra).unwrap();
        }
        assert!(traffic.is_empty());
    }

    #[test]
    fn commit_counts_accumulate() {
        let (net, [n0, n1, ..]) = helpers::grid_network();
        let mut traffic = TrafficMap::new();
        let edge = net.edge_between(n0, n1).unwrap();

        traffic.commit(&net, &[edge]);
        traffic.commit(&net, &[edge]);
        assert_eq!(traffic.count(n0, n1), 2);
        assert_eq!(traffic.multiplier(n0, n1), 3.0);
        // Direction matters.
        assert_eq!(traffic.count(n1, n0), 0);
    }
}
