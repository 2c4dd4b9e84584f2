//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_hours`) are sorted by
//! source node and indexed by `EdgeId`.  Iteration over a node's outgoing
//! edges is therefore a contiguous memory scan — ideal for the search
//! engine's inner loop.
//!
//! # Hourly weights
//!
//! Every edge carries 24 [`HourlyWeight`] bundles, one per hour of day,
//! modelling diurnal traffic.  The global maximum speed over all
//! (edge, hour) pairs is precomputed at build time; the search engine
//! divides straight-line distances by it to turn them into admissible
//! time estimates.

use rh_core::{Coord, EdgeId, NodeId};

use crate::{SpatialError, SpatialResult};

/// Hours in the diurnal weight cycle.
pub const HOURS_PER_DAY: usize = 24;

/// Per-hour attributes of a directed edge.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourlyWeight {
    /// Travel time across the edge at this hour, in hours.
    pub travel_time: f64,
    /// Speed limit on the edge at this hour (input units; only its global
    /// maximum matters to the engine).
    pub max_speed: f64,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format with hour-indexed edge weights.
///
/// Fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`].
#[derive(Debug)]
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<Coord>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.  Redundant with CSR but required for
    /// efficient route reconstruction and traffic-map commits.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Hour-indexed weight bundles of each edge.
    pub edge_hours: Vec<[HourlyWeight; HOURS_PER_DAY]>,

    // ── Precomputed aggregates ────────────────────────────────────────────
    /// Maximum `max_speed` over all (edge, hour) pairs.  Scales straight-line
    /// distances into lower-bound time estimates.
    pub max_speed_limit: f64,

    /// Number of duplicate (from, to) pairs dropped at build time.  Parallel
    /// edges indicate a questionable adjacency table; the first occurrence
    /// wins and the count is surfaced for the loader to report.
    pub parallel_edges_dropped: usize,
}

impl RoadNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Iterator over the out-neighbors of `node`, in edge order.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges(node).map(|e| self.edge_to[e.index()])
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// The `EdgeId` connecting `from` to `to`, if the graph has one.
    ///
    /// Linear scan of `from`'s CSR slice; out-degrees on road graphs are
    /// small constants.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.out_edges(from).find(|e| self.edge_to[e.index()] == to)
    }

    /// Weight bundle for the edge `from → to` at `hour` (0..=23).
    ///
    /// Fails with [`SpatialError::NoSuchEdge`] if the pair is not connected.
    pub fn edge_attr(&self, from: NodeId, to: NodeId, hour: u32) -> SpatialResult<&HourlyWeight> {
        let edge = self
            .edge_between(from, to)
            .ok_or(SpatialError::NoSuchEdge { from, to })?;
        Ok(&self.edge_hours[edge.index()][hour as usize % HOURS_PER_DAY])
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Geographic position of `node`.
    #[inline]
    pub fn coord(&self, node: NodeId) -> Coord {
        self.node_pos[node.index()]
    }

    /// Flat-plane Euclidean distance between two nodes, in degrees.
    #[inline]
    pub fn node_distance(&self, u: NodeId, v: NodeId) -> f64 {
        self.coord(u).distance(self.coord(v))
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order.  `build()`
/// sorts edges by (source, destination), drops parallel duplicates (first
/// occurrence wins), constructs the CSR arrays, and precomputes the global
/// speed limit.
pub struct RoadNetworkBuilder {
    nodes: Vec<Coord>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    hours: [HourlyWeight; HOURS_PER_DAY],
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading from the adjacency table.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Coord) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge from `from` to `to` with a full diurnal
    /// weight cycle.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, hours: [HourlyWeight; HOURS_PER_DAY]) {
        self.raw_edges.push(RawEdge { from, to, hours });
    }

    /// Convenience: the same weight bundle for all 24 hours.
    pub fn add_edge_uniform(&mut self, from: NodeId, to: NodeId, weight: HourlyWeight) {
        self.add_edge(from, to, [weight; HOURS_PER_DAY]);
    }

    /// Look up the position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> Coord {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(E log E) for the edge sort, O(E) for CSR assembly.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();

        // Sort by (source, destination); a stable sort keeps the first of
        // any parallel pair in front so dedup retains it.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| (e.from, e.to));
        let before = raw.len();
        raw.dedup_by_key(|e| (e.from, e.to));
        let parallel_edges_dropped = before - raw.len();

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_hours: Vec<[HourlyWeight; HOURS_PER_DAY]> =
            raw.iter().map(|e| e.hours).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        let max_speed_limit = edge_hours
            .iter()
            .flat_map(|hours| hours.iter())
            .map(|w| w.max_speed)
            .fold(f64::NEG_INFINITY, f64::max);

        RoadNetwork {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_hours,
            max_speed_limit,
            parallel_edges_dropped,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
