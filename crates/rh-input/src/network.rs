//! Road-network table loaders.
//!
//! # JSON formats
//!
//! Node coordinates — one object keyed by node id:
//!
//! ```json
//! { "42437644": { "lat": 40.7509, "lon": -73.9942 }, ... }
//! ```
//!
//! Adjacency — nested objects `from → to → [24 hourly bundles]`:
//!
//! ```json
//! { "42437644": { "42443668": [
//!     { "hour": 0, "time": 0.0101, "max_speed": 20.0 },
//!     ...
//! ] } }
//! ```
//!
//! # Interning
//!
//! String node ids are interned into dense `NodeId`s at load time (the ids
//! become indices into every per-node array downstream).  Assignment order
//! is the sorted order of the coordinate table's keys, so the same tables
//! always produce the same numbering.  The intern table is returned both
//! ways: `node_ids[NodeId]` for display, `node_index[&str]` for lookups.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use rh_core::{Coord, NodeId};
use rh_spatial::{HOURS_PER_DAY, HourlyWeight, RoadNetwork, RoadNetworkBuilder};

use crate::{InputError, InputResult};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct HourRecord {
    hour: u32,
    /// Travel time across the edge at this hour, in hours.
    time: f64,
    max_speed: f64,
}

// ── LoadedNetwork ─────────────────────────────────────────────────────────────

/// A built [`RoadNetwork`] plus the node-id intern table.
#[derive(Debug)]
pub struct LoadedNetwork {
    pub network: RoadNetwork,
    /// Original string id of each node, indexed by `NodeId`.
    pub node_ids: Vec<String>,
    /// Reverse lookup: string id → `NodeId`.
    pub node_index: HashMap<String, NodeId>,
}

/// Load and build the road network from the two JSON table files.
pub fn load_network_files(nodes_path: &Path, adjacency_path: &Path) -> InputResult<LoadedNetwork> {
    let nodes = std::fs::read_to_string(nodes_path)?;
    let adjacency = std::fs::read_to_string(adjacency_path)?;
    load_network_json(&nodes, &adjacency)
}

/// Load and build the road network from in-memory JSON strings.
///
/// Fails if any edge is missing an hourly bundle or references a node the
/// coordinate table does not define.  The parallel-edge count detected by
/// the network builder is surfaced on
/// [`RoadNetwork::parallel_edges_dropped`].
pub fn load_network_json(nodes_json: &str, adjacency_json: &str) -> InputResult<LoadedNetwork> {
    // BTreeMaps keep id interning independent of JSON object order.
    let node_table: BTreeMap<String, NodeRecord> = serde_json::from_str(nodes_json)?;
    let adjacency: BTreeMap<String, BTreeMap<String, Vec<HourRecord>>> =
        serde_json::from_str(adjacency_json)?;

    let mut builder = RoadNetworkBuilder::with_capacity(node_table.len(), adjacency.len());
    let mut node_ids = Vec::with_capacity(node_table.len());
    let mut node_index = HashMap::with_capacity(node_table.len());

    for (id, record) in &node_table {
        let node = builder.add_node(Coord::new(record.lat, record.lon));
        node_ids.push(id.clone());
        node_index.insert(id.clone(), node);
    }

    for (from, neighbors) in &adjacency {
        let from_node = resolve(&node_index, from)?;
        for (to, hours) in neighbors {
            let to_node = resolve(&node_index, to)?;
            builder.add_edge(from_node, to_node, hourly_weights(from, to, hours)?);
        }
    }

    Ok(LoadedNetwork { network: builder.build(), node_ids, node_index })
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn resolve(node_index: &HashMap<String, NodeId>, id: &str) -> InputResult<NodeId> {
    node_index
        .get(id)
        .copied()
        .ok_or_else(|| InputError::UnknownNode(id.to_string()))
}

/// Assemble the 24-slot weight array, insisting every hour is present.
fn hourly_weights(
    from: &str,
    to: &str,
    records: &[HourRecord],
) -> InputResult<[HourlyWeight; HOURS_PER_DAY]> {
    let mut weights = [HourlyWeight::default(); HOURS_PER_DAY];
    let mut seen = [false; HOURS_PER_DAY];

    for record in records {
        let hour = record.hour as usize;
        if hour < HOURS_PER_DAY {
            weights[hour] = HourlyWeight {
                travel_time: record.time,
                max_speed: record.max_speed,
            };
            seen[hour] = true;
        }
    }

    if let Some(missing) = seen.iter().position(|&s| !s) {
        return Err(InputError::MissingHour {
            from: from.to_string(),
            to: to.to_string(),
            hour: missing as u32,
        });
    }

    Ok(weights)
}
