//! Advisory travel-time cache keyed by `(origin, destination)` node pair.
//!
//! The ride transaction writes every travel time it computes through this
//! cache but never reads it back — cached values can therefore never perturb
//! the desiderata, and the hour the value was computed at does not need to be
//! part of the key.  Semantics are last-writer-wins, and the cache may be
//! cleared at any point without affecting correctness.

use rustc_hash::FxHashMap;

use rh_core::NodeId;

/// Last computed travel time (hours) per directed node pair.
#[derive(Default, Debug)]
pub struct PairTimeCache {
    map: FxHashMap<(NodeId, NodeId), f64>,
}

impl PairTimeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the travel time for `(from, to)`, replacing any prior value.
    #[inline]
    pub fn insert(&mut self, from: NodeId, to: NodeId, hours: f64) {
        self.map.insert((from, to), hours);
    }

    /// The most recently recorded travel time for `(from, to)`, if any.
    ///
    /// The value may have been computed at a different hour of day; callers
    /// needing hourly accuracy must route instead of reading here.
    #[inline]
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.map.get(&(from, to)).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop all entries.  Bounded-memory escape hatch for long runs; has no
    /// effect on simulation results.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
