//! 2-D k-d tree over node coordinates.
//!
//! # Design
//!
//! Built once from the full node set by recursive median split on
//! alternating axes (lat at even depths, lon at odd).  Nodes live in a flat
//! arena (`Vec<KdNode>` with `u32` child links) rather than boxed children,
//! keeping the tree cache-friendly and trivially droppable.
//!
//! The nearest query is the standard descend-then-backtrack: walk toward
//! the query point first, then visit the far child only when the
//! axis-aligned gap to the splitting plane is within the current best
//! radius.  All comparisons use squared distances; exact ties resolve to
//! the lower `NodeId` so repeated builds over the same node set answer
//! identically.
//!
//! A lat-major sorted array with binary search plus a fixed-radius scan was
//! considered and rejected: it is not isotropic and degrades badly on node
//! sets elongated along the longitude axis.

use rh_core::{Coord, NodeId};

use crate::{SpatialError, SpatialResult};

/// Sentinel child link meaning "no subtree".
const NONE: u32 = u32::MAX;

#[derive(Debug)]
struct KdNode {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
    left: u32,
    right: u32,
}

/// Static nearest-node index over a set of coordinates.
///
/// `NodeId`s are the dense indices of the input slice, matching the
/// [`RoadNetwork`](crate::RoadNetwork) node numbering.
#[derive(Debug)]
pub struct KdTree {
    nodes: Vec<KdNode>,
    root: u32,
}

impl KdTree {
    /// Build the index over `coords`, where `coords[i]` is the position of
    /// `NodeId(i)`.
    ///
    /// Fails with [`SpatialError::NoNodes`] on an empty slice.
    /// Construction is O(N log² N) (a sort per split level).
    pub fn build(coords: &[Coord]) -> SpatialResult<KdTree> {
        if coords.is_empty() {
            return Err(SpatialError::NoNodes);
        }

        let mut entries: Vec<([f64; 2], NodeId)> = coords
            .iter()
            .enumerate()
            .map(|(i, c)| ([c.lat, c.lon], NodeId(i as u32)))
            .collect();

        let mut tree = KdTree {
            nodes: Vec::with_capacity(coords.len()),
            root: NONE,
        };
        tree.root = tree.build_rec(&mut entries, 0);
        Ok(tree)
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The `NodeId` whose coordinate is nearest to `(lat, lon)` by squared
    /// Euclidean distance; exact ties go to the lower id.
    pub fn nearest(&self, lat: f64, lon: f64) -> NodeId {
        let mut best = (f64::INFINITY, NodeId::INVALID);
        self.search(self.root, [lat, lon], 0, &mut best);
        best.1
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn build_rec(&mut self, entries: &mut [([f64; 2], NodeId)], depth: usize) -> u32 {
        if entries.is_empty() {
            return NONE;
        }

        let axis = depth % 2;
        // Secondary key: the id, so duplicate coordinates split
        // deterministically.
        entries.sort_unstable_by(|a, b| {
            a.0[axis].total_cmp(&b.0[axis]).then(a.1.cmp(&b.1))
        });
        let median = entries.len() / 2;
        let (point, id) = entries[median];

        let slot = self.nodes.len() as u32;
        self.nodes.push(KdNode { point, id, left: NONE, right: NONE });

        let (lo, hi) = entries.split_at_mut(median);
        let left = self.build_rec(lo, depth + 1);
        let right = self.build_rec(&mut hi[1..], depth + 1);
        self.nodes[slot as usize].left = left;
        self.nodes[slot as usize].right = right;
        slot
    }

    fn search(&self, slot: u32, query: [f64; 2], depth: usize, best: &mut (f64, NodeId)) {
        if slot == NONE {
            return;
        }
        let node = &self.nodes[slot as usize];

        let d2 = dist_sq(query, node.point);
        if d2 < best.0 || (d2 == best.0 && node.id < best.1) {
            *best = (d2, node.id);
        }

        let axis = depth % 2;
        let gap = query[axis] - node.point[axis];
        let (near, far) = if gap < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        self.search(near, query, depth + 1, best);
        // The far side can only hold a winner (or a lower-id tie) if the
        // splitting plane is within the current best radius.
        if gap * gap <= best.0 {
            self.search(far, query, depth + 1, best);
        }
    }
}

#[inline]
fn dist_sq(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dlat = a[0] - b[0];
    let dlon = a[1] - b[1];
    dlat * dlat + dlon * dlon
}
