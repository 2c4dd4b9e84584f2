//! Spatial-subsystem error type.

use thiserror::Error;

use rh_core::NodeId;

/// Errors produced by `rh-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// The nearest-node index was built over an empty node set.  Fatal at
    /// load time: nothing can be snapped to a network with no nodes.
    #[error("cannot build a nearest-node index over an empty node set")]
    NoNodes,

    /// An edge attribute was requested for a node pair the graph does not
    /// connect — indicates a corrupted adjacency table.
    #[error("no edge from {from} to {to}")]
    NoSuchEdge { from: NodeId, to: NodeId },

    /// The search exhausted its open set without reaching the target.
    #[error("no route from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
