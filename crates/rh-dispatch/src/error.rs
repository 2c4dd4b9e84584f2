//! Dispatch-subsystem error type.

use thiserror::Error;

use rh_spatial::SpatialError;

/// Errors produced by match policies and the ride transaction.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A policy was invoked with no available drivers.  The caller is
    /// responsible for never doing this; fail fast if it happens.
    #[error("match requested with no available drivers")]
    EmptyPool,

    /// Routing failed (unreachable pair or corrupted adjacency).  The
    /// enclosing transaction is aborted; the caller decides whether to skip
    /// the passenger.
    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
