//! Simulation-loop error type.

use thiserror::Error;

use rh_dispatch::DispatchError;
use rh_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum SimError {
    /// The passenger stream is not sorted by request time.  The whole
    /// replay depends on that ordering, so this is fatal at build time.
    #[error("passenger {index} requests earlier than its predecessor")]
    OutOfOrderPassengers { index: usize },

    /// Building the geo layer failed (e.g. an empty node set).
    #[error(transparent)]
    Spatial(#[from] SpatialError),

    /// A dispatch step failed in a way the loop does not absorb.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

pub type SimResult<T> = Result<T, SimError>;
