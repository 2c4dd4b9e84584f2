//! The `MatchPolicy` trait — the main extension point for dispatch
//! strategies.
//!
//! One trait replaces the reference implementation's parallel matcher
//! hierarchy: concrete policies differ only in how they pick a driver out
//! of the available pool, so that is the one required method.  Everything
//! they share — driver tables, memo, cache, metrics — lives in
//! [`MatcherState`](crate::MatcherState) and is borrowed through the
//! context, never subclassed.

use rh_core::{DriverId, EdgeId, PassengerId};
use rh_spatial::Heuristic;

use crate::context::MatchContext;
use crate::error::DispatchResult;
use crate::pool::AvailablePool;

/// The outcome of a selection: which driver, plus whatever the policy
/// already computed that the ride transaction can reuse.
#[derive(Debug, Clone)]
pub struct MatchChoice {
    pub driver: DriverId,

    /// Pickup time (hours) the policy already routed, if any.  When present
    /// the ride transaction uses it instead of routing the pickup leg again.
    pub pickup_time: Option<f64>,

    /// The routed pickup path, when the policy computed one (traffic-aware
    /// selection).  Informational; the policy itself commits it.
    pub path: Option<Vec<EdgeId>>,
}

impl MatchChoice {
    /// A bare choice with nothing precomputed.
    pub fn driver_only(driver: DriverId) -> Self {
        Self { driver, pickup_time: None, path: None }
    }
}

/// Pluggable driver-selection strategy.
///
/// Implementations must remove the chosen driver from the pool before
/// returning.  Policies may reorder the pool while deciding (the pruned
/// family sorts it by distance to the passenger).
pub trait MatchPolicy {
    /// Short name for reports and traces.
    fn name(&self) -> &'static str;

    /// Heuristic the ride transaction settles the ride with (pickup-leg
    /// recompute when the policy supplied none, plus the trip leg).
    fn settle_heuristic(&self) -> Heuristic;

    /// Pick one driver for `passenger` out of `pool` and remove it.
    ///
    /// Fails with [`DispatchError::EmptyPool`](crate::DispatchError) when
    /// called on an empty pool, or with a routing error when no candidate
    /// could be routed to the passenger.
    fn choose(
        &mut self,
        ctx: &mut MatchContext<'_>,
        pool: &mut AvailablePool,
        passenger: PassengerId,
    ) -> DispatchResult<MatchChoice>;

    /// Whether an exhausted driver (capacity reached zero) stays in
    /// rotation for a ride settled at `hour`.  Default: never.
    fn waive_retirement(&self, _hour: u32) -> bool {
        false
    }
}
