//! The concrete match-policy family.
//!
//! Every policy implements [`MatchPolicy`](crate::MatchPolicy) and differs
//! only in selection; the ride settlement afterwards is shared.  Policies
//! escalate in how much routing work they spend per match:
//!
//! | Policy                  | Routing per match                     |
//! |-------------------------|---------------------------------------|
//! | [`FifoPolicy`]          | none                                  |
//! | [`NearestDriverPolicy`] | none (straight-line only)             |
//! | [`BestPickupPolicy`]    | one query per available driver        |
//! | [`PrunedPickupPolicy`]  | ≤ 10 queries, early exit under 6 min  |
//! | [`EquitablePolicy`]     | ≤ 5 queries + fairness penalty        |
//! | [`TrafficAwarePolicy`]  | ≤ 5 congestion-aware queries          |
//!
//! [`PeakRetention`] wraps any of the above and only changes the
//! retirement rule.

mod best_pickup;
mod equitable;
mod fifo;
mod nearest;
mod pruned;
mod retention;
mod traffic_aware;

pub use best_pickup::BestPickupPolicy;
pub use equitable::EquitablePolicy;
pub use fifo::FifoPolicy;
pub use nearest::NearestDriverPolicy;
pub use pruned::PrunedPickupPolicy;
pub use retention::PeakRetention;
pub use traffic_aware::TrafficAwarePolicy;

use rh_core::Coord;

use crate::context::MatchContext;
use crate::pool::AvailablePool;

/// Reorder the pool by straight-line distance to `target`, nearest first.
/// Shared by the candidate-pruning policies.
pub(crate) fn sort_pool_by_distance(
    ctx: &MatchContext<'_>,
    pool: &mut AvailablePool,
    target: Coord,
) {
    pool.sort_by_key(|driver| ctx.state.drivers[driver.index()].pos.distance(target));
}
