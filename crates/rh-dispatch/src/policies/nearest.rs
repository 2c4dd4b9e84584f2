//! Straight-line nearest dispatch: pick the driver with the smallest
//! Euclidean distance to the passenger's pickup point.  Ties keep the
//! earlier-inserted (earlier sign-on) driver.

use rh_core::PassengerId;
use rh_spatial::Heuristic;

use crate::context::MatchContext;
use crate::error::{DispatchError, DispatchResult};
use crate::policy::{MatchChoice, MatchPolicy};
use crate::pool::AvailablePool;

pub struct NearestDriverPolicy;

impl MatchPolicy for NearestDriverPolicy {
    fn name(&self) -> &'static str {
        "nearest-driver"
    }

    fn settle_heuristic(&self) -> Heuristic {
        Heuristic::Dijkstra
    }

    fn choose(
        &mut self,
        ctx: &mut MatchContext<'_>,
        pool: &mut AvailablePool,
        passenger: PassengerId,
    ) -> DispatchResult<MatchChoice> {
        if pool.is_empty() {
            return Err(DispatchError::EmptyPool);
        }

        let source = ctx.state.passenger(passenger).source;
        let mut best = (f64::INFINITY, 0);
        for (idx, driver) in pool.iter().enumerate() {
            let dist = ctx.state.drivers[driver.index()].pos.distance(source);
            if dist < best.0 {
                best = (dist, idx);
            }
        }

        Ok(MatchChoice::driver_only(pool.remove(best.1)))
    }
}
