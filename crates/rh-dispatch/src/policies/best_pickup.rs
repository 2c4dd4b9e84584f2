//! True-pickup-time dispatch: route every available driver to the
//! passenger and pick the fastest.
//!
//! The scoring heuristic is configurable — plain Dijkstra, or A* with the
//! admissible Euclidean bound for the same answers in fewer expansions.
//! With a single driver available, selection is trivial and no routing
//! happens at all.

use rh_core::{PassengerId, drive_hour};
use rh_spatial::{Heuristic, SpatialError};

use crate::context::MatchContext;
use crate::error::{DispatchError, DispatchResult};
use crate::policy::{MatchChoice, MatchPolicy};
use crate::pool::AvailablePool;

pub struct BestPickupPolicy {
    scoring: Heuristic,
}

impl BestPickupPolicy {
    /// Score candidates with plain Dijkstra.
    pub fn dijkstra() -> Self {
        Self { scoring: Heuristic::Dijkstra }
    }

    /// Score candidates with A* under the admissible Euclidean bound —
    /// identical pickup times, fewer node expansions.
    pub fn a_star() -> Self {
        Self { scoring: Heuristic::Euclidean }
    }
}

impl MatchPolicy for BestPickupPolicy {
    fn name(&self) -> &'static str {
        match self.scoring {
            Heuristic::Dijkstra => "best-pickup-dijkstra",
            Heuristic::Euclidean => "best-pickup-astar",
            Heuristic::Manhattan => "best-pickup-manhattan",
        }
    }

    fn settle_heuristic(&self) -> Heuristic {
        Heuristic::Euclidean
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
        if pool.len() == 1 {
            return Ok(MatchChoice::driver_only(pool.remove(0)));
        }

        let p = *ctx.state.passenger(passenger);
        let passenger_node = ctx.nearest_node(p.source);

        let mut best: Option<(f64, usize)> = None;
        let mut last_err: Option<SpatialError> = None;

        for idx in 0..pool.len() {
            let driver = pool.get(idx);
            let driver_node = ctx.driver_node(driver);
            let hour = drive_hour(ctx.state.driver(driver).available_at, p.request_time);

            match ctx.travel_time(driver_node, passenger_node, hour, self.scoring) {
                Ok(pickup) => {
                    if best.is_none_or(|(t, _)| pickup < t) {
                        best = Some((pickup, idx));
                    }
                }
                // An unroutable candidate is skipped, not fatal.
                Err(e) => last_err = Some(e),
            }
        }

        match best {
            Some((pickup, idx)) => Ok(MatchChoice {
                driver: pool.remove(idx),
                pickup_time: Some(pickup),
                path: None,
            }),
            None => Err(last_err.expect("non-empty pool with no result").into()),
        }
    }
}
