//! Pruned-candidate dispatch.
//!
//! Routing every available driver gets expensive when supply is deep, and
//! most of the pool is nowhere near the passenger anyway.  This policy
//! sorts the pool by straight-line distance, keeps only the nearest K,
//! ranks that sub-pool by sign-on time (longest-idle drivers get routed
//! first), and stops as soon as a candidate's routed pickup beats the
//! early-exit threshold.  Routing uses the Manhattan estimate — fast, and
//! close enough for candidate ranking even without optimality guarantees.

use rh_core::{PassengerId, SimTime, drive_hour};
use rh_spatial::{Heuristic, SpatialError};

use crate::context::MatchContext;
use crate::error::{DispatchError, DispatchResult};
use crate::policies::sort_pool_by_distance;
use crate::policy::{MatchChoice, MatchPolicy};
use crate::pool::AvailablePool;

pub struct PrunedPickupPolicy {
    /// Candidate-pool size after the distance prune.
    pub keep: usize,
    /// Stop routing candidates once one can pick up within this many hours.
    pub early_exit_hours: f64,
}

impl Default for PrunedPickupPolicy {
    fn default() -> Self {
        Self { keep: 10, early_exit_hours: 0.1 }
    }
}

impl PrunedPickupPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchPolicy for PrunedPickupPolicy {
    fn name(&self) -> &'static str {
        "pruned-pickup"
    }

    fn settle_heuristic(&self) -> Heuristic {
        Heuristic::Manhattan
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

        sort_pool_by_distance(ctx, pool, p.source);

        // Nearest K by distance, then routed in sign-on order so a
        // long-idle driver wins the early exit when several qualify.
        let keep = self.keep.min(pool.len());
        let mut candidates: Vec<(usize, SimTime)> = (0..keep)
            .map(|idx| (idx, ctx.state.driver(pool.get(idx)).available_at))
            .collect();
        candidates.sort_by_key(|&(_, signed_on)| signed_on);

        let mut best: Option<(f64, usize)> = None;
        let mut last_err: Option<SpatialError> = None;

        for &(idx, _) in &candidates {
            let driver = pool.get(idx);
            let driver_node = ctx.driver_node(driver);
            let hour = drive_hour(ctx.state.driver(driver).available_at, p.request_time);

            match ctx.travel_time(driver_node, passenger_node, hour, Heuristic::Manhattan) {
                Ok(pickup) => {
                    if best.is_none_or(|(t, _)| pickup < t) {
                        best = Some((pickup, idx));
                    }
                    if pickup <= self.early_exit_hours {
                        break;
                    }
                }
                Err(e) => last_err = Some(e),
            }
        }

        match best {
            Some((pickup, idx)) => Ok(MatchChoice {
                driver: pool.remove(idx),
                pickup_time: Some(pickup),
                path: None,
            }),
            None => Err(last_err.expect("non-empty candidate set with no result").into()),
        }
    }
}
