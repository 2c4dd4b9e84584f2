//! Traffic-aware dispatch.
//!
//! Candidate pickup times are routed through the congestion overlay, so an
//! edge every previous match drove over looks slower than a fresh one.
//! After selection the winning pickup path is committed back to the
//! overlay — the self-loading feedback that spreads consecutive pickups
//! across parallel routes.

use rh_core::{EdgeId, PassengerId, drive_hour};
use rh_spatial::{Heuristic, SpatialError};

use crate::context::MatchContext;
use crate::error::{DispatchError, DispatchResult};
use crate::policies::sort_pool_by_distance;
use crate::policy::{MatchChoice, MatchPolicy};
use crate::pool::AvailablePool;

pub struct TrafficAwarePolicy {
    /// Candidate-pool size after the distance prune.
    pub keep: usize,
    /// Stop routing once a candidate's pickup is within this bound.
    pub early_exit_hours: f64,
}

impl Default for TrafficAwarePolicy {
    fn default() -> Self {
        Self { keep: 5, early_exit_hours: 0.1 }
    }
}

impl TrafficAwarePolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchPolicy for TrafficAwarePolicy {
    fn name(&self) -> &'static str {
        "traffic-aware"
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
            // Single candidate: no congestion query, nothing to commit.
            return Ok(MatchChoice::driver_only(pool.remove(0)));
        }

        let p = *ctx.state.passenger(passenger);
        let passenger_node = ctx.nearest_node(p.source);

        sort_pool_by_distance(ctx, pool, p.source);

        let mut best: Option<(f64, usize, Vec<EdgeId>)> = None;
        let mut last_err: Option<SpatialError> = None;

        for idx in 0..self.keep.min(pool.len()) {
            let driver = pool.get(idx);
            let driver_node = ctx.driver_node(driver);
            let hour = drive_hour(ctx.state.driver(driver).available_at, p.request_time);

            match ctx.travel_time_with_traffic(
                driver_node,
                passenger_node,
                hour,
                Heuristic::Euclidean,
            ) {
                Ok((pickup, path)) => {
                    let better = best.as_ref().is_none_or(|(t, _, _)| pickup < *t);
                    if better {
                        best = Some((pickup, idx, path));
                    }
                    if pickup <= self.early_exit_hours {
                        break;
                    }
                }
                Err(e) => last_err = Some(e),
            }
        }

        match best {
            Some((pickup, idx, path)) => {
                // The winning pickup route now loads the edges it uses.
                ctx.traffic.commit(ctx.network, &path);
                Ok(MatchChoice {
                    driver: pool.remove(idx),
                    pickup_time: Some(pickup),
                    path: Some(path),
                })
            }
            None => Err(last_err.expect("non-empty candidate set with no result").into()),
        }
    }
}
