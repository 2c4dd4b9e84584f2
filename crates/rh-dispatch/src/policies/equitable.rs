//! Equitable dispatch: spread rides across drivers.
//!
//! Candidate ranking multiplies each routed pickup time by
//! `1.5^(assignments/10 + 1)`, so a driver who has already been assigned
//! many rides must be substantially closer to win the next one.  Selection
//! minimizes the adjusted score while the ride itself is settled — and
//! logged — with the raw pickup time.  Assignments are counted at selection
//! time, before the ride transaction runs.

use rh_core::{PassengerId, drive_hour};
use rh_spatial::{Heuristic, SpatialError};

use crate::context::MatchContext;
use crate::error::{DispatchError, DispatchResult};
use crate::policies::sort_pool_by_distance;
use crate::policy::{MatchChoice, MatchPolicy};
use crate::pool::AvailablePool;

pub struct EquitablePolicy {
    /// Candidate-pool size after the distance prune.
    pub keep: usize,
    /// Stop routing once a candidate's raw pickup is within this bound.
    pub early_exit_hours: f64,
}

impl Default for EquitablePolicy {
    fn default() -> Self {
        Self { keep: 5, early_exit_hours: 0.1 }
    }
}

impl EquitablePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fairness multiplier for a driver with `assignments` rides so far.
    fn penalty(assignments: u32) -> f64 {
        1.5f64.powf(assignments as f64 / 10.0 + 1.0)
    }
}

impl MatchPolicy for EquitablePolicy {
    fn name(&self) -> &'static str {
        "equitable"
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
            let driver = pool.remove(0);
            ctx.state.record_assignment(driver);
            return Ok(MatchChoice::driver_only(driver));
        }

        let p = *ctx.state.passenger(passenger);
        let passenger_node = ctx.nearest_node(p.source);

        sort_pool_by_distance(ctx, pool, p.source);

        // (raw pickup, adjusted score, pool index) of the best candidate.
        let mut best: Option<(f64, f64, usize)> = None;
        let mut last_err: Option<SpatialError> = None;

        for idx in 0..self.keep.min(pool.len()) {
            let driver = pool.get(idx);
            let driver_node = ctx.driver_node(driver);
            let hour = drive_hour(ctx.state.driver(driver).available_at, p.request_time);

            match ctx.travel_time(driver_node, passenger_node, hour, Heuristic::Manhattan) {
                Ok(pickup) => {
                    let score = pickup * Self::penalty(ctx.state.assignment_count(driver));
                    if best.is_none_or(|(_, s, _)| score < s) {
                        best = Some((pickup, score, idx));
                    }
                    if pickup <= self.early_exit_hours {
                        break;
                    }
                }
                Err(e) => last_err = Some(e),
            }
        }

        match best {
            Some((pickup, _, idx)) => {
                let driver = pool.remove(idx);
                ctx.state.record_assignment(driver);
                Ok(MatchChoice { driver, pickup_time: Some(pickup), path: None })
            }
            None => Err(last_err.expect("non-empty candidate set with no result").into()),
        }
    }
}
