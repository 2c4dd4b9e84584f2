//! First-in-first-out dispatch: the driver who signed on earliest serves
//! the longest-waiting passenger.  No routing at selection time at all,
//! which makes this the baseline every other policy is measured against.

use rh_core::PassengerId;
use rh_spatial::Heuristic;

use crate::context::MatchContext;
use crate::error::{DispatchError, DispatchResult};
use crate::policy::{MatchChoice, MatchPolicy};
use crate::pool::AvailablePool;

#[derive(Debug)]
pub struct FifoPolicy;

impl MatchPolicy for FifoPolicy {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn settle_heuristic(&self) -> Heuristic {
        Heuristic::Dijkstra
    }

    fn choose(
        &mut self,
        _ctx: &mut MatchContext<'_>,
        pool: &mut AvailablePool,
        _passenger: PassengerId,
    ) -> DispatchResult<MatchChoice> {
        pool.pop_front()
            .map(MatchChoice::driver_only)
            .ok_or(DispatchError::EmptyPool)
    }
}
