//! Peak-hour retention wrapper.
//!
//! Driver supply craters in the evening precisely when demand peaks, so
//! this wrapper keeps capacity-exhausted drivers in rotation for rides
//! whose drive hour falls in the evening window.  Selection is entirely
//! delegated to the wrapped policy; only the retirement rule changes.

use std::ops::RangeInclusive;

use rh_core::PassengerId;
use rh_spatial::Heuristic;

use crate::context::MatchContext;
use crate::error::DispatchResult;
use crate::policy::{MatchChoice, MatchPolicy};
use crate::pool::AvailablePool;

pub struct PeakRetention<P> {
    inner: P,
    peak_hours: RangeInclusive<u32>,
}

impl<P: MatchPolicy> PeakRetention<P> {
    /// Wrap `inner` with the default evening window, 16:00 through 23:59.
    pub fn new(inner: P) -> Self {
        Self::with_hours(inner, 16..=23)
    }

    pub fn with_hours(inner: P, peak_hours: RangeInclusive<u32>) -> Self {
        Self { inner, peak_hours }
    }
}

impl<P: MatchPolicy> MatchPolicy for PeakRetention<P> {
    fn name(&self) -> &'static str {
        "peak-retention"
    }

    fn settle_heuristic(&self) -> Heuristic {
        self.inner.settle_heuristic()
    }

    fn choose(
        &mut self,
        ctx: &mut MatchContext<'_>,
        pool: &mut AvailablePool,
        passenger: PassengerId,
    ) -> DispatchResult<MatchChoice> {
        self.inner.choose(ctx, pool, passenger)
    }

    fn waive_retirement(&self, hour: u32) -> bool {
        self.peak_hours.contains(&hour) || self.inner.waive_retirement(hour)
    }
}
