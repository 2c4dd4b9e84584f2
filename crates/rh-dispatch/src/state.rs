//! Driver and passenger tables plus the bookkeeping maps the policies share.

use rustc_hash::FxHashMap;

use rh_core::{Coord, DriverId, NodeId, PassengerId, SimTime};

use crate::cache::PairTimeCache;
use crate::metrics::Metrics;

// ── Records ───────────────────────────────────────────────────────────────────

/// One driver's mutable simulation state.
///
/// Created once at load, mutated only by the ride transaction, logically
/// destroyed on retirement (absence from both pools).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Driver {
    /// Virtual instant at which the driver is (or becomes) idle — sign-on
    /// time initially, then each drop-off time.
    pub available_at: SimTime,
    /// Last known position: sign-on point initially, then each drop-off.
    pub pos: Coord,
    /// Rides left before the driver retires.  Drawn from [7, 12] at load.
    pub rides_remaining: u32,
}

/// One passenger request.  Immutable after load.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub request_time: SimTime,
    pub source: Coord,
    pub dest: Coord,
}

// ── MatcherState ──────────────────────────────────────────────────────────────

/// All mutable dispatch state: the driver/passenger tables, the per-driver
/// nearest-node memo, the advisory pair-time cache, per-driver assignment
/// counts, and the run metrics.
///
/// Owned by the simulation; policies and the ride transaction borrow it
/// through [`MatchContext`](crate::MatchContext).  No global state anywhere.
#[derive(Debug)]
pub struct MatcherState {
    /// Indexed by `DriverId` (dense, load order).
    pub drivers: Vec<Driver>,
    /// Indexed by `PassengerId` (dense, load order).
    pub passengers: Vec<Passenger>,

    /// Last graph node each driver occupied.  Saves a spatial-index query
    /// when a driver's position has not changed since their last match
    /// cycle; updated to the drop-off node by the ride transaction.
    pub nearest_memo: FxHashMap<DriverId, NodeId>,

    /// Advisory travel-time cache, written through by the ride transaction.
    pub pair_times: PairTimeCache,

    /// Rides assigned per driver (selection-time counting).  Consumed by
    /// the equitable policy's penalty term.
    pub assignments: FxHashMap<DriverId, u32>,

    /// Cumulative desiderata and subsystem timers.
    pub metrics: Metrics,
}

impl MatcherState {
    pub fn new(drivers: Vec<Driver>, passengers: Vec<Passenger>) -> Self {
        Self {
            drivers,
            passengers,
            nearest_memo: FxHashMap::default(),
            pair_times: PairTimeCache::new(),
            assignments: FxHashMap::default(),
            metrics: Metrics::default(),
        }
    }

    #[inline]
    pub fn driver(&self, id: DriverId) -> &Driver {
        &self.drivers[id.index()]
    }

    #[inline]
    pub fn passenger(&self, id: PassengerId) -> &Passenger {
        &self.passengers[id.index()]
    }

    /// Replace a driver's mutable fields in one step.
    pub fn update_driver(
        &mut self,
        id: DriverId,
        available_at: SimTime,
        rides_remaining: u32,
        pos: Coord,
    ) {
        self.drivers[id.index()] = Driver { available_at, pos, rides_remaining };
    }

    /// Rides assigned to `driver` so far.
    #[inline]
    pub fn assignment_count(&self, driver: DriverId) -> u32 {
        self.assignments.get(&driver).copied().unwrap_or(0)
    }

    /// Count one more assignment for `driver`.
    pub fn record_assignment(&mut self, driver: DriverId) {
        *self.assignments.entry(driver).or_insert(0) += 1;
    }
}
