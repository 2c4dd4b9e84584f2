//! The `Simulation` struct and its dispatch loop.

use std::collections::VecDeque;

use rh_core::{DriverId, PassengerId, SimTime};
use rh_dispatch::{
    AvailablePool, DispatchError, MatchContext, MatchPolicy, MatcherState, Metrics,
    PendingPool, RideOutcome, complete_ride,
};
use rh_spatial::{KdTree, RoadNetwork, TrafficMap};

use crate::observer::SimObserver;
use crate::{SimError, SimResult};

// ── SimReport ─────────────────────────────────────────────────────────────────

/// Final tallies of a run.
#[derive(Clone, Debug)]
pub struct SimReport {
    /// Desiderata and subsystem timers (rides completed = passengers served).
    pub metrics: Metrics,
    /// Passengers dropped mid-run because no candidate could be routed.
    pub skipped_passengers: u64,
    /// Passengers still waiting when the request stream ran out.
    pub unserved_passengers: u64,
    /// Drivers whose capacity was exhausted during the run.
    pub retired_drivers: u64,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The dispatch loop: owns the world, the matcher state, both driver
/// pools, and the policy.  Create via
/// [`SimulationBuilder`][crate::SimulationBuilder].
#[derive(Debug)]
pub struct Simulation<P: MatchPolicy> {
    pub network: RoadNetwork,
    pub index: KdTree,
    pub state: MatcherState,
    pub traffic: TrafficMap,
    pub policy: P,

    /// Drivers signed on with `available_at` still in the future.
    pub pending: PendingPool,
    /// Drivers ready to be matched, in sign-on order.
    pub available: AvailablePool,

    /// Passengers admitted but not yet served, longest-waiting first.
    waiting: VecDeque<PassengerId>,
    /// Cursor into the passenger table: next request to admit.
    next_passenger: usize,
    /// Virtual time: the most recently admitted request's timestamp.
    now: SimTime,

    skipped_passengers: u64,
    retired_drivers: u64,
}

impl<P: MatchPolicy> Simulation<P> {
    /// Called by the builder; all inputs already validated.
    pub(crate) fn assemble(
        network: RoadNetwork,
        index: KdTree,
        state: MatcherState,
        pending: PendingPool,
        policy: P,
    ) -> Self {
        Self {
            network,
            index,
            state,
            traffic: TrafficMap::new(),
            policy,
            pending,
            available: AvailablePool::new(),
            waiting: VecDeque::new(),
            next_passenger: 0,
            now: SimTime::EPOCH,
            skipped_passengers: 0,
            retired_drivers: 0,
        }
    }

    /// Run the replay to completion.
    ///
    /// Passengers are served strictly in request order.  A passenger whose
    /// ride cannot be routed is skipped (reported via
    /// [`SimObserver::on_skip`]); the loop itself only fails on caller
    /// bugs surfaced as [`DispatchError::EmptyPool`].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        if !self.state.passengers.is_empty() {
            self.admit_next();

            loop {
                self.promote();
                observer.on_step(self.now, self.waiting.len(), self.available.len());
                self.serve(observer)?;

                if self.next_passenger >= self.state.passengers.len() {
                    break;
                }
                self.admit_next();
            }
        }

        observer.on_end(&self.state.metrics);
        Ok(self.report())
    }

    /// The tallies so far (also returned by [`run`](Self::run)).
    pub fn report(&self) -> SimReport {
        SimReport {
            metrics: self.state.metrics.clone(),
            skipped_passengers: self.skipped_passengers,
            unserved_passengers: self.waiting.len() as u64,
            retired_drivers: self.retired_drivers,
        }
    }

    // ── Phases ────────────────────────────────────────────────────────────

    /// Admit the next request and move virtual time to it.
    fn admit_next(&mut self) {
        let id = PassengerId(self.next_passenger as u32);
        self.next_passenger += 1;
        self.now = self.state.passengers[id.index()].request_time;
        self.waiting.push_back(id);
    }

    /// Move every driver whose idle time has arrived into the available
    /// pool.  Heap order makes this promotion sign-on-ordered.
    fn promote(&mut self) {
        while let Some((available_at, driver)) = self.pending.peek() {
            if available_at > self.now {
                break;
            }
            self.pending.pop();
            debug_assert!(!self.available.contains(driver));
            self.available.push_back(driver);
        }
    }

    /// Match waiting passengers against available drivers until one side
    /// runs dry.
    fn serve<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while !self.available.is_empty() && !self.waiting.is_empty() {
            let passenger = self.waiting.pop_front().expect("checked non-empty");

            match self.dispatch_one(passenger) {
                Ok((driver, outcome)) => {
                    observer.on_match(self.now, passenger, driver, &self.state.metrics);
                    match outcome {
                        RideOutcome::Continue { available_at } => {
                            self.pending.push(available_at, driver);
                        }
                        RideOutcome::Retire { at } => {
                            self.retired_drivers += 1;
                            observer.on_retire(at, driver);
                        }
                    }
                }
                // Routing failures drop the passenger; the chosen driver is
                // gone from the pool and is not re-inserted.
                Err(DispatchError::Spatial(_)) => {
                    self.skipped_passengers += 1;
                    observer.on_skip(self.now, passenger);
                }
                Err(e @ DispatchError::EmptyPool) => return Err(SimError::Dispatch(e)),
            }
        }
        Ok(())
    }

    /// One full dispatch step: select a driver, settle the ride.
    fn dispatch_one(
        &mut self,
        passenger: PassengerId,
    ) -> Result<(DriverId, RideOutcome), DispatchError> {
        let mut ctx = MatchContext {
            network: &self.network,
            index: &self.index,
            state: &mut self.state,
            traffic: &mut self.traffic,
        };

        let choice = self.policy.choose(&mut ctx, &mut self.available, passenger)?;
        let outcome = complete_ride(
            &mut ctx,
            choice.driver,
            passenger,
            choice.pickup_time,
            self.policy.settle_heuristic(),
            |hour| self.policy.waive_retirement(hour),
        )?;
        Ok((choice.driver, outcome))
    }
}
