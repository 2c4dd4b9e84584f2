//! The ride-completion transaction.
//!
//! `complete_ride` settles one matched (driver, passenger) pair end to end:
//! it resolves graph nodes, routes the pickup and trip legs at the pair's
//! drive hour, advances the driver's timeline to the drop-off, folds the
//! ride into the desiderata, and decides between re-queueing and retirement.
//!
//! # Atomicity
//!
//! All fallible work (node resolution, routing) happens before the first
//! state mutation, so a routing failure aborts the transaction with the
//! driver record, desiderata, and memo untouched.  The pair-time cache is
//! advisory and may retain entries from an aborted transaction.

use rh_core::{DriverId, PassengerId, SimTime, drive_hour};
use rh_spatial::Heuristic;

use crate::context::MatchContext;
use crate::error::DispatchResult;

/// What happened to the driver after settling a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideOutcome {
    /// The driver dropped off and is idle again at `available_at` — the
    /// caller re-inserts them into the pending pool.
    Continue { available_at: SimTime },
    /// The driver's capacity is exhausted; they leave all pools.  A normal
    /// outcome, not an error.
    Retire { at: SimTime },
}

/// Settle a matched ride.
///
/// `pickup_time` is the pickup leg in hours if the policy already routed it;
/// when `None` the leg is routed here with `heuristic`.  `waive_retirement`
/// is consulted only when the ride exhausts the driver's capacity (the
/// peak-hour retention policy keeps evening drivers in rotation).
pub fn complete_ride(
    ctx: &mut MatchContext<'_>,
    driver: DriverId,
    passenger: PassengerId,
    pickup_time: Option<f64>,
    heuristic: Heuristic,
    waive_retirement: impl Fn(u32) -> bool,
) -> DispatchResult<RideOutcome> {
    let d = *ctx.state.driver(driver);
    let p = *ctx.state.passenger(passenger);

    // 1. Resolve the three graph nodes involved.
    let driver_node = ctx.driver_node(driver);
    let passenger_node = ctx.nearest_node(p.source);
    let dest_node = ctx.nearest_node(p.dest);

    // 2. One drive hour governs both legs.
    let hour = drive_hour(d.available_at, p.request_time);

    // 3–5. Route both legs before touching any state.
    let pickup = match pickup_time {
        Some(hours) => hours,
        None => ctx.travel_time(driver_node, passenger_node, hour, heuristic)?,
    };
    let trip = ctx.travel_time(passenger_node, dest_node, hour, heuristic)?;

    // 4–6. The driver starts toward the passenger at whichever instant is
    // later: their own idle time or the request itself.
    let arrive_at_pickup = d.available_at.max(p.request_time).add_hours(pickup);
    let arrive_at_dest = arrive_at_pickup.add_hours(trip);

    // 7. Desiderata.
    let d1 = arrive_at_dest.minutes_since(p.request_time);
    let d2 = (trip - pickup) * 60.0;
    ctx.state.metrics.record_ride(d1, d2);

    // 8–9. Capacity and position bookkeeping.
    let rides_remaining = d.rides_remaining.saturating_sub(1);
    ctx.state.nearest_memo.insert(driver, dest_node);
    ctx.state.update_driver(
        driver,
        arrive_at_dest,
        rides_remaining,
        ctx.network.coord(dest_node),
    );

    // 10. Retire unless the policy waives the capacity floor for this hour.
    if rides_remaining == 0 && !waive_retirement(hour) {
        Ok(RideOutcome::Retire { at: arrive_at_dest })
    } else {
        Ok(RideOutcome::Continue { available_at: arrive_at_dest })
    }
}
