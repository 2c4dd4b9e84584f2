//! Simulation observer trait for progress reporting and trace collection.

use rh_core::{DriverId, PassengerId, SimTime};
use rh_dispatch::Metrics;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step(&mut self, now: SimTime, waiting: usize, available: usize) {
///         println!("{now}: {waiting} waiting, {available} drivers");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per loop iteration after promotion, before serving:
    /// the demand/supply snapshot at virtual time `now`.
    fn on_step(&mut self, _now: SimTime, _waiting: usize, _available: usize) {}

    /// Called after each settled ride.  `metrics` carries the cumulative
    /// desiderata including this match.
    fn on_match(
        &mut self,
        _now: SimTime,
        _passenger: PassengerId,
        _driver: DriverId,
        _metrics: &Metrics,
    ) {
    }

    /// Called when a ride exhausts a driver's capacity and they leave the
    /// rotation.  A normal outcome, not an error.
    fn on_retire(&mut self, _now: SimTime, _driver: DriverId) {}

    /// Called when a passenger is dropped because no candidate could be
    /// routed to them.
    fn on_skip(&mut self, _now: SimTime, _passenger: PassengerId) {}

    /// Called once after the passenger stream is exhausted.
    fn on_end(&mut self, _metrics: &Metrics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
