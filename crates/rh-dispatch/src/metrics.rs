//! Cumulative desiderata and per-subsystem timing.
//!
//! D1 totals passenger minutes from request to drop-off; D2 totals driver
//! deadhead minutes (`trip − pickup`, a signed quantity that can go negative
//! on a single ride when the pickup leg dominates, though the cumulative
//! value is reported as-is).  The two subsystem timers answer "where does
//! the wall-clock go" — nearest-node queries vs. shortest-path queries —
//! without influencing any dispatch decision.

use std::fmt::Write as _;
use std::time::Duration;

// ── SubsystemTimer ────────────────────────────────────────────────────────────

/// Accumulated elapsed time and call count for one subsystem.
#[derive(Clone, Debug, Default)]
pub struct SubsystemTimer {
    pub total: Duration,
    pub calls: u64,
}

impl SubsystemTimer {
    /// Fold one call's elapsed time into the accumulator.
    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.calls += 1;
    }

    /// Mean elapsed time per call (zero when never called).
    pub fn average(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.total / self.calls as u32
        }
    }
}

// ── Metrics ───────────────────────────────────────────────────────────────────

/// Run-wide accumulators.  Mutated only by the ride transaction (desiderata)
/// and the context helpers (timers); both are monotone.
#[derive(Clone, Debug, Default)]
pub struct Metrics {
    /// Cumulative passenger minutes between request and drop-off.
    pub d1_minutes: f64,
    /// Cumulative driver deadhead minutes.
    pub d2_minutes: f64,
    pub rides_completed: u64,

    pub nearest_node: SubsystemTimer,
    pub shortest_path: SubsystemTimer,
}

impl Metrics {
    /// Fold one completed ride's contribution into the desiderata.
    pub fn record_ride(&mut self, d1_delta_min: f64, d2_delta_min: f64) {
        self.d1_minutes += d1_delta_min;
        self.d2_minutes += d2_delta_min;
        self.rides_completed += 1;
    }

    /// Mean passenger minutes per completed ride.
    pub fn average_d1(&self) -> f64 {
        if self.rides_completed == 0 {
            0.0
        } else {
            self.d1_minutes / self.rides_completed as f64
        }
    }

    /// Mean deadhead minutes per completed ride.
    pub fn average_d2(&self) -> f64 {
        if self.rides_completed == 0 {
            0.0
        } else {
            self.d2_minutes / self.rides_completed as f64
        }
    }

    /// Multi-section human-readable report: cumulative and average
    /// desiderata, then the subsystem timers.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "── passenger time (D1) ─────────────────────");
        let _ = writeln!(out, "cumulative: {:.2} min", self.d1_minutes);
        let _ = writeln!(out, "average:    {:.2} min/ride", self.average_d1());
        let _ = writeln!(out, "── driver deadhead (D2) ────────────────────");
        let _ = writeln!(out, "cumulative: {:.2} min", self.d2_minutes);
        let _ = writeln!(out, "average:    {:.2} min/ride", self.average_d2());
        let _ = writeln!(out, "── rides ───────────────────────────────────");
        let _ = writeln!(out, "completed:  {}", self.rides_completed);
        let _ = writeln!(out, "── subsystem timers ────────────────────────");
        let _ = writeln!(
            out,
            "nearest-node:  {:?} total, {:?} avg over {} calls",
            self.nearest_node.total,
            self.nearest_node.average(),
            self.nearest_node.calls,
        );
        let _ = writeln!(
            out,
            "shortest-path: {:?} total, {:?} avg over {} calls",
            self.shortest_path.total,
            self.shortest_path.average(),
            self.shortest_path.calls,
        );
        out
    }
}
