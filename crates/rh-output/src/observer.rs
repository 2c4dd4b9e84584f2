//! `TraceObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rh_core::{DriverId, PassengerId, SimTime};
use rh_dispatch::Metrics;
use rh_sim::SimObserver;

use crate::row::{MatchTraceRow, StepTraceRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes the per-step and per-match trace series to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_step(&mut self, now: SimTime, waiting: usize, available: usize) {
        let row = StepTraceRow {
            unix_ms: now.unix_ms(),
            waiting_passengers: waiting as u64,
            available_drivers: available as u64,
        };
        let result = self.writer.write_step(&row);
        self.store_err(result);
    }

    fn on_match(
        &mut self,
        now: SimTime,
        _passenger: PassengerId,
        _driver: DriverId,
        metrics: &Metrics,
    ) {
        let row = MatchTraceRow {
            unix_ms: now.unix_ms(),
            d1_minutes: metrics.d1_minutes,
            d2_minutes: metrics.d2_minutes,
        };
        let result = self.writer.write_match(&row);
        self.store_err(result);
    }

    fn on_end(&mut self, _metrics: &Metrics) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
