//! The `OutputWriter` trait implemented by trace backends.

use crate::{MatchTraceRow, OutputResult, StepTraceRow};

/// Sink for the two trace series.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`TraceObserver::take_error`](crate::TraceObserver::take_error).
pub trait OutputWriter {
    /// Write one per-match row.
    fn write_match(&mut self, row: &MatchTraceRow) -> OutputResult<()>;

    /// Write one per-step row.
    fn write_step(&mut self, row: &StepTraceRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
