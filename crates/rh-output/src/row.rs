//! Plain data row types written by trace backends.

/// Cumulative desiderata immediately after one settled ride.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchTraceRow {
    /// Virtual time of the match, Unix milliseconds.
    pub unix_ms: i64,
    pub d1_minutes: f64,
    pub d2_minutes: f64,
}

/// Demand/supply snapshot at the top of one loop step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTraceRow {
    /// Virtual time of the step, Unix milliseconds.
    pub unix_ms: i64,
    pub waiting_passengers: u64,
    pub available_drivers: u64,
}
