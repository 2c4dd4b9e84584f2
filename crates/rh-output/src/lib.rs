//! `rh-output` — run traces for plotting and analysis.
//!
//! Two trace series are produced, matching the plots the experiments are
//! reported with:
//!
//! | File              | One row per…  | Columns                                   |
//! |-------------------|---------------|-------------------------------------------|
//! | `match_trace.csv` | settled ride  | `unix_ms, d1_minutes, d2_minutes`         |
//! | `step_trace.csv`  | loop step     | `unix_ms, waiting_passengers, available_drivers` |
//!
//! The writer sits behind the [`OutputWriter`] trait and is driven by
//! [`TraceObserver`], which implements `rh_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rh_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./out"))?;
//! let mut obs = TraceObserver::new(writer);
//! let report = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("trace error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{MatchTraceRow, StepTraceRow};
pub use writer::OutputWriter;
