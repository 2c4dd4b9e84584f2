//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `match_trace.csv`
//! - `step_trace.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MatchTraceRow, OutputResult, StepTraceRow};

/// Writes the run traces to two CSV files.
pub struct CsvTraceWriter {
    matches: Writer<File>,
    steps: Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut matches = Writer::from_path(dir.join("match_trace.csv"))?;
        matches.write_record(["unix_ms", "d1_minutes", "d2_minutes"])?;

        let mut steps = Writer::from_path(dir.join("step_trace.csv"))?;
        steps.write_record(["unix_ms", "waiting_passengers", "available_drivers"])?;

        Ok(Self { matches, steps, finished: false })
    }
}

impl OutputWriter for CsvTraceWriter {
    fn write_match(&mut self, row: &MatchTraceRow) -> OutputResult<()> {
        self.matches.write_record(&[
            row.unix_ms.to_string(),
            row.d1_minutes.to_string(),
            row.d2_minutes.to_string(),
        ])?;
        Ok(())
    }

    fn write_step(&mut self, row: &StepTraceRow) -> OutputResult<()> {
        self.steps.write_record(&[
            row.unix_ms.to_string(),
            row.waiting_passengers.to_string(),
            row.available_drivers.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.matches.flush()?;
        self.steps.flush()?;
        Ok(())
    }
}
