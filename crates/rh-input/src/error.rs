//! Loader error type.

use thiserror::Error;

/// Errors produced while materializing the input tables.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),

    /// The passenger stream must arrive sorted by request time; `index` is
    /// the first row that breaks the order.
    #[error("passenger row {index} requests earlier than its predecessor")]
    UnsortedPassengers { index: usize },

    /// Every edge needs all 24 hourly weight bundles.
    #[error("edge {from} -> {to} has no weights for hour {hour}")]
    MissingHour { from: String, to: String, hour: u32 },

    /// The adjacency table references a node absent from the coordinate
    /// table.
    #[error("adjacency references unknown node {0:?}")]
    UnknownNode(String),
}

pub type InputResult<T> = Result<T, InputError>;
