//! Base error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` at the
//! crate seam (the loaders map it into their parse variants).

use thiserror::Error;

/// Errors produced by `rh-core` itself — currently only timestamp parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),
}
