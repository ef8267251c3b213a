//! Error types

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid column layout: {0}")]
    InvalidColumn(String),

    #[error("A decision is still pending for {0}")]
    DecisionPending(String),

    #[error("No file is awaiting a decision")]
    NoPendingDecision,
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
