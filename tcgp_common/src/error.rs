//! Error types shared by the collection tracker crates

use thiserror::Error;

/// Unified error type for dataset loading, persistence and export
#[derive(Debug, Error)]
pub enum CollectionError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse or serialize JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Failed to write CSV output
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// CSV buffer could not be finalized
    #[error("Export error: {0}")]
    Export(String),
    /// Durable slot could not be read or written
    #[error("Durable slot error: {0}")]
    Slot(String),
}

/// Result alias for collection tracker operations
pub type Result<T> = std::result::Result<T, CollectionError>;
