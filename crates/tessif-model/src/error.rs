//! Error types for the model contract.
//!
//! Every error originates inside an external model backend; run adapters
//! propagate them to the caller unchanged, without translation, wrapping,
//! or recovery.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by an external energy system model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The backend rejected the requested solver or one of its options.
    #[error("solver configuration rejected: {0}")]
    SolverConfig(String),

    /// The optimization run failed (infeasible, unbounded, solver crash).
    #[error("optimization run failed: {0}")]
    RunExecution(String),

    /// The export destination already exists. Result tables are written
    /// once per model name; the destination is never cleared or versioned.
    #[error("results already exported to '{}'", .0.display())]
    ExportCollision(PathBuf),

    /// The table serializer failed after accepting the destination.
    #[error("table export failed: {0}")]
    Export(String),

    /// I/O error from the backend's plumbing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
