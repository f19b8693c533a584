//! The contract fulfilled by an external energy system model.

use crate::config::{ModelConfig, RunConfig, RunOptions};
use crate::error::ModelResult;
use std::path::Path;

/// Narrow call surface of an externally-owned energy system model.
///
/// Implementations wrap a concrete optimization framework (model building,
/// constraint generation, solver invocation all live behind this trait).
/// The caller owns the model's lifecycle; run adapters mutate it in place
/// and never clone or rebuild it. A model is not safe for concurrent use —
/// callers wanting parallel runs hold one model per worker.
pub trait EnergySystemModel {
    /// Mutable access to the run configuration consulted by
    /// [`run`](EnergySystemModel::run).
    fn run_config_mut(&mut self) -> &mut RunConfig;

    /// Read access to the run configuration.
    fn run_config(&self) -> &RunConfig;

    /// Model metadata; its `name` namespaces exported results.
    fn model_config(&self) -> &ModelConfig;

    /// Execute the optimization, blocking until the backend finishes.
    ///
    /// With `force_rerun` the model re-solves even when results from a
    /// previous run are present. `options` tune the backend and are
    /// interpreted by it alone; unknown solvers or options surface as
    /// [`ModelError::SolverConfig`](crate::ModelError::SolverConfig),
    /// solve failures as
    /// [`ModelError::RunExecution`](crate::ModelError::RunExecution).
    fn run(&mut self, force_rerun: bool, options: &RunOptions) -> ModelResult<()>;

    /// Serialize the latest results as delimited-text tables under
    /// `destination`.
    ///
    /// Write-once: fails with
    /// [`ModelError::ExportCollision`](crate::ModelError::ExportCollision)
    /// when the destination already exists.
    fn write_results_as_tables(&self, destination: &Path) -> ModelResult<()>;
}
