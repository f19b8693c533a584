//! Wrapping the Calliope optimization dispatch.
//!
//! The adapter owns none of the optimization. It merges the requested
//! solver into the model's run configuration, forces a fresh run, and
//! optionally hands the model's own table serializer a destination beneath
//! the injected data root. Everything else — solver validation, constraint
//! generation, solve execution — is the backend's business, and backend
//! failures reach the caller unchanged.

use std::path::{Path, PathBuf};
use tessif_model::{EnergySystemModel, ModelResult, RunOptions};
use tracing::{debug, info};

/// Solver requested when the caller does not name one.
///
/// For FOSS setups this is usually `cbc` or `glpk`, but any identifier the
/// backend's solver interface supports can be passed; the adapter does not
/// validate solver names.
pub const DEFAULT_SOLVER: &str = "cbc";

/// Data-root subdirectory for this adapter version.
const ADAPTER_DIR: &str = "tessif-calliope-0-6-6post1";

/// Framework subdirectory beneath the adapter directory.
const FRAMEWORK_DIR: &str = "Calliope";

/// Parameters for a single optimize dispatch.
#[derive(Debug, Clone)]
pub struct OptimizeRequest {
    /// Solver identifier handed to the backend verbatim.
    pub solver: String,
    /// Export result tables after the run.
    pub save: bool,
    /// Backend tuning options, forwarded untouched and in full to the
    /// model's run operation. The adapter recognizes none of them.
    pub run_options: RunOptions,
}

impl Default for OptimizeRequest {
    fn default() -> Self {
        Self {
            solver: DEFAULT_SOLVER.to_string(),
            save: false,
            run_options: RunOptions::new(),
        }
    }
}

impl OptimizeRequest {
    /// Request with an explicit solver and otherwise default settings.
    pub fn with_solver(solver: impl Into<String>) -> Self {
        Self {
            solver: solver.into(),
            ..Self::default()
        }
    }
}

/// Dispatch adapter for Calliope energy system models.
///
/// Holds the data root beneath which result tables land. The root is
/// injected at construction — resolve it once at startup, e.g. via
/// [`paths::tessif_dir`](crate::paths::tessif_dir) — so the adapter carries
/// no hidden process-wide state and stays testable against a temporary
/// directory.
#[derive(Debug, Clone)]
pub struct CalliopeAdapter {
    data_root: PathBuf,
}

impl CalliopeAdapter {
    /// Create an adapter exporting beneath `data_root`. No filesystem
    /// access happens until a saving dispatch.
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    /// The injected data root.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Destination directory for a model's result tables:
    /// `<data_root>/tessif-calliope-0-6-6post1/Calliope/<model_name>_csv`.
    pub fn export_dir(&self, model_name: &str) -> PathBuf {
        self.data_root
            .join(ADAPTER_DIR)
            .join(FRAMEWORK_DIR)
            .join(format!("{model_name}_csv"))
    }

    /// Optimize `model` in place.
    ///
    /// Merges `{"solver": request.solver}` into the model's run
    /// configuration (keys other than `solver` are preserved), re-runs the
    /// optimization unconditionally, and, when `request.save` is set,
    /// writes the result tables beneath [`export_dir`](Self::export_dir)
    /// using the model name read after the run.
    ///
    /// Blocks until the backend finishes; solve duration is unbounded and
    /// externally determined. Backend errors propagate unchanged — the
    /// adapter adds no context and attempts no recovery. Exports are
    /// write-once: a second save for the same model name fails.
    pub fn optimize<M: EnergySystemModel>(
        &self,
        model: &mut M,
        request: &OptimizeRequest,
    ) -> ModelResult<()> {
        model.run_config_mut().set("solver", request.solver.as_str());

        // Re-run even when the model already carries results from an
        // earlier invocation.
        info!(solver = %request.solver, "dispatching optimization run");
        model.run(true, &request.run_options)?;

        // Saves cannot be overwritten, so this only works the first time a
        // model of this name is exported.
        if request.save {
            let destination = self.export_dir(&model.model_config().name);
            debug!(destination = %destination.display(), "exporting result tables");
            model.write_results_as_tables(&destination)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_matches_call_surface() {
        let request = OptimizeRequest::default();
        assert_eq!(request.solver, "cbc");
        assert!(!request.save);
        assert!(request.run_options.is_empty());
    }

    #[test]
    fn with_solver_keeps_other_defaults() {
        let request = OptimizeRequest::with_solver("glpk");
        assert_eq!(request.solver, "glpk");
        assert!(!request.save);
    }

    #[test]
    fn export_dir_namespaces_by_model_name() {
        let adapter = CalliopeAdapter::new("/data");
        let dir = adapter.export_dir("gridA");
        assert_eq!(
            dir,
            Path::new("/data")
                .join("tessif-calliope-0-6-6post1")
                .join("Calliope")
                .join("gridA_csv")
        );
    }

    #[test]
    fn export_dir_is_pure() {
        // Path computation never touches the filesystem, so a nonexistent
        // root is fine.
        let adapter = CalliopeAdapter::new("/nonexistent/tessif-root");
        let dir = adapter.export_dir("baseline");
        assert!(dir.ends_with("Calliope/baseline_csv"));
        assert!(!dir.exists());
    }
}
