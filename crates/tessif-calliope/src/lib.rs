//! Calliope run adapter for tessif.
//!
//! tessif delegates energy system optimization to external frameworks;
//! this crate covers the Calliope backend. The adapter configures the
//! requested solver on a caller-owned model, forces a fresh optimization
//! run, and can persist the resulting tables beneath the tessif data root,
//! namespaced by model name. See [`CalliopeAdapter::optimize`] for the
//! dispatch contract.

pub mod optimize;
pub mod paths;

pub use optimize::{CalliopeAdapter, OptimizeRequest, DEFAULT_SOLVER};
