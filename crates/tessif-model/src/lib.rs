//! Contract types for tessif energy system model adapters.
//!
//! tessif drives external optimization frameworks through a shared, narrow
//! surface: a mutable key-value run configuration, a forced `run`, and a
//! table export of the latest results. This crate defines that surface so
//! adapter crates (e.g. `tessif-calliope`) stay independent of any concrete
//! backend.
//!
//! Nothing here solves anything: the actual optimization is delegated
//! entirely to implementations of [`EnergySystemModel`], and their errors
//! pass through [`ModelError`] to the caller unchanged.

pub mod config;
pub mod error;
pub mod model;

pub use config::{ModelConfig, RunConfig, RunOptions};
pub use error::{ModelError, ModelResult};
pub use model::EnergySystemModel;
