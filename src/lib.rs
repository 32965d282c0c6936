//! defectlab: bootstrap the workspace of a steel defect detection experiment.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    SetupOptions, SetupOverrides, install_packages, resolve_at, scaffold_at, verify_dataset,
};
pub use domain::{AppError, DatasetReport, InstallDecision, InstallReport, Requirement};
