//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemProject, PipInstaller};
use crate::app::AppContext;
use crate::app::commands::{dataset, install, scaffold};
use crate::app::config::{load_config, resolve_options};

pub use crate::app::config::{SetupOptions, SetupOverrides};
pub use crate::domain::{
    AppError, DatasetReport, InstallDecision, InstallReport, ProjectLayout, Requirement,
};

/// Create an `AppContext` for a project root and interpreter.
pub(crate) fn create_context(
    project_root: &Path,
    python: &str,
) -> AppContext<FilesystemProject, PipInstaller> {
    AppContext::new(FilesystemProject::new(project_root), PipInstaller::new(python))
}

/// Resolve run options for a project root.
///
/// Loads `defectlab.toml` (or `config_path`) and applies `overrides` on top.
pub fn resolve_at(
    project_root: impl Into<PathBuf>,
    config_path: Option<&Path>,
    overrides: SetupOverrides,
) -> Result<SetupOptions, AppError> {
    let project_root = std::path::absolute(project_root.into())?;
    let config = load_config(&project_root, config_path)?;
    resolve_options(project_root, overrides, config)
}

/// Lay out the directory tree, marker files and `.gitignore` under `path`.
pub fn scaffold_at(path: impl Into<PathBuf>) -> Result<(), AppError> {
    let project = FilesystemProject::new(path);
    let layout = ProjectLayout::standard();
    scaffold::create_directories(&project, &layout, |_| {})?;
    scaffold::create_marker_files(&project, &layout, |_| {})?;
    scaffold::write_gitignore(&project, &layout)
}

/// Inspect a dataset root on disk. Relative roots resolve against the current directory.
pub fn verify_dataset(root: &Path, image_extension: &str) -> Result<DatasetReport, AppError> {
    let project = FilesystemProject::new(std::env::current_dir()?);
    dataset::verify(&project, root, image_extension)
}

/// Install requirements one by one with `<python> -m pip install`.
pub fn install_packages(python: &str, requirements: &[Requirement]) -> InstallReport {
    install::execute(&PipInstaller::new(python), requirements, |_| {})
}
