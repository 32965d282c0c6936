use std::path::PathBuf;

use crate::adapters::DEFAULT_PYTHON;
use crate::domain::dataset::normalize_extension;
use crate::domain::{
    AppError, DEFAULT_DATA_ROOT, DEFAULT_IMAGE_EXTENSION, InstallDecision, Requirement,
};

use super::ProjectConfig;

/// Values supplied on the command line. They win over the config file.
#[derive(Debug, Clone, Default)]
pub struct SetupOverrides {
    pub data_root: Option<PathBuf>,
    pub python: Option<String>,
    pub install: InstallDecision,
}

/// Fully resolved options for one setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
    pub project_root: PathBuf,
    pub data_root: PathBuf,
    pub image_extension: String,
    pub python: String,
    pub requirements: Vec<Requirement>,
    pub install: InstallDecision,
}

/// Merge CLI overrides, config values and built-in defaults, in that order.
pub fn resolve_options(
    project_root: PathBuf,
    overrides: SetupOverrides,
    config: ProjectConfig,
) -> Result<SetupOptions, AppError> {
    let data_root = overrides
        .data_root
        .or(config.dataset.root)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_ROOT));
    let data_root = project_root.join(data_root);

    let image_extension = match config.dataset.image_extension {
        Some(ext) => normalize_extension(&ext).ok_or_else(|| {
            AppError::config_error("dataset.image_extension must not be empty")
        })?,
        None => DEFAULT_IMAGE_EXTENSION.to_string(),
    };

    let python = overrides
        .python
        .or(config.install.python)
        .unwrap_or_else(|| DEFAULT_PYTHON.to_string());
    if python.trim().is_empty() {
        return Err(AppError::config_error("Python interpreter must not be empty"));
    }

    let requirements = match config.install.packages {
        Some(packages) => Requirement::parse_all(packages.as_slice())?,
        None => Requirement::defaults(),
    };

    Ok(SetupOptions {
        project_root,
        data_root,
        image_extension,
        python,
        requirements,
        install: overrides.install,
    })
}
