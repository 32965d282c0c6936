//! `defectlab.toml` loading and run option resolution.

mod options;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::AppError;

pub use options::{SetupOptions, SetupOverrides, resolve_options};

/// Config file looked up in the project root when `--config` is not given.
pub const CONFIG_FILE: &str = "defectlab.toml";

/// Contents of `defectlab.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub dataset: DatasetSection,
    #[serde(default)]
    pub install: InstallSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSection {
    pub root: Option<PathBuf>,
    pub image_extension: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallSection {
    pub python: Option<String>,
    pub packages: Option<Vec<String>>,
}

/// Parse config content from TOML.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = toml::from_str(content)?;
    Ok(config)
}

/// Load the project config.
///
/// An explicit path must exist. Without one, `defectlab.toml` in the project root is
/// read if present and defaults are used otherwise.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ProjectConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            let path = project_root.join(path);
            if !path.is_file() {
                return Err(AppError::ConfigFileNotFound(path));
            }
            path
        }
        None => {
            let path = project_root.join(CONFIG_FILE);
            if !path.is_file() {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(ProjectConfig::default());
            }
            path
        }
    };

    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
