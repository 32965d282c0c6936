use std::process::Command;

use tracing::{debug, warn};

use crate::domain::{AppError, Requirement};
use crate::ports::PackageInstaller;

pub const DEFAULT_PYTHON: &str = "python3";

/// Installs packages with `<python> -m pip install <spec>`.
///
/// The child inherits stdio so pip's own progress is visible.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: String,
}

impl PipInstaller {
    pub fn new(python: impl Into<String>) -> Self {
        Self { python: python.into() }
    }
}

impl PackageInstaller for PipInstaller {
    fn install(&self, requirement: &Requirement) -> Result<(), AppError> {
        let spec = requirement.to_string();
        debug!(python = %self.python, package = %spec, "running pip install");

        let status = Command::new(&self.python)
            .args(["-m", "pip", "install", spec.as_str()])
            .status()
            .map_err(|e| AppError::InstallerFailed {
                package: spec.clone(),
                details: format!("could not run '{}': {}", self.python, e),
            })?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("pip exited with status {}", code),
                None => "pip was terminated by a signal".to_string(),
            };
            warn!(package = %spec, %details, "pip install failed");
            return Err(AppError::InstallerFailed { package: spec, details });
        }

        Ok(())
    }
}
