use std::cell::RefCell;
use std::collections::HashSet;

use crate::domain::{AppError, Requirement};
use crate::ports::PackageInstaller;

/// Records install calls; packages named in `failing` fail.
#[derive(Default)]
pub struct FakeInstaller {
    pub calls: RefCell<Vec<String>>,
    failing: HashSet<String>,
}

impl FakeInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(names: &[&str]) -> Self {
        Self { failing: names.iter().map(|n| n.to_string()).collect(), ..Self::default() }
    }
}

impl PackageInstaller for FakeInstaller {
    fn install(&self, requirement: &Requirement) -> Result<(), AppError> {
        self.calls.borrow_mut().push(requirement.to_string());
        if self.failing.contains(requirement.name()) {
            return Err(AppError::InstallerFailed {
                package: requirement.to_string(),
                details: "pip exited with status 1".to_string(),
            });
        }
        Ok(())
    }
}
