use crate::domain::{AppError, Requirement};

/// Port for installing a single package into the experiment environment.
pub trait PackageInstaller {
    /// Install one requirement. Any error is scoped to this package.
    fn install(&self, requirement: &Requirement) -> Result<(), AppError>;
}
