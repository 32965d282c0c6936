use crate::ports::{PackageInstaller, ProjectFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, I: PackageInstaller> {
    filesystem: F,
    installer: I,
}

impl<F: ProjectFilesystem, I: PackageInstaller> AppContext<F, I> {
    /// Create a new application context.
    pub fn new(filesystem: F, installer: I) -> Self {
        Self { filesystem, installer }
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the package installer.
    pub fn installer(&self) -> &I {
        &self.installer
    }
}
