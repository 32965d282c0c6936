use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Filesystem operations needed to lay out a project.
///
/// Relative paths resolve against the project root; absolute paths are used as-is.
pub trait ProjectFilesystem {
    /// Create a directory and any missing parents. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Ensure a file exists without changing the content of an existing one.
    fn touch(&self, path: &Path) -> Result<(), AppError>;

    /// Write a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a directory exists.
    fn is_dir(&self, path: &Path) -> bool;

    /// List regular files directly inside a directory, sorted by path.
    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;
}
