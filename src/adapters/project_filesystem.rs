//! `ProjectFilesystem` implementation backed by `std::fs`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// Project filesystem rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemProject {
    root: PathBuf,
}

impl FilesystemProject {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ProjectFilesystem for FilesystemProject {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        debug!(path = %full_path.display(), "create_dir_all");
        fs::create_dir_all(full_path).map_err(AppError::from)
    }

    fn touch(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        debug!(path = %full_path.display(), "touch");
        OpenOptions::new().create(true).append(true).open(full_path)?;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        debug!(path = %full_path.display(), bytes = content.len(), "write_file");
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.resolve_path(path).is_dir()
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let full_path = self.resolve_path(path);
        let entries = fs::read_dir(full_path).map_err(AppError::from)?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(AppError::from)?;
            let entry_path = entry.path();
            if entry_path.is_file() {
                paths.push(entry_path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}
