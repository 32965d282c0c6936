//! Directory tree, marker files and `.gitignore`.

use std::path::Path;

use tracing::debug;

use crate::domain::layout::GITIGNORE_PATH;
use crate::domain::{AppError, ProjectLayout};
use crate::ports::ProjectFilesystem;

/// Create every layout directory in order, calling `on_created` after each one.
///
/// Stops at the first filesystem error; directories already created stay.
pub fn create_directories(
    fs: &impl ProjectFilesystem,
    layout: &ProjectLayout,
    mut on_created: impl FnMut(&str),
) -> Result<(), AppError> {
    for dir in layout.directories {
        fs.create_dir_all(Path::new(dir))?;
        on_created(dir);
    }
    debug!(count = layout.directories.len(), "directory structure ready");
    Ok(())
}

/// Touch every marker file. Existing files keep their content.
pub fn create_marker_files(
    fs: &impl ProjectFilesystem,
    layout: &ProjectLayout,
    mut on_created: impl FnMut(&str),
) -> Result<(), AppError> {
    for file in layout.marker_files {
        fs.touch(Path::new(file))?;
        on_created(file);
    }
    Ok(())
}

/// Overwrite `.gitignore` with the layout template.
pub fn write_gitignore(fs: &impl ProjectFilesystem, layout: &ProjectLayout) -> Result<(), AppError> {
    fs.write_file(Path::new(GITIGNORE_PATH), layout.gitignore)
}
