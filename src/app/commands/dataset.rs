//! Dataset root verification.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::dataset::matches_image_extension;
use crate::domain::{AppError, DatasetReport};
use crate::ports::ProjectFilesystem;

/// Inspect the dataset root. Missing or unreadable pieces are recorded, never raised.
pub fn verify(
    fs: &impl ProjectFilesystem,
    root: &Path,
    image_extension: &str,
) -> Result<DatasetReport, AppError> {
    if !fs.is_dir(root) {
        debug!(root = %root.display(), "dataset root missing");
        return Ok(DatasetReport::missing(root));
    }

    let mut report = DatasetReport {
        root: root.to_path_buf(),
        root_found: true,
        image_count: None,
        images_error: None,
        annotations_found: false,
    };

    let images_dir = report.images_dir();
    if fs.is_dir(&images_dir) {
        match fs.list_files(&images_dir) {
            Ok(files) => {
                let count =
                    files.iter().filter(|f| matches_image_extension(f, image_extension)).count();
                debug!(images = count, dir = %images_dir.display(), "counted dataset images");
                report.image_count = Some(count);
            }
            Err(err) => {
                warn!(dir = %images_dir.display(), error = %err, "cannot list dataset images");
                report.images_error = Some(err.to_string());
            }
        }
    }

    report.annotations_found = fs.is_dir(&report.annotations_dir());
    Ok(report)
}
