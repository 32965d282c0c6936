//! NEU-DET dataset location and verification result.

use std::path::{Path, PathBuf};

/// Dataset root used when neither the CLI nor `defectlab.toml` names one.
pub const DEFAULT_DATA_ROOT: &str = "data/raw/NEU-DET";

pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

pub const IMAGES_DIR: &str = "images";
pub const ANNOTATIONS_DIR: &str = "annotations";

/// What was found at the dataset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetReport {
    pub root: PathBuf,
    pub root_found: bool,
    /// Matching image count, `None` when the images directory is missing or unreadable.
    pub image_count: Option<usize>,
    /// Why an existing images directory could not be listed.
    pub images_error: Option<String>,
    pub annotations_found: bool,
}

impl DatasetReport {
    pub fn missing(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            root_found: false,
            image_count: None,
            images_error: None,
            annotations_found: false,
        }
    }

    /// The dataset counts as present whenever its root exists.
    pub fn is_present(&self) -> bool {
        self.root_found
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    pub fn annotations_dir(&self) -> PathBuf {
        self.root.join(ANNOTATIONS_DIR)
    }
}

/// Whether `file_name` carries exactly `extension`. Dotfiles such as `.a.jpg` match too.
pub fn matches_image_extension(file_name: &Path, extension: &str) -> bool {
    file_name.extension().and_then(|ext| ext.to_str()) == Some(extension)
}

/// Normalize a configured extension (`.jpg` and `jpg` are the same).
pub fn normalize_extension(extension: &str) -> Option<String> {
    let trimmed = extension.trim().trim_start_matches('.');
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
