pub mod dataset;
pub mod error;
pub mod install;
pub mod layout;
pub mod requirement;

pub use dataset::{DEFAULT_DATA_ROOT, DEFAULT_IMAGE_EXTENSION, DatasetReport};
pub use error::AppError;
pub use install::{InstallDecision, InstallReport, PackageOutcome, PackageResult, is_affirmative};
pub use layout::{DIRECTORIES, GITIGNORE_TEMPLATE, MARKER_FILES, ProjectLayout};
pub use requirement::{DEFAULT_REQUIREMENTS, Requirement};
