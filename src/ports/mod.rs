mod confirm_prompt;
mod package_installer;
mod project_filesystem;

pub use confirm_prompt::ConfirmPrompt;
pub use package_installer::PackageInstaller;
pub use project_filesystem::ProjectFilesystem;
