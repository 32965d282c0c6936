pub mod pip_installer;
pub mod project_filesystem;
pub mod terminal_prompt;

pub use pip_installer::{DEFAULT_PYTHON, PipInstaller};
pub use project_filesystem::FilesystemProject;
pub use terminal_prompt::TerminalPrompt;
