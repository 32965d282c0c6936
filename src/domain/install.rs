//! Package installation decisions and outcomes.

use super::Requirement;

/// How the driver decides whether to install packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallDecision {
    /// Ask on the terminal.
    #[default]
    Prompt,
    Install,
    Skip,
}

/// Only a bare `y` (any case) accepts. The line terminator is dropped, other whitespace is kept.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageOutcome {
    Installed,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageResult {
    pub requirement: Requirement,
    pub outcome: PackageOutcome,
}

impl PackageResult {
    pub fn is_installed(&self) -> bool {
        matches!(self.outcome, PackageOutcome::Installed)
    }
}

/// Per-package results in install order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub results: Vec<PackageResult>,
}

impl InstallReport {
    pub fn installed(&self) -> impl Iterator<Item = &Requirement> {
        self.results.iter().filter(|r| r.is_installed()).map(|r| &r.requirement)
    }

    pub fn failed(&self) -> impl Iterator<Item = &Requirement> {
        self.results.iter().filter(|r| !r.is_installed()).map(|r| &r.requirement)
    }
}
