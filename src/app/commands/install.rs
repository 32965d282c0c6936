//! Sequential per-package installation.

use tracing::warn;

use crate::domain::{InstallReport, PackageOutcome, PackageResult, Requirement};
use crate::ports::PackageInstaller;

/// Install each requirement in order.
///
/// A failing package is recorded and the loop moves on; nothing is rolled back.
pub fn execute(
    installer: &impl PackageInstaller,
    requirements: &[Requirement],
    mut on_result: impl FnMut(&PackageResult),
) -> InstallReport {
    let mut report = InstallReport::default();

    for requirement in requirements {
        let outcome = match installer.install(requirement) {
            Ok(()) => PackageOutcome::Installed,
            Err(err) => {
                warn!(package = %requirement, error = %err, "package install failed");
                PackageOutcome::Failed { reason: err.to_string() }
            }
        };
        let result = PackageResult { requirement: requirement.clone(), outcome };
        on_result(&result);
        report.results.push(result);
    }

    report
}
