//! Setup driver: runs every step in order and reports progress on stdout.

use std::path::PathBuf;

use tracing::debug;

use crate::adapters::TerminalPrompt;
use crate::app::AppContext;
use crate::app::api::{create_context, resolve_at};
use crate::app::commands::{dataset, install, scaffold};
use crate::app::config::{SetupOptions, SetupOverrides};
use crate::domain::layout::NEXT_STEPS;
use crate::domain::{
    AppError, DatasetReport, InstallDecision, InstallReport, PackageOutcome, ProjectLayout,
};
use crate::ports::{ConfirmPrompt, PackageInstaller, ProjectFilesystem};

pub(crate) const INSTALL_QUESTION: &str = "Install required packages? (y/n)";

const RULE_WIDTH: usize = 60;

/// Inputs gathered from the command line.
#[derive(Debug, Default)]
pub struct SetupRequest {
    pub project_root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub overrides: SetupOverrides,
}

#[derive(Debug)]
pub struct SetupSummary {
    pub dataset: DatasetReport,
    /// `None` when installation was skipped.
    pub install: Option<InstallReport>,
}

pub fn run_setup(request: SetupRequest) -> Result<SetupSummary, AppError> {
    let project_root = match request.project_root {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let config = request.config.map(std::path::absolute).transpose()?;
    let options = resolve_at(project_root, config.as_deref(), request.overrides)?;
    debug!(?options, "resolved setup options");

    let ctx = create_context(&options.project_root, &options.python);
    drive(&ctx, &TerminalPrompt, &options)
}

pub(crate) fn drive<F, I, P>(
    ctx: &AppContext<F, I>,
    prompt: &P,
    options: &SetupOptions,
) -> Result<SetupSummary, AppError>
where
    F: ProjectFilesystem,
    I: PackageInstaller,
    P: ConfirmPrompt,
{
    let layout = ProjectLayout::standard();

    print_rule();
    println!("STEEL DEFECT DETECTION PROJECT SETUP");
    print_rule();

    println!("Creating directory structure...");
    scaffold::create_directories(ctx.filesystem(), &layout, |dir| {
        println!("  ✓ Created: {}", dir);
    })?;
    println!("Directory structure created successfully!");
    println!();

    println!("Creating __init__.py files...");
    scaffold::create_marker_files(ctx.filesystem(), &layout, |file| {
        println!("  ✓ Created: {}", file);
    })?;
    println!();

    scaffold::write_gitignore(ctx.filesystem(), &layout)?;
    println!("✓ Created .gitignore file");
    println!();

    println!("Verifying dataset path: {}", options.data_root.display());
    let dataset = dataset::verify(ctx.filesystem(), &options.data_root, &options.image_extension)?;
    print_dataset_report(&dataset);
    println!();

    let should_install = match options.install {
        InstallDecision::Install => true,
        InstallDecision::Skip => false,
        InstallDecision::Prompt => prompt.confirm(INSTALL_QUESTION)?,
    };
    let install = if should_install {
        println!("Installing required packages...");
        let report = install::execute(ctx.installer(), &options.requirements, |result| {
            match &result.outcome {
                PackageOutcome::Installed => println!("  ✓ Installed: {}", result.requirement),
                PackageOutcome::Failed { .. } => {
                    println!("  ✗ Failed to install: {}", result.requirement)
                }
            }
        });
        println!("Package installation completed!");
        Some(report)
    } else {
        debug!("package installation skipped");
        None
    };
    println!();

    print_rule();
    println!("SETUP COMPLETED SUCCESSFULLY!");
    print_rule();
    println!();
    println!("Next steps:");
    for (index, step) in NEXT_STEPS.iter().enumerate() {
        println!("{}. {}", index + 1, step);
    }
    println!();
    if !dataset.is_present() {
        println!("⚠ Warning: Dataset path verification failed.");
        println!("  Please ensure NEU-DET dataset is in the correct location.");
    }

    Ok(SetupSummary { dataset, install })
}

fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_dataset_report(report: &DatasetReport) {
    if !report.root_found {
        println!("  ✗ Dataset path not found: {}", report.root.display());
        println!("  Pass --data-root or set [dataset].root in defectlab.toml");
        return;
    }

    match (report.image_count, &report.images_error) {
        (Some(count), _) => println!("  ✓ Images directory found with {} images", count),
        (None, Some(reason)) => println!(
            "  ⚠ Images directory could not be read at: {} ({})",
            report.images_dir().display(),
            reason
        ),
        (None, None) => {
            println!("  ⚠ Images directory not found at: {}", report.images_dir().display())
        }
    }

    if report.annotations_found {
        println!("  ✓ Annotations directory found");
    } else {
        println!("  ⚠ Annotations directory not found at: {}", report.annotations_dir().display());
    }
}
