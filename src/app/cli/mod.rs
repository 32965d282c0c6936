//! CLI Adapter.

mod setup;

use std::path::PathBuf;

use clap::Parser;

use crate::app::config::SetupOverrides;
use crate::app::logging;
use crate::domain::InstallDecision;

pub use setup::{SetupRequest, SetupSummary, run_setup};

#[derive(Parser)]
#[command(name = "defectlab")]
#[command(version)]
#[command(
    about = "Bootstrap a steel defect detection experiment workspace",
    long_about = None
)]
struct Cli {
    /// Project directory to lay out (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    project_root: Option<PathBuf>,
    /// NEU-DET dataset root; relative paths resolve against the project root
    #[arg(long, value_name = "DIR")]
    data_root: Option<PathBuf>,
    /// Config file (defaults to defectlab.toml in the project root)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Python interpreter used to run pip
    #[arg(long, value_name = "EXE")]
    python: Option<String>,
    /// Install packages without prompting
    #[arg(long, conflicts_with = "skip_install")]
    install: bool,
    /// Skip package installation without prompting
    #[arg(long, conflicts_with = "install")]
    skip_install: bool,
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn install_decision(&self) -> InstallDecision {
        if self.install {
            InstallDecision::Install
        } else if self.skip_install {
            InstallDecision::Skip
        } else {
            InstallDecision::Prompt
        }
    }

    fn into_request(self) -> SetupRequest {
        let install = self.install_decision();
        SetupRequest {
            project_root: self.project_root,
            config: self.config,
            overrides: SetupOverrides { data_root: self.data_root, python: self.python, install },
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    if let Err(e) = run_setup(cli.into_request()) {
        println!("Setup failed with error: {}", e);
        std::process::exit(1);
    }
}
