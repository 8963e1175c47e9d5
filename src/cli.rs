//! Command-line argument definitions.
use clap::Parser;

use crate::commands::Mode;

/// Top-level CLI entry point for the version sync tool.
#[derive(Parser, Debug)]
#[command(
    name = "version-sync",
    about = "Copy the package.json version into gemini-extension.json",
    version
)]
pub struct Cli {
    /// Override project root directory
    #[arg(long)]
    pub root: Option<std::path::PathBuf>,

    /// Preview the change without writing
    #[arg(short = 'd', long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Fail if the target file is out of sync; never writes
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The run mode selected by the flags.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Write
        }
    }
}
