//! Command orchestration: resolve the root and run the selected mode.
use anyhow::{Context as _, Result};

use crate::cli::Cli;
use crate::logging::Logger;
use crate::root;
use crate::sync::{self, TARGET_FILE, version_label};

/// What a run does with the computed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Overwrite the target file.
    Write,
    /// Show what would be written.
    DryRun,
    /// Fail if the target is not already in sync.
    Check,
}

/// Execute one invocation of the tool.
///
/// # Errors
///
/// Returns an error if the project root cannot be determined, a file cannot
/// be read, parsed or written, or (in check mode) the target is out of sync.
pub fn run(args: &Cli, log: &Logger) -> Result<()> {
    let root = root::resolve_root(args.root.as_deref())?;
    log.debug(&format!("project root: {}", root.display()));

    match args.mode() {
        Mode::Write => {
            sync::sync(&root, log).context("version sync failed")?;
        }
        Mode::DryRun => {
            let plan = sync::plan(&root, log).context("version sync failed")?;
            if plan.up_to_date {
                log.info(&format!(
                    "{TARGET_FILE} already at v{}",
                    version_label(&plan.version)
                ));
            } else {
                log.dry_run(&format!(
                    "would sync {TARGET_FILE} to v{}",
                    version_label(&plan.version)
                ));
                for line in plan.contents.lines() {
                    log.debug(line);
                }
            }
        }
        Mode::Check => {
            let plan = sync::check(&root, log).context("version check failed")?;
            if !plan.up_to_date {
                anyhow::bail!("{TARGET_FILE} is out of sync; run version-sync to update it");
            }
        }
    }
    Ok(())
}
