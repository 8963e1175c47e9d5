//! The version sync pipeline.
//!
//! Reads `version` from [`SOURCE_FILE`], writes it into [`TARGET_FILE`] and
//! leaves every other field of the target untouched and in order. Both paths
//! are resolved beneath an explicit project root.
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::SyncError;
use crate::logging::Logger;
use crate::record::JsonRecord;

/// File holding the authoritative version, relative to the project root.
pub const SOURCE_FILE: &str = "package.json";

/// File whose version is kept in sync, relative to the project root.
pub const TARGET_FILE: &str = "gemini-extension.json";

/// Name of the field copied from source to target.
pub const VERSION_KEY: &str = "version";

/// The computed result of a sync, before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    /// Absolute or root-relative path of the target file.
    pub target_path: PathBuf,
    /// Version taken from the source (`null` when the source has none).
    pub version: Value,
    /// Version the target held before, if it had one.
    pub previous: Option<Value>,
    /// Full text that will be written to the target.
    pub contents: String,
    /// Whether the target on disk already equals `contents` byte for byte.
    pub up_to_date: bool,
}

impl SyncPlan {
    /// Consume the plan, keeping only what a completed sync reports.
    #[must_use]
    pub fn into_outcome(self) -> SyncOutcome {
        SyncOutcome {
            target_path: self.target_path,
            version: self.version,
            previous: self.previous,
        }
    }
}

/// Result of a completed sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Path of the file that was written.
    pub target_path: PathBuf,
    /// Version written into the target.
    pub version: Value,
    /// Version the target held before, if it had one.
    pub previous: Option<Value>,
}

/// Render a version value for messages: strings bare, anything else as JSON.
#[must_use]
pub fn version_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compute the updated target without writing it.
///
/// # Errors
///
/// Returns [`SyncError`] if either file cannot be read or is not a JSON
/// object.
pub fn plan(project_root: &Path, log: &Logger) -> Result<SyncPlan, SyncError> {
    let source_path = project_root.join(SOURCE_FILE);
    let target_path = project_root.join(TARGET_FILE);

    log.debug(&format!("reading {}", source_path.display()));
    let source = JsonRecord::load(&source_path)?;
    let version = if let Some(version) = source.get(VERSION_KEY) {
        version.clone()
    } else {
        log.warn(&format!(
            "{SOURCE_FILE} has no \"{VERSION_KEY}\" field; writing null"
        ));
        Value::Null
    };
    if !version.is_string() && !version.is_null() {
        log.warn(&format!(
            "{SOURCE_FILE} \"{VERSION_KEY}\" is not a string: {version}"
        ));
    }

    log.debug(&format!("reading {}", target_path.display()));
    let original = std::fs::read(&target_path).map_err(|e| SyncError::io(&target_path, e))?;
    let mut target = JsonRecord::from_json_slice(&target_path, &original)?;

    let previous = target.replace_field(VERSION_KEY, version.clone());
    match &previous {
        Some(prev) => log.debug(&format!(
            "{TARGET_FILE}: {} -> {}",
            version_label(prev),
            version_label(&version)
        )),
        None => log.warn(&format!(
            "{TARGET_FILE} has no \"{VERSION_KEY}\" field; appending one"
        )),
    }

    let contents = target.into_json_text();
    let up_to_date = contents.as_bytes() == original.as_slice();

    Ok(SyncPlan {
        target_path,
        version,
        previous,
        contents,
        up_to_date,
    })
}

/// Copy the source version into the target and overwrite the target file.
///
/// The target is rewritten in full even when it is already up to date, so
/// repeated runs always leave byte-identical output. The write is not
/// atomic.
///
/// # Errors
///
/// Returns [`SyncError`] if a file cannot be read, parsed or written. Any
/// failure before the write leaves the target untouched.
pub fn sync(project_root: &Path, log: &Logger) -> Result<SyncOutcome, SyncError> {
    let plan = plan(project_root, log)?;

    log.debug(&format!("writing {}", plan.target_path.display()));
    std::fs::write(&plan.target_path, &plan.contents)
        .map_err(|e| SyncError::io(&plan.target_path, e))?;

    log.info(&format!(
        "Synced {TARGET_FILE} to v{}",
        version_label(&plan.version)
    ));
    Ok(plan.into_outcome())
}

/// Report whether the target is already in sync, without writing.
///
/// # Errors
///
/// Returns [`SyncError`] if either file cannot be read or parsed.
pub fn check(project_root: &Path, log: &Logger) -> Result<SyncPlan, SyncError> {
    let plan = plan(project_root, log)?;
    if plan.up_to_date {
        log.info(&format!(
            "{TARGET_FILE} is in sync (v{})",
            version_label(&plan.version)
        ));
    } else if plan.previous.as_ref() == Some(&plan.version) {
        log.warn(&format!(
            "{TARGET_FILE} has the right version but is not normalized"
        ));
    } else {
        log.warn(&format!(
            "{TARGET_FILE} is out of sync: has v{}, {SOURCE_FILE} has v{}",
            plan.previous
                .as_ref()
                .map_or_else(|| "(none)".to_string(), version_label),
            version_label(&plan.version)
        ));
    }
    Ok(plan)
}
