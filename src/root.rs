//! Project root resolution.
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::sync::SOURCE_FILE;

/// Resolve the project root that holds the source and target files.
///
/// An explicit root always wins. Otherwise the binary's install location is
/// tried first (`<exe dir>/..`, then `<exe dir>/../..` for `target/<profile>/`
/// builds), then the current directory. The first candidate containing the
/// source file is returned.
///
/// # Errors
///
/// Returns an error if no candidate contains the source file.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let exe = std::env::current_exe().ok();
    let cwd = std::env::current_dir()?;
    resolve_root_from(explicit, exe.as_deref(), &cwd)
}

/// [`resolve_root`] with the executable path and working directory supplied
/// by the caller.
///
/// # Errors
///
/// Returns an error if no candidate contains the source file.
pub fn resolve_root_from(
    explicit: Option<&Path>,
    exe: Option<&Path>,
    cwd: &Path,
) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    if let Some(parent) = exe.and_then(Path::parent) {
        let candidates = [
            parent.join(".."),    // bin/ → project root
            parent.join("../.."), // target/release/ → project root
        ];
        for candidate in &candidates {
            if candidate.join(SOURCE_FILE).is_file() {
                return Ok(dunce::canonicalize(candidate)?);
            }
        }
    }

    if cwd.join(SOURCE_FILE).is_file() {
        return Ok(cwd.to_path_buf());
    }

    anyhow::bail!("cannot determine project root (no {SOURCE_FILE} found). Use --root");
}
