// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed project and a fluent builder so each
// integration test can set up an isolated project root without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use version_sync::sync::{SOURCE_FILE, TARGET_FILE};

/// An isolated project root backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TestProject {
    /// Temporary directory acting as the project root.
    pub root: tempfile::TempDir,
}

impl TestProject {
    /// Path to the project root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path to `package.json`.
    pub fn source_path(&self) -> PathBuf {
        self.root.path().join(SOURCE_FILE)
    }

    /// Path to `gemini-extension.json`.
    pub fn target_path(&self) -> PathBuf {
        self.root.path().join(TARGET_FILE)
    }

    /// Current contents of `gemini-extension.json`.
    pub fn read_target(&self) -> String {
        std::fs::read_to_string(self.target_path()).expect("read target file")
    }

    /// Current contents of `gemini-extension.json`, parsed.
    pub fn target_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_target()).expect("parse target file")
    }
}

/// Fluent builder for [`TestProject`].
pub struct TestProjectBuilder {
    project: TestProject,
}

impl TestProjectBuilder {
    /// Begin building an empty project.
    pub fn new() -> Self {
        Self {
            project: TestProject {
                root: tempfile::tempdir().expect("create temp dir"),
            },
        }
    }

    /// Write `content` to `package.json`.
    pub fn with_source(self, content: &str) -> Self {
        std::fs::write(self.project.source_path(), content).expect("write source file");
        self
    }

    /// Write `content` to `gemini-extension.json`.
    pub fn with_target(self, content: &str) -> Self {
        std::fs::write(self.project.target_path(), content).expect("write target file");
        self
    }

    /// Finish building and return the project.
    pub fn build(self) -> TestProject {
        self.project
    }
}
