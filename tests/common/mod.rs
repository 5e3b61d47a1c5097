// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed WordPress project and a fluent
// builder so each integration test can set up an isolated project without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use wp_main_file::actions::GithubOutputs;
use wp_main_file::commands::generate;
use wp_main_file::config::{Inputs, MANIFEST_FILE};
use wp_main_file::logging::BufferedLog;

/// Name of the step-output file created inside each test project.
pub const OUTPUT_FILE: &str = "github_output";

/// An isolated project backed by a [`tempfile::TempDir`].
///
/// The directory is deleted when dropped.
pub struct TestProject {
    /// Temporary project root.
    pub root: tempfile::TempDir,
}

impl TestProject {
    /// Path to the project root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Inputs rooted at this project, with step outputs going to [`OUTPUT_FILE`].
    pub fn inputs(&self) -> Inputs {
        let mut inputs = Inputs::new(self.root.path());
        inputs.output_file = Some(self.output_path());
        inputs
    }

    /// Path of the step-output file.
    pub fn output_path(&self) -> PathBuf {
        self.root.path().join(OUTPUT_FILE)
    }

    /// Run `generate` with `inputs`, returning the captured log.
    pub fn generate(&self, inputs: &Inputs) -> BufferedLog {
        let log = BufferedLog::new();
        let outputs = GithubOutputs::new(inputs.output_file.clone());
        generate::run(inputs, &log, &outputs).expect("generate");
        log
    }

    /// Read a project file as text.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.root.path().join(name)).expect("read project file")
    }

    /// Whether a project file exists.
    pub fn exists(&self, name: &str) -> bool {
        self.root.path().join(name).exists()
    }

    /// Contents of the step-output file, empty if nothing was written.
    pub fn step_outputs(&self) -> String {
        std::fs::read_to_string(self.output_path()).unwrap_or_default()
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

    /// Write `content` to `composer.json`.
    pub fn with_manifest(self, content: &str) -> Self {
        self.with_file(MANIFEST_FILE, content.as_bytes())
    }

    /// Write `content` to `name` inside the project.
    pub fn with_file(self, name: &str, content: &[u8]) -> Self {
        std::fs::write(self.project.root.path().join(name), content).expect("write project file");
        self
    }

    /// Finish building and return the project.
    pub fn build(self) -> TestProject {
        self.project
    }
}
