//! Test environment builder for isolated Hearth testing.
//!
//! Provides `TestEnv` - an isolated layout with a user home directory, a
//! project directory, a home store, and extra source roots, plus helpers to
//! run the Hearth CLI against it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use hearth::config::HearthConfig;
use hearth::domain::entities::SourceRoot;

use super::fixtures::write_file;

/// Result of running a Hearth CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated test environment.
///
/// ```text
/// <tmp>/user      user home directory (HOME, HEARTH_TEST_HOME)
/// <tmp>/project   working directory
/// <tmp>/store     home store (passed as --home)
/// <tmp>/<label>   extra source roots
/// ```
pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            root: tempfile::tempdir().expect("create temp dir"),
        };
        fs::create_dir_all(env.user_home()).unwrap();
        fs::create_dir_all(env.project()).unwrap();
        env
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn user_home(&self) -> PathBuf {
        self.root().join("user")
    }

    pub fn project(&self) -> PathBuf {
        self.root().join("project")
    }

    pub fn store(&self) -> PathBuf {
        self.root().join("store")
    }

    /// Directory for an extra source root
    pub fn source(&self, label: &str) -> PathBuf {
        self.root().join(label)
    }

    /// Write a file relative to the temp root, creating parents
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        write_file(&path, content);
        path
    }

    /// Configuration with the store as home and the given explicit sources
    pub fn config(&self, labels: &[&str]) -> HearthConfig {
        labels
            .iter()
            .fold(HearthConfig::new(self.store()), |config, label| {
                config.with_source(SourceRoot::explicit(*label, self.source(label)))
            })
    }

    /// Run hearth from the project directory with `--home <store>`
    pub fn run(&self, args: &[&str]) -> TestResult {
        let store = self.store();
        let mut full: Vec<&str> = vec!["--home", store.to_str().unwrap()];
        full.extend_from_slice(args);
        self.run_raw(&full)
    }

    /// Run hearth from the project directory with exactly `args`
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        let output = self.command().args(args).output().expect("run hearth");
        to_result(output)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hearth"));
        cmd.current_dir(self.project())
            .env("HOME", self.user_home())
            .env("USERPROFILE", self.user_home())
            .env("XDG_CONFIG_HOME", self.user_home().join(".config"))
            .env("HEARTH_TEST_HOME", self.user_home())
            .env("GIT_CEILING_DIRECTORIES", self.root())
            .env_remove("HEARTH_HOME")
            .env_remove("HEARTH_CONFIG")
            .env_remove("HEARTH_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
