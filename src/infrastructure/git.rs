//! Version-control substrate adapters
//!
//! `GitTrackedFiles` asks git which files of the home store are tracked.
//! Any failure (git missing, home not a repository) degrades to an empty set.

use std::collections::BTreeSet;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::ports::TrackedFiles;

/// Tracked files via `git ls-files -z`
#[derive(Debug, Clone, Copy, Default)]
pub struct GitTrackedFiles;

impl GitTrackedFiles {
    pub fn new() -> Self {
        Self
    }
}

impl TrackedFiles for GitTrackedFiles {
    fn tracked_paths(&self, home: &Path) -> BTreeSet<String> {
        if !home.is_dir() {
            return BTreeSet::new();
        }

        let output = Command::new("git")
            .arg("-C")
            .arg(home)
            .args(["ls-files", "-z"])
            // Never prompt; this runs inside an interactive CLI
            .env("GIT_TERMINAL_PROMPT", "0")
            .output();

        match output {
            Ok(out) if out.status.success() => {
                let paths = parse_ls_files(&out.stdout);
                debug!(home = %home.display(), tracked = paths.len(), "listed tracked files");
                paths
            }
            Ok(out) => {
                debug!(
                    home = %home.display(),
                    stderr = %String::from_utf8_lossy(&out.stderr).trim(),
                    "git ls-files failed; treating home as untracked"
                );
                BTreeSet::new()
            }
            Err(e) => {
                debug!(error = %e, "git unavailable; treating home as untracked");
                BTreeSet::new()
            }
        }
    }
}

/// Split NUL-separated `git ls-files -z` output
pub fn parse_ls_files(stdout: &[u8]) -> BTreeSet<String> {
    stdout
        .split(|b| *b == 0)
        .filter(|p| !p.is_empty())
        .map(|p| String::from_utf8_lossy(p).into_owned())
        .collect()
}

/// Fixed tracked-file set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticTrackedFiles(BTreeSet<String>);

impl StaticTrackedFiles {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }

    /// Nothing is tracked
    pub fn none() -> Self {
        Self::default()
    }
}

impl TrackedFiles for StaticTrackedFiles {
    fn tracked_paths(&self, _home: &Path) -> BTreeSet<String> {
        self.0.clone()
    }
}
