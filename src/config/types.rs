//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::domain::entities::SourceRoot;

/// Resolved configuration for one command.
///
/// Built once by [`resolve`](super::resolve) and passed by reference into
/// every use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HearthConfig {
    /// Root of the home store
    pub home: PathBuf,
    pub sources: Vec<SourceRoot>,
}

impl HearthConfig {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            sources: Vec::new(),
        }
    }

    /// Builder: add a source
    pub fn with_source(mut self, source: SourceRoot) -> Self {
        self.sources.push(source);
        self
    }

    /// Sources that can be scanned: the home store is never its own source.
    pub fn effective_sources(&self) -> Vec<&SourceRoot> {
        self.sources
            .iter()
            .filter(|source| {
                let is_home = same_path(&source.path, &self.home);
                if is_home {
                    warn!(
                        source = %source.label,
                        path = %source.path.display(),
                        "source is the home store itself; skipping"
                    );
                }
                !is_home
            })
            .collect()
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// On-disk configuration file (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    /// Home store location (`~` is expanded)
    #[serde(default)]
    pub home: Option<PathBuf>,

    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

/// One `[[sources]]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceEntry {
    pub label: String,
    pub path: PathBuf,
    /// Also treat the path itself as an asset root
    #[serde(default)]
    pub explicit: bool,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown or problematic key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
