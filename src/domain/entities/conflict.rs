//! Conflict states and per-identity scan results
//!
//! A `ScanConflict` is recomputed on every scan and never persisted.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::AssetIdentity;
use crate::domain::value_objects::ContentHash;

/// Relationship between the discovered sources of one identity and its home copy.
///
/// Variants are listed in precedence order; see
/// [`classify`](crate::domain::services::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictState {
    /// Two or more sources disagree
    AmbiguousMultiSource,
    /// One source version, differs from a tracked home copy
    ContentDrift,
    /// One source version, differs from an untracked home copy
    HomeModifiedUntracked,
    /// Home copy agrees (or nothing conflicts) but is not tracked
    HomeUntracked,
    NoConflict,
}

impl ConflictState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictState::AmbiguousMultiSource => "ambiguous-multi-source",
            ConflictState::ContentDrift => "content-drift",
            ConflictState::HomeModifiedUntracked => "home-modified-untracked",
            ConflictState::HomeUntracked => "home-untracked",
            ConflictState::NoConflict => "no-conflict",
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ConflictState::AmbiguousMultiSource => {
                "sources provide different versions of this asset"
            }
            ConflictState::ContentDrift => "source differs from the tracked home copy",
            ConflictState::HomeModifiedUntracked => {
                "source differs from a home copy that has uncommitted changes"
            }
            ConflictState::HomeUntracked => "home copy is not tracked by version control",
            ConflictState::NoConflict => "sources agree with the home store",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            ConflictState::AmbiguousMultiSource => {
                "select one source explicitly (import --from <source>) before importing"
            }
            ConflictState::ContentDrift => {
                "inspect the diff, then re-import with --overwrite or update the source"
            }
            ConflictState::HomeModifiedUntracked => {
                "review the home copy by hand and commit or discard it before importing"
            }
            ConflictState::HomeUntracked => "commit the home copy",
            ConflictState::NoConflict => "nothing to resolve",
        }
    }

    /// Everything except `NoConflict` belongs in the conflict list
    pub fn is_conflict(&self) -> bool {
        !matches!(self, ConflictState::NoConflict)
    }
}

impl fmt::Display for ConflictState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short explanation of how two versions differ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictDiff {
    /// Label of the left-hand version (`home` or a source label)
    pub left: String,
    /// Label of the right-hand version
    pub right: String,
    pub lines: Vec<String>,
    /// More differences existed than were emitted
    pub truncated: bool,
}

impl ConflictDiff {
    pub fn summary(&self) -> String {
        let mut out = format!("{} vs {}\n", self.left, self.right);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        if self.truncated {
            out.push_str("...\n");
        }
        out
    }
}

/// One discovered copy behind a conflict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictCopy {
    pub source: String,
    pub path: PathBuf,
    pub digest: ContentHash,
}

impl ConflictCopy {
    /// `label:path`, as shown to a user choosing between copies
    pub fn label(&self) -> String {
        format!("{}:{}", self.source, self.path.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanConflict {
    #[serde(flatten)]
    pub identity: AssetIdentity,
    pub state: ConflictState,
    pub reason: String,
    pub recommendation: String,
    /// Labels of the sources that provided this identity, sorted
    pub sources: Vec<String>,
    /// Every copy that contributed, in source label then path order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub copies: Vec<ConflictCopy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<ConflictDiff>,
}

impl ScanConflict {
    pub fn new(identity: AssetIdentity, state: ConflictState, sources: Vec<String>) -> Self {
        Self {
            identity,
            state,
            reason: state.reason().to_string(),
            recommendation: state.recommendation().to_string(),
            sources,
            copies: Vec::new(),
            diff: None,
        }
    }

    pub fn with_copies(mut self, copies: Vec<ConflictCopy>) -> Self {
        self.copies = copies;
        self
    }

    pub fn with_diff(mut self, diff: Option<ConflictDiff>) -> Self {
        self.diff = diff;
        self
    }

    /// Sort key shared by every report bucket
    pub fn sort_key(&self) -> (&AssetIdentity, String) {
        (&self.identity, self.sources.join(","))
    }
}
