//! Asset entities - identities and discovered copies
//!
//! Prompts are single markdown files. Skills are directories holding a
//! `SKILL.md` manifest plus supporting files.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AssetId;

/// Manifest file that marks a directory as a skill (matched case-insensitively)
pub const SKILL_MANIFEST: &str = "SKILL.md";

/// Whether a file name is the skill manifest
pub fn is_manifest_name(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|n| n.eq_ignore_ascii_case(SKILL_MANIFEST))
}

/// Kind of asset
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Single markdown file
    Prompt,
    /// Directory-based skill (SKILL.md + supplementals)
    Skill,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Prompt => "prompt",
            AssetKind::Skill => "skill",
        }
    }

    /// Directory of the home store holding this kind
    pub fn home_dir_name(&self) -> &'static str {
        match self {
            AssetKind::Prompt => "prompts",
            AssetKind::Skill => "skills",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// (kind, id) pair; unique within the home store and across sources.
///
/// Ordering is kind first, then id, which is the report sort order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AssetIdentity {
    pub kind: AssetKind,
    pub id: AssetId,
}

impl AssetIdentity {
    pub fn new(kind: AssetKind, id: AssetId) -> Self {
        Self { kind, id }
    }

    pub fn prompt(id: AssetId) -> Self {
        Self::new(AssetKind::Prompt, id)
    }

    pub fn skill(id: AssetId) -> Self {
        Self::new(AssetKind::Skill, id)
    }

    /// Canonical location inside the home store:
    /// `prompts/<id>.md` or `skills/<id>`
    pub fn home_path(&self, home: &Path) -> PathBuf {
        let mut path = home.join(self.kind.home_dir_name());
        for segment in self.id.segments() {
            path.push(segment);
        }
        match self.kind {
            AssetKind::Prompt => {
                let mut file = path.into_os_string();
                file.push(".md");
                PathBuf::from(file)
            }
            AssetKind::Skill => path,
        }
    }
}

impl fmt::Display for AssetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// A configured place to look for assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRoot {
    pub label: String,
    pub path: PathBuf,
    /// The root itself is a candidate, not only its conventional sub-paths
    pub explicit: bool,
}

impl SourceRoot {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            explicit: false,
        }
    }

    pub fn explicit(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            explicit: true,
            ..Self::new(label, path)
        }
    }
}

/// One copy of an asset found under a source root during a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredAsset {
    #[serde(flatten)]
    pub identity: AssetIdentity,
    pub source: String,
    pub path: PathBuf,
}

impl DiscoveredAsset {
    pub fn new(identity: AssetIdentity, source: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            identity,
            source: source.into(),
            path: path.into(),
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.identity.kind
    }
}

impl PartialOrd for DiscoveredAsset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DiscoveredAsset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity
            .cmp(&other.identity)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.path.cmp(&other.path))
    }
}
