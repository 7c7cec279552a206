//! Report entities
//!
//! Flat, serializable views over one scan. All lists are kept sorted so the
//! serialized form is byte-identical across runs on unchanged input.

use std::path::PathBuf;

use serde::Serialize;

use super::{AssetIdentity, DiscoveredAsset, SourceRoot};

/// An identity discovered in sources but absent from the home store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsyncedAsset {
    #[serde(flatten)]
    pub identity: AssetIdentity,
    pub sources: Vec<String>,
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub home: PathBuf,
    pub sources: Vec<SourceRoot>,
    pub discovered_prompts: Vec<DiscoveredAsset>,
    pub discovered_skills: Vec<DiscoveredAsset>,
    pub unsynced_prompts: Vec<UnsyncedAsset>,
    pub unsynced_skills: Vec<UnsyncedAsset>,
}

impl ScanReport {
    pub fn discovered(&self) -> impl Iterator<Item = &DiscoveredAsset> {
        self.discovered_prompts
            .iter()
            .chain(self.discovered_skills.iter())
    }

    pub fn unsynced(&self) -> impl Iterator<Item = &UnsyncedAsset> {
        self.unsynced_prompts.iter().chain(self.unsynced_skills.iter())
    }

    pub fn is_unsynced(&self, identity: &AssetIdentity) -> bool {
        self.unsynced().any(|u| &u.identity == identity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    #[serde(flatten)]
    pub identity: AssetIdentity,
    pub sources: Vec<String>,
}

/// Three-bucket status of every discovered identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub synced_tracked: Vec<StatusEntry>,
    pub synced_untracked: Vec<StatusEntry>,
    pub unsynced: Vec<StatusEntry>,
}

impl StatusView {
    pub fn total(&self) -> usize {
        self.synced_tracked.len() + self.synced_untracked.len() + self.unsynced.len()
    }
}

/// Identity that could not be classified because one of its copies was unreadable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetFailure {
    #[serde(flatten)]
    pub identity: AssetIdentity,
    pub path: PathBuf,
    pub message: String,
}
