//! Asset Catalog Reader
//!
//! Lists the canonical assets held by the home store, laid out as
//! `prompts/<id>.md` and `skills/<id>/SKILL.md`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::walker::{find_prompts, find_skills};
use crate::domain::entities::{AssetIdentity, AssetKind};
use crate::domain::value_objects::AssetId;

/// Assets present in the home store, keyed by identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeCatalog {
    entries: BTreeMap<AssetIdentity, PathBuf>,
}

impl HomeCatalog {
    pub fn get(&self, identity: &AssetIdentity) -> Option<&Path> {
        self.entries.get(identity).map(PathBuf::as_path)
    }

    pub fn contains(&self, identity: &AssetIdentity) -> bool {
        self.entries.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetIdentity, &Path)> {
        self.entries.iter().map(|(id, path)| (id, path.as_path()))
    }

    fn insert(&mut self, identity: AssetIdentity, path: PathBuf) {
        if let Some(existing) = self.entries.get(&identity) {
            warn!(
                asset = %identity,
                kept = %existing.display(),
                ignored = %path.display(),
                "home store holds two copies that normalize to the same id"
            );
            return;
        }
        self.entries.insert(identity, path);
    }
}

/// Read the home store's catalog. A missing home store is an empty catalog.
pub fn read_catalog(home: &Path) -> HomeCatalog {
    let mut catalog = HomeCatalog::default();

    for kind in [AssetKind::Prompt, AssetKind::Skill] {
        let root = home.join(kind.home_dir_name());
        if !root.is_dir() {
            continue;
        }
        let mut found: Vec<(AssetId, PathBuf)> = match kind {
            AssetKind::Prompt => find_prompts(&root, &[]),
            AssetKind::Skill => find_skills(&root, &[]),
        };
        // Case variants of one id: keep the lexicographically first path
        found.sort_by(|a, b| a.1.cmp(&b.1));
        for (id, path) in found {
            catalog.insert(AssetIdentity::new(kind, id), path);
        }
    }

    debug!(home = %home.display(), assets = catalog.len(), "read home catalog");
    catalog
}
