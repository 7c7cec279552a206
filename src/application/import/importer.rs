//! Importer
//!
//! Copies one asset into the home store at its canonical path. An existing
//! target is only ever replaced as a whole, and only when asked to. The home
//! copy may sit at a case variant of the canonical path (`Release.md` for
//! `prompt:release`); that copy counts as the existing target.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entities::{AssetIdentity, AssetKind};
use crate::error::{HearthError, HearthResult};
use crate::infrastructure::discovery::{find_manifest, find_prompts, find_skills};
use crate::infrastructure::fingerprint::skill_files;
use crate::infrastructure::fs::{copy_asset, remove_asset};

/// Import `source` as `identity` into `home`, returning the target path.
///
/// The source is validated before the target is touched. Without
/// `overwrite`, an existing target fails with [`HearthError::AlreadyExists`]
/// and is left unmodified. With it, every existing copy of the identity is
/// removed before the source lands at the canonical path.
pub fn import_asset(
    home: &Path,
    identity: &AssetIdentity,
    source: &Path,
    overwrite: bool,
) -> HearthResult<PathBuf> {
    validate_source(identity.kind, source)?;

    let target = identity.home_path(home);
    let existing = existing_targets(home, identity, &target);
    if let Some(first) = existing.first() {
        if !overwrite {
            return Err(HearthError::AlreadyExists {
                path: first.clone(),
            });
        }
        for path in &existing {
            remove_asset(path)?;
        }
    }

    copy_asset(source, &target)?;
    info!(asset = %identity, source = %source.display(), target = %target.display(), "imported");
    Ok(target)
}

/// Home paths currently holding `identity`, sorted: every case variant the
/// catalog would resolve to it, plus `target` itself when present.
fn existing_targets(home: &Path, identity: &AssetIdentity, target: &Path) -> Vec<PathBuf> {
    let root = home.join(identity.kind.home_dir_name());
    let found = match identity.kind {
        AssetKind::Prompt if root.is_dir() => find_prompts(&root, &[]),
        AssetKind::Skill if root.is_dir() => find_skills(&root, &[]),
        _ => Vec::new(),
    };
    let mut existing: Vec<PathBuf> = found
        .into_iter()
        .filter(|(id, _)| *id == identity.id)
        .map(|(_, path)| path)
        .collect();
    if fs::symlink_metadata(target).is_ok() && !existing.iter().any(|p| p == target) {
        existing.push(target.to_path_buf());
    }
    existing.sort();
    existing
}

fn validate_source(kind: AssetKind, source: &Path) -> HearthResult<()> {
    let missing = || HearthError::SourceMissing {
        path: source.to_path_buf(),
    };
    let meta = fs::metadata(source).map_err(|_| missing())?;

    match kind {
        AssetKind::Prompt if !meta.is_file() => Err(missing()),
        AssetKind::Skill if !meta.is_dir() || find_manifest(source).is_none() => {
            Err(HearthError::NotASkill {
                path: source.to_path_buf(),
            })
        }
        // A cyclic or overly deep tree fails here, before the target is touched
        AssetKind::Skill => skill_files(source).map(|_| ()),
        AssetKind::Prompt => Ok(()),
    }
}
