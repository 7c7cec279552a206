//! Source Walker
//!
//! Discovers candidate assets under one source root. Discovery is
//! best-effort: a missing or unreadable root yields nothing, never an error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::conventions::candidate_roots;
use crate::domain::entities::{
    is_manifest_name, AssetIdentity, AssetKind, DiscoveredAsset, SourceRoot,
};
use crate::domain::value_objects::AssetId;
use crate::infrastructure::fs::{Walk, WalkEntry};

/// Discover every prompt and skill under a source root.
///
/// Output is sorted and deduplicated by (kind, id, path).
pub fn discover(source: &SourceRoot) -> Vec<DiscoveredAsset> {
    let prompt_roots = candidate_roots(&source.path, AssetKind::Prompt, source.explicit);
    let skill_roots = candidate_roots(&source.path, AssetKind::Skill, source.explicit);
    let all_roots: Vec<PathBuf> = prompt_roots.iter().chain(&skill_roots).cloned().collect();

    let mut found = Vec::new();
    for (kind, roots) in [(AssetKind::Prompt, &prompt_roots), (AssetKind::Skill, &skill_roots)] {
        for root in roots {
            // An explicit root must not re-discover what its conventional
            // sub-paths already cover, under a longer id.
            let others: Vec<PathBuf> = all_roots.iter().filter(|r| *r != root).cloned().collect();
            let assets = match kind {
                AssetKind::Prompt => find_prompts(root, &others),
                AssetKind::Skill => find_skills(root, &others),
            };
            found.extend(assets.into_iter().map(|(id, path)| {
                DiscoveredAsset::new(AssetIdentity::new(kind, id), &source.label, path)
            }));
        }
    }

    found.sort();
    found.dedup();

    debug!(
        source = %source.label,
        path = %source.path.display(),
        assets = found.len(),
        "discovered assets"
    );
    found
}

/// Prompt files under `root`: markdown files outside skill directories.
/// The id is the root-relative path without extension.
pub fn find_prompts(root: &Path, skip: &[PathBuf]) -> Vec<(AssetId, PathBuf)> {
    let walk = Walk::new(root).skipping(skip.iter().cloned());
    let mut skill_dirs: HashMap<PathBuf, bool> = HashMap::new();
    let mut prompts = Vec::new();

    for entry in readable(&walk) {
        if !entry.is_file() || !is_prompt_file(&entry.path) {
            continue;
        }
        if inside_skill(root, &entry.path, &mut skill_dirs) {
            continue;
        }
        let Ok(relative) = entry.path.strip_prefix(root) else {
            continue;
        };
        if let Some(id) = AssetId::from_relative_path(&relative.with_extension("")) {
            prompts.push((id, entry.path));
        }
    }

    prompts
}

/// Skill directories under `root`: directories directly containing a
/// manifest. Directories nested inside a skill are part of that skill.
pub fn find_skills(root: &Path, skip: &[PathBuf]) -> Vec<(AssetId, PathBuf)> {
    if find_manifest(root).is_some() {
        debug!(root = %root.display(), "skill root is itself a skill; no relative id");
        return Vec::new();
    }

    let walk = Walk::new(root).skipping(skip.iter().cloned());
    let mut skills: Vec<(AssetId, PathBuf)> = Vec::new();

    for entry in readable(&walk) {
        if !entry.is_dir() {
            continue;
        }
        if skills.iter().any(|(_, dir)| entry.path.starts_with(dir)) {
            continue;
        }
        if find_manifest(&entry.path).is_none() {
            continue;
        }
        let Ok(relative) = entry.path.strip_prefix(root) else {
            continue;
        };
        if let Some(id) = AssetId::from_relative_path(relative) {
            skills.push((id, entry.path));
        }
    }

    skills
}

/// The manifest file directly inside `dir`, if any.
///
/// When several case variants exist the lexicographically smallest wins.
pub fn find_manifest(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .filter(|entry| is_manifest_name(&entry.file_name()))
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .min()
}

fn readable(walk: &Walk) -> impl Iterator<Item = WalkEntry> + '_ {
    walk.iter().filter_map(|entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            debug!(error = %e, "skipping unreadable directory");
            None
        }
    })
}

fn is_prompt_file(path: &Path) -> bool {
    let is_markdown = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"));
    let is_readme = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.eq_ignore_ascii_case("readme"));
    is_markdown && !is_readme
}

/// Whether any directory between `file` and `root` (inclusive) is a skill.
fn inside_skill(root: &Path, file: &Path, cache: &mut HashMap<PathBuf, bool>) -> bool {
    for dir in file.ancestors().skip(1) {
        if !dir.starts_with(root) {
            break;
        }
        let is_skill = *cache
            .entry(dir.to_path_buf())
            .or_insert_with(|| find_manifest(dir).is_some());
        if is_skill {
            return true;
        }
        if dir == root {
            break;
        }
    }
    false
}
