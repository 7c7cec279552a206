//! Conventional asset locations
//!
//! Where AI coding tools keep prompts (commands) and skills, relative to a
//! project root or the user's home directory.

use std::path::{Path, PathBuf};

use crate::domain::entities::AssetKind;

/// Sub-paths that hold prompt files
pub const PROMPT_SUBPATHS: &[&str] = &[
    ".claude/commands",
    ".codex/prompts",
    ".cursor/commands",
    ".opencode/command",
    "prompts",
];

/// Sub-paths that hold skill directories
pub const SKILL_SUBPATHS: &[&str] = &[
    ".claude/skills",
    ".codex/skills",
    ".opencode/skill",
    "skills",
];

fn subpaths(kind: AssetKind) -> &'static [&'static str] {
    match kind {
        AssetKind::Prompt => PROMPT_SUBPATHS,
        AssetKind::Skill => SKILL_SUBPATHS,
    }
}

/// Existing directories under `root` that may hold assets of `kind`.
///
/// Conventional sub-paths come first in table order; an explicit root is
/// itself a candidate and comes last.
pub fn candidate_roots(root: &Path, kind: AssetKind, explicit: bool) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = subpaths(kind)
        .iter()
        .map(|sub| root.join(sub))
        .filter(|p| p.is_dir())
        .collect();

    if explicit && root.is_dir() {
        roots.push(root.to_path_buf());
    }

    roots
}
