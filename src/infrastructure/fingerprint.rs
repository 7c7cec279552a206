//! Fingerprinter
//!
//! Computes a stable content digest for a prompt file or a whole skill
//! directory.
//!
//! A skill digest is one SHA-256 stream over every regular file in the tree,
//! sorted by `/`-separated relative path, each contributing
//! `path \n bytes \n`. Traversal order and platform separators therefore
//! never affect the result. Any unreadable file fails the whole fingerprint.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::domain::entities::AssetKind;
use crate::domain::value_objects::{ContentHash, Fingerprint};
use crate::error::{HearthError, HearthResult};
use crate::infrastructure::discovery::find_manifest;
use crate::infrastructure::fs::Walk;

const DESCRIPTION_MAX_CHARS: usize = 80;
const PREVIEW_LINES: usize = 3;

/// Fingerprint an asset on disk
pub fn fingerprint(kind: AssetKind, path: &Path) -> HearthResult<Fingerprint> {
    match kind {
        AssetKind::Prompt => fingerprint_prompt(path),
        AssetKind::Skill => fingerprint_skill(path),
    }
}

fn fingerprint_prompt(path: &Path) -> HearthResult<Fingerprint> {
    let bytes = read(path)?;
    let (description, preview) = describe(&String::from_utf8_lossy(&bytes));
    Ok(Fingerprint::new(ContentHash::from_bytes(&bytes), description).with_preview(preview))
}

fn fingerprint_skill(dir: &Path) -> HearthResult<Fingerprint> {
    let mut hasher = Sha256::new();
    for (relative, absolute) in skill_files(dir)? {
        let bytes = read(&absolute)?;
        hasher.update(relative.as_bytes());
        hasher.update(b"\n");
        hasher.update(&bytes);
        hasher.update(b"\n");
    }

    let (description, preview) = match find_manifest(dir) {
        Some(manifest) => describe(&String::from_utf8_lossy(&read(&manifest)?)),
        None => (String::new(), Vec::new()),
    };

    Ok(Fingerprint::new(ContentHash::from_hasher(hasher), description).with_preview(preview))
}

/// Every regular file under `dir` as (`/`-separated relative path, absolute
/// path), sorted by relative path.
pub fn skill_files(dir: &Path) -> HearthResult<Vec<(String, PathBuf)>> {
    let walk = Walk::unfiltered(dir);
    let mut files = Vec::new();

    for entry in &walk {
        let entry = entry.map_err(|source| HearthError::Fingerprint {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.is_file() {
            continue;
        }
        let Ok(relative) = entry.path.strip_prefix(dir) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push((relative, entry.path));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn read(path: &Path) -> HearthResult<Vec<u8>> {
    fs::read(path).map_err(|source| HearthError::Fingerprint {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Deserialize)]
struct DescriptionOnly {
    description: Option<String>,
}

/// Short description and preview lines of a markdown document.
///
/// The description comes from the YAML frontmatter `description` field when
/// present, otherwise from the first non-empty body line.
pub fn describe(text: &str) -> (String, Vec<String>) {
    let (frontmatter, body) = split_frontmatter(text);

    let from_frontmatter = frontmatter
        .and_then(|yaml| serde_yaml_ng::from_str::<DescriptionOnly>(&yaml).ok())
        .and_then(|fm| fm.description)
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let body_lines: Vec<&str> = body
        .iter()
        .map(|l| l.trim_end())
        .filter(|l| !l.trim().is_empty())
        .collect();

    let description = from_frontmatter.unwrap_or_else(|| {
        body_lines
            .first()
            .map(|l| l.trim_start_matches('#').trim().to_string())
            .unwrap_or_default()
    });

    let preview = body_lines
        .iter()
        .take(PREVIEW_LINES)
        .map(|l| l.to_string())
        .collect();

    (truncate(&description), preview)
}

fn split_frontmatter(text: &str) -> (Option<String>, Vec<&str>) {
    let lines: Vec<&str> = text.lines().collect();
    if lines.first().map(|l| l.trim()) != Some("---") {
        return (None, lines);
    }
    match lines.iter().skip(1).position(|l| l.trim() == "---") {
        Some(offset) => {
            let closing = offset + 1;
            (
                Some(lines[1..closing].join("\n")),
                lines[closing + 1..].to_vec(),
            )
        }
        None => (None, lines),
    }
}

fn truncate(s: &str) -> String {
    if s.chars().count() <= DESCRIPTION_MAX_CHARS {
        return s.to_string();
    }
    let mut out: String = s.chars().take(DESCRIPTION_MAX_CHARS - 3).collect();
    out.push_str("...");
    out
}
