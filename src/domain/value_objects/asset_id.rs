//! Asset identifier value object
//!
//! Ids are slash-delimited slugs. Every id is normalized before it is compared,
//! so `Tools\Release`, `tools//release` and `./tools/release` are the same asset.

use std::fmt;
use std::path::{Component, Path};

use serde::Serialize;

use crate::error::{HearthError, HearthResult};

/// Normalized asset identifier
///
/// Invariants: lowercase, `/`-separated, no empty, `.` or `..` segments,
/// never empty as a whole.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Normalize a raw id, rejecting ids that normalize to nothing.
    pub fn parse(raw: &str) -> HearthResult<Self> {
        Self::normalize(raw).ok_or_else(|| HearthError::InvalidAssetId {
            raw: raw.to_string(),
        })
    }

    /// Normalize a raw id: case folding, separator collapsing and
    /// traversal-segment stripping.
    pub fn normalize(raw: &str) -> Option<Self> {
        let folded = raw.to_lowercase();
        let segments: Vec<&str> = folded
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(Self(segments.join("/")))
        }
    }

    /// Build an id from a path relative to an asset root.
    ///
    /// Only normal components contribute; roots, prefixes and `..` are dropped.
    pub fn from_relative_path(relative: &Path) -> Option<Self> {
        let joined = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        Self::normalize(&joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id segments in order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn normalize_folds_case() {
        assert_eq!(AssetId::normalize("Release").unwrap().as_str(), "release");
    }

    #[test]
    fn normalize_collapses_separators() {
        let id = AssetId::normalize("tools\\\\release//notes/").unwrap();
        assert_eq!(id.as_str(), "tools/release/notes");
    }

    #[test]
    fn normalize_strips_traversal_segments() {
        let id = AssetId::normalize("../../etc/./passwd").unwrap();
        assert_eq!(id.as_str(), "etc/passwd");
    }

    #[test]
    fn normalize_rejects_empty() {
        assert!(AssetId::normalize("").is_none());
        assert!(AssetId::normalize("/./..//").is_none());
    }

    #[test]
    fn parse_reports_invalid_id() {
        let err = AssetId::parse("..").unwrap_err();
        assert!(err.to_string().contains("invalid asset id"));
    }

    #[test]
    fn from_relative_path_joins_with_forward_slash() {
        let path: PathBuf = ["git", "Commit"].iter().collect();
        let id = AssetId::from_relative_path(&path).unwrap();
        assert_eq!(id.as_str(), "git/commit");
    }

    #[test]
    fn equal_after_normalization() {
        assert_eq!(
            AssetId::normalize("Git/Commit"),
            AssetId::normalize("git\\commit")
        );
    }

    #[test]
    fn segments_in_order() {
        let id = AssetId::parse("a/b/c").unwrap();
        assert_eq!(id.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
