//! Tracked-file membership for the home store

use std::collections::BTreeSet;

use crate::domain::entities::{AssetIdentity, AssetKind};

/// Set of home-relative paths known to version control.
///
/// Paths are compared lowercase with forward slashes, matching how asset ids
/// are normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedSet {
    paths: BTreeSet<String>,
}

impl TrackedSet {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            paths: paths
                .into_iter()
                .map(|p| normalize_tracked_path(p.as_ref()))
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the home copy of `identity` is tracked.
    ///
    /// A prompt is tracked when `prompts/<id>.md` is. A skill is tracked when
    /// any file under `skills/<id>/` is.
    pub fn is_tracked(&self, identity: &AssetIdentity) -> bool {
        match identity.kind {
            AssetKind::Prompt => self
                .paths
                .contains(&format!("prompts/{}.md", identity.id.as_str())),
            AssetKind::Skill => {
                let prefix = format!("skills/{}/", identity.id.as_str());
                self.paths
                    .range(prefix.clone()..)
                    .next()
                    .is_some_and(|p| p.starts_with(&prefix))
            }
        }
    }
}

fn normalize_tracked_path(raw: &str) -> String {
    raw.trim()
        .replace('\\', "/")
        .trim_start_matches("./")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AssetId;

    fn prompt(id: &str) -> AssetIdentity {
        AssetIdentity::new(AssetKind::Prompt, AssetId::parse(id).unwrap())
    }

    fn skill(id: &str) -> AssetIdentity {
        AssetIdentity::new(AssetKind::Skill, AssetId::parse(id).unwrap())
    }

    #[test]
    fn prompt_tracked_by_exact_path() {
        let set = TrackedSet::new(["prompts/release.md", "README.md"]);
        assert!(set.is_tracked(&prompt("release")));
        assert!(!set.is_tracked(&prompt("other")));
    }

    #[test]
    fn prompt_tracking_is_case_insensitive() {
        let set = TrackedSet::new(["prompts/Git/Commit.md"]);
        assert!(set.is_tracked(&prompt("git/commit")));
    }

    #[test]
    fn skill_tracked_when_any_file_under_it_is() {
        let set = TrackedSet::new(["skills/review/scripts/run.sh"]);
        assert!(set.is_tracked(&skill("review")));
    }

    #[test]
    fn skill_prefix_does_not_match_sibling() {
        let set = TrackedSet::new(["skills/review-extra/SKILL.md"]);
        assert!(!set.is_tracked(&skill("review")));
    }

    #[test]
    fn empty_set_tracks_nothing() {
        let set = TrackedSet::default();
        assert!(set.is_empty());
        assert!(!set.is_tracked(&prompt("release")));
    }
}
