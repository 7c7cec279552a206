//! Differ Domain Service
//!
//! Bounded, human-readable explanations of how two versions of an asset
//! differ. Prompts get a line diff; skills get a file-listing comparison.

use std::collections::BTreeSet;

use similar::{ChangeTag, TextDiff};

use crate::domain::entities::ConflictDiff;

/// Maximum number of diff lines attached to a conflict
pub const MAX_DIFF_LINES: usize = 8;

/// A single line change in a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub tag: DiffTag,
    pub content: String,
}

/// Type of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    Delete,
    Insert,
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

impl DiffLine {
    /// `-line` / `+line` rendering; equal lines render with a leading space
    pub fn render(&self) -> String {
        let marker = match self.tag {
            DiffTag::Delete => '-',
            DiffTag::Insert => '+',
            DiffTag::Equal => ' ',
        };
        format!("{}{}", marker, self.content)
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
    pub additions: usize,
    pub deletions: usize,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Only the changed lines (insertions and deletions)
    pub fn changed_lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.lines.iter().filter(|l| l.tag != DiffTag::Equal)
    }
}

/// Differ service for computing asset differences
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Line diff between two strings
    pub fn diff(&self, old: &str, new: &str) -> DiffResult {
        let text_diff = TextDiff::from_lines(old, new);
        let mut result = DiffResult::default();

        for change in text_diff.iter_all_changes() {
            let tag = DiffTag::from(change.tag());
            match tag {
                DiffTag::Delete => result.deletions += 1,
                DiffTag::Insert => result.additions += 1,
                DiffTag::Equal => {}
            }
            result.lines.push(DiffLine {
                tag,
                content: change.value().trim_end_matches(['\r', '\n']).to_string(),
            });
        }

        result
    }

    /// Prompt conflict diff: only differing lines, at most [`MAX_DIFF_LINES`].
    pub fn prompt_diff(&self, left: &str, old: &str, right: &str, new: &str) -> ConflictDiff {
        let result = self.diff(old, new);
        let changed: Vec<String> = result.changed_lines().map(DiffLine::render).collect();
        bounded(left, right, changed)
    }

    /// Skill conflict diff: compares the file listings of both directories.
    ///
    /// Files only on the left are marked `-`, files only on the right `+`.
    /// When the listings are identical the difference is in file contents.
    pub fn skill_listing_diff(
        &self,
        left: &str,
        old_files: &[String],
        right: &str,
        new_files: &[String],
    ) -> ConflictDiff {
        let old: BTreeSet<&str> = old_files.iter().map(String::as_str).collect();
        let new: BTreeSet<&str> = new_files.iter().map(String::as_str).collect();

        let mut lines: Vec<String> = old.difference(&new).map(|f| format!("-{}", f)).collect();
        lines.extend(new.difference(&old).map(|f| format!("+{}", f)));

        if lines.is_empty() {
            lines.push(format!(
                "same {} file(s); contents differ",
                old.len()
            ));
        }

        bounded(left, right, lines)
    }
}

fn bounded(left: &str, right: &str, mut lines: Vec<String>) -> ConflictDiff {
    let truncated = lines.len() > MAX_DIFF_LINES;
    lines.truncate(MAX_DIFF_LINES);
    ConflictDiff {
        left: left.to_string(),
        right: right.to_string(),
        lines,
        truncated,
    }
}
