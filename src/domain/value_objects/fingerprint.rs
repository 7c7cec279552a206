//! Fingerprint value object

use serde::Serialize;

use super::ContentHash;

/// Deterministic content digest of a prompt file or a whole skill directory,
/// plus a human-facing description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fingerprint {
    pub digest: ContentHash,
    pub short_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Vec<String>>,
}

impl Fingerprint {
    pub fn new(digest: ContentHash, short_description: impl Into<String>) -> Self {
        Self {
            digest,
            short_description: short_description.into(),
            preview: None,
        }
    }

    /// Builder: attach preview lines (empty previews are dropped)
    pub fn with_preview(mut self, lines: Vec<String>) -> Self {
        self.preview = if lines.is_empty() { None } else { Some(lines) };
        self
    }

    /// Two fingerprints describe the same content when their digests match.
    /// Descriptions and previews are derived data and never compared.
    pub fn same_content(&self, other: &Fingerprint) -> bool {
        self.digest == other.digest
    }
}
