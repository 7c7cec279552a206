//! Error types for Hearth
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Hearth operations
pub type HearthResult<T> = Result<T, HearthError>;

/// Main error type for Hearth operations
#[derive(Error, Debug)]
pub enum HearthError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Import target already exists and overwrite was not requested
    #[error("already exists: {path} (pass --overwrite to replace it)")]
    AlreadyExists { path: PathBuf },

    /// Import source is gone
    #[error("source not found: {path}")]
    SourceMissing { path: PathBuf },

    /// Skill source directory has no manifest
    #[error("not a skill directory (no SKILL.md): {path}")]
    NotASkill { path: PathBuf },

    /// Asset id normalizes to nothing
    #[error("invalid asset id '{raw}'")]
    InvalidAssetId { raw: String },

    /// Could not read an asset while fingerprinting it
    #[error("failed to fingerprint {path}: {source}")]
    Fingerprint {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected copies disagree; each entry is `label:path`
    #[error("{identity} has conflicting copies {}; choose one with --from <label or path>", copies.join(", "))]
    AmbiguousSelection {
        identity: String,
        copies: Vec<String>,
    },

    /// `--from` matched no copy of the asset by label or path
    #[error("no copy of {identity} matches '{label}'")]
    UnknownSource { label: String, identity: String },

    /// Asset was not found in any source
    #[error("{identity} was not discovered in any source")]
    NotDiscovered { identity: String },
}
