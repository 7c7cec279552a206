//! Hearth - keeps one canonical home collection of prompts and skills in
//! sync with the tool directories and projects they were created in.
//!
//! A scan discovers assets under every source root, fingerprints them,
//! and classifies each identity against the home store. Imports copy a
//! chosen subset into the home store, never overwriting silently.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    import_asset, ImportOptions, ImportSelection, ImportSummary, ImportUseCase, ScanOptions,
    ScanOutcome, ScanUseCase,
};
pub use config::{resolve, ConfigOverrides, HearthConfig};
pub use domain::entities::{AssetIdentity, AssetKind, ConflictState, ScanConflict, ScanReport};
pub use domain::value_objects::{AssetId, Fingerprint};
pub use error::{HearthError, HearthResult};
pub use infrastructure::{discover, fingerprint, read_catalog, GitTrackedFiles};
