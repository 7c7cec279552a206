//! Domain Entities
//!
//! - `AssetIdentity` / `DiscoveredAsset` - what a scan finds
//! - `ScanConflict` - per-identity classification result
//! - `ScanReport` / `StatusView` - aggregated, deterministic views

mod asset;
mod conflict;
mod report;

pub use asset::{
    is_manifest_name, AssetIdentity, AssetKind, DiscoveredAsset, SourceRoot, SKILL_MANIFEST,
};
pub use conflict::{ConflictCopy, ConflictDiff, ConflictState, ScanConflict};
pub use report::{AssetFailure, ScanReport, StatusEntry, StatusView, UnsyncedAsset};
