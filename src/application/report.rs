//! Report Builder
//!
//! Aggregates one scan into deterministic views. Every bucket is sorted by
//! kind, then id, then the joined source list.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::{
    AssetIdentity, AssetKind, DiscoveredAsset, ScanConflict, ScanReport, SourceRoot,
    StatusEntry, StatusView, UnsyncedAsset,
};
use crate::domain::value_objects::TrackedSet;
use crate::infrastructure::discovery::HomeCatalog;

/// Partition discovered assets by kind and collect those absent from home.
pub fn build_report(
    home: &Path,
    sources: &[SourceRoot],
    discovered: &[DiscoveredAsset],
    catalog: &HomeCatalog,
) -> ScanReport {
    let mut discovered = discovered.to_vec();
    discovered.sort();

    let (discovered_prompts, discovered_skills): (Vec<_>, Vec<_>) = discovered
        .iter()
        .cloned()
        .partition(|a| a.kind() == AssetKind::Prompt);

    let mut unsynced: Vec<UnsyncedAsset> = group(&discovered)
        .into_iter()
        .filter(|(identity, _)| !catalog.contains(identity))
        .map(|(identity, copies)| UnsyncedAsset {
            sources: labels(&copies),
            paths: copies.iter().map(|c| c.path.clone()).collect::<Vec<PathBuf>>(),
            identity,
        })
        .collect();
    unsynced.sort_by(|a, b| {
        (&a.identity, a.sources.join(",")).cmp(&(&b.identity, b.sources.join(",")))
    });

    let (unsynced_prompts, unsynced_skills): (Vec<_>, Vec<_>) = unsynced
        .into_iter()
        .partition(|u| u.identity.kind == AssetKind::Prompt);

    ScanReport {
        home: home.to_path_buf(),
        sources: sources.to_vec(),
        discovered_prompts,
        discovered_skills,
        unsynced_prompts,
        unsynced_skills,
    }
}

/// Three-bucket status of every discovered identity.
pub fn build_status(
    discovered: &[DiscoveredAsset],
    catalog: &HomeCatalog,
    tracked: &TrackedSet,
) -> StatusView {
    let mut view = StatusView::default();

    for (identity, copies) in group(discovered) {
        let bucket = if !catalog.contains(&identity) {
            &mut view.unsynced
        } else if tracked.is_tracked(&identity) {
            &mut view.synced_tracked
        } else {
            &mut view.synced_untracked
        };
        bucket.push(StatusEntry {
            sources: labels(&copies),
            identity,
        });
    }

    for bucket in [
        &mut view.synced_tracked,
        &mut view.synced_untracked,
        &mut view.unsynced,
    ] {
        bucket.sort_by(|a, b| {
            (&a.identity, a.sources.join(",")).cmp(&(&b.identity, b.sources.join(",")))
        });
    }
    view
}

/// Sort a conflict list into report order.
pub fn sort_conflicts(conflicts: &mut [ScanConflict]) {
    conflicts.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

fn group(discovered: &[DiscoveredAsset]) -> BTreeMap<AssetIdentity, Vec<&DiscoveredAsset>> {
    let mut groups: BTreeMap<AssetIdentity, Vec<&DiscoveredAsset>> = BTreeMap::new();
    for asset in discovered {
        groups.entry(asset.identity.clone()).or_default().push(asset);
    }
    for copies in groups.values_mut() {
        copies.sort();
    }
    groups
}

fn labels(copies: &[&DiscoveredAsset]) -> Vec<String> {
    let mut labels: Vec<String> = copies.iter().map(|c| c.source.clone()).collect();
    labels.sort();
    labels.dedup();
    labels
}
