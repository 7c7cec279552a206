//! Scan Result

use serde::Serialize;

use crate::domain::entities::{
    AssetFailure, AssetIdentity, ConflictState, DiscoveredAsset, ScanConflict, ScanReport,
    StatusView,
};

/// Everything one scan produced.
///
/// Serializes deterministically: every list is sorted and nothing depends on
/// time or traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub report: ScanReport,
    pub status: StatusView,
    /// Identities whose state is anything but `no-conflict`
    pub conflicts: Vec<ScanConflict>,
    /// Identities that could not be classified
    pub failures: Vec<AssetFailure>,
}

impl ScanOutcome {
    pub fn conflict(&self, identity: &AssetIdentity) -> Option<&ScanConflict> {
        self.conflicts.iter().find(|c| &c.identity == identity)
    }

    /// State of an identity; `None` when it was not discovered or failed
    pub fn state_of(&self, identity: &AssetIdentity) -> Option<ConflictState> {
        if let Some(conflict) = self.conflict(identity) {
            return Some(conflict.state);
        }
        let discovered = self.copies(identity).next().is_some();
        (discovered && !self.has_failure(identity)).then_some(ConflictState::NoConflict)
    }

    /// Discovered copies of an identity, ordered by source label
    pub fn copies<'a>(
        &'a self,
        identity: &'a AssetIdentity,
    ) -> impl Iterator<Item = &'a DiscoveredAsset> + 'a {
        self.report
            .discovered()
            .filter(move |asset| &asset.identity == identity)
    }

    pub fn has_failure(&self, identity: &AssetIdentity) -> bool {
        self.failures.iter().any(|f| &f.identity == identity)
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
