//! Scan Use Case
//!
//! Orchestrates one scan:
//! 1. Discover and fingerprint every source root (in parallel, one task per root)
//! 2. Read the home store catalog and its tracked files
//! 3. Classify each identity once the complete fingerprint set is collected
//! 4. Build the report, status view and conflict list

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::HearthConfig;
use crate::domain::entities::{DiscoveredAsset, SourceRoot};
use crate::domain::ports::TrackedFiles;
use crate::domain::value_objects::TrackedSet;
use crate::infrastructure::discovery::{discover, read_catalog};
use crate::infrastructure::fingerprint::fingerprint;

use super::options::ScanOptions;
use super::reconcile::{Fingerprinted, Reconciler};
use super::result::ScanOutcome;
use crate::application::report::{build_report, build_status, sort_conflicts};

/// Scan use case - parameterized by the version-control port
pub struct ScanUseCase<T>
where
    T: TrackedFiles,
{
    tracked_files: T,
}

impl<T> ScanUseCase<T>
where
    T: TrackedFiles,
{
    pub fn new(tracked_files: T) -> Self {
        Self { tracked_files }
    }

    /// Execute the scan use case
    pub fn execute(&self, config: &HearthConfig, options: &ScanOptions) -> ScanOutcome {
        let sources: Vec<SourceRoot> = config.effective_sources().into_iter().cloned().collect();

        // Roots are independent; results are joined before classification.
        let fingerprinted: Vec<Fingerprinted> = sources
            .par_iter()
            .flat_map_iter(|source| {
                discover(source).into_iter().map(|asset| Fingerprinted {
                    fingerprint: fingerprint(asset.kind(), &asset.path),
                    asset,
                })
            })
            .collect();

        let discovered: Vec<DiscoveredAsset> =
            fingerprinted.iter().map(|f| f.asset.clone()).collect();

        let catalog = read_catalog(&config.home);
        let tracked = TrackedSet::new(self.tracked_files.tracked_paths(&config.home));
        debug!(home_assets = catalog.len(), tracked = tracked.len(), "home store read");

        let reconciliation =
            Reconciler::new(&catalog, &tracked, options.with_diffs).reconcile(fingerprinted);

        let mut conflicts: Vec<_> = reconciliation
            .classified
            .into_iter()
            .filter(|c| c.state.is_conflict())
            .collect();
        sort_conflicts(&mut conflicts);

        let mut failures = reconciliation.failures;
        failures.sort_by(|a, b| (&a.identity, &a.path).cmp(&(&b.identity, &b.path)));

        let report = build_report(&config.home, &sources, &discovered, &catalog);
        let status = build_status(&discovered, &catalog, &tracked);

        info!(
            sources = sources.len(),
            discovered = discovered.len(),
            unsynced = report.unsynced().count(),
            conflicts = conflicts.len(),
            failures = failures.len(),
            "scan complete"
        );

        ScanOutcome {
            report,
            status,
            conflicts,
            failures,
        }
    }
}
