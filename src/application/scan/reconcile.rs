//! Reconciler
//!
//! Groups fingerprinted copies by identity and classifies each group against
//! the home store. Runs only once every source has been fingerprinted.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::entities::{
    AssetFailure, AssetIdentity, AssetKind, ConflictCopy, ConflictDiff, ConflictState,
    DiscoveredAsset, ScanConflict,
};
use crate::domain::services::{classify, Differ};
use crate::domain::value_objects::{Fingerprint, TrackedSet};
use crate::error::{HearthError, HearthResult};
use crate::infrastructure::discovery::HomeCatalog;
use crate::infrastructure::fingerprint::{fingerprint, skill_files};

/// A discovered copy and the result of fingerprinting it
#[derive(Debug)]
pub(super) struct Fingerprinted {
    pub asset: DiscoveredAsset,
    pub fingerprint: HearthResult<Fingerprint>,
}

/// One entry per discovered identity: classified or failed
#[derive(Debug, Default)]
pub(super) struct Reconciliation {
    pub classified: Vec<ScanConflict>,
    pub failures: Vec<AssetFailure>,
}

pub(super) struct Reconciler<'a> {
    catalog: &'a HomeCatalog,
    tracked: &'a TrackedSet,
    differ: Differ,
    with_diffs: bool,
}

impl<'a> Reconciler<'a> {
    pub fn new(catalog: &'a HomeCatalog, tracked: &'a TrackedSet, with_diffs: bool) -> Self {
        Self {
            catalog,
            tracked,
            differ: Differ::new(),
            with_diffs,
        }
    }

    pub fn reconcile(&self, copies: Vec<Fingerprinted>) -> Reconciliation {
        let mut groups: BTreeMap<AssetIdentity, Vec<Fingerprinted>> = BTreeMap::new();
        for copy in copies {
            groups
                .entry(copy.asset.identity.clone())
                .or_default()
                .push(copy);
        }

        let mut result = Reconciliation::default();
        for (identity, mut group) in groups {
            group.sort_by(|a, b| a.asset.cmp(&b.asset));
            match self.classify_identity(&identity, group) {
                Ok(conflict) => result.classified.push(conflict),
                Err(failures) => result.failures.extend(failures),
            }
        }
        result
    }

    fn classify_identity(
        &self,
        identity: &AssetIdentity,
        group: Vec<Fingerprinted>,
    ) -> Result<ScanConflict, Vec<AssetFailure>> {
        let mut failures = Vec::new();
        let mut copies: Vec<(DiscoveredAsset, Fingerprint)> = Vec::with_capacity(group.len());

        for Fingerprinted {
            asset,
            fingerprint: result,
        } in group
        {
            match result {
                Ok(fp) => copies.push((asset, fp)),
                Err(e) => failures.push(failure(identity, &asset.path, &e)),
            }
        }

        let home_path = self.catalog.get(identity);
        let home_fp = match home_path {
            Some(path) => match fingerprint(identity.kind, path) {
                Ok(fp) => Some(fp),
                Err(e) => {
                    failures.push(failure(identity, path, &e));
                    None
                }
            },
            None => None,
        };

        // Never classify on a partial fingerprint set
        if !failures.is_empty() {
            warn!(asset = %identity, failures = failures.len(), "cannot classify asset");
            return Err(failures);
        }

        let home_tracked = home_path.is_some() && self.tracked.is_tracked(identity);
        let state = classify(copies.iter().map(|(_, fp)| fp), home_fp.as_ref(), home_tracked);
        debug!(asset = %identity, state = %state, "classified");

        let mut sources: Vec<String> = copies.iter().map(|(a, _)| a.source.clone()).collect();
        sources.dedup();
        let listed = copies
            .iter()
            .map(|(asset, fp)| ConflictCopy {
                source: asset.source.clone(),
                path: asset.path.clone(),
                digest: fp.digest.clone(),
            })
            .collect();

        let diff = if self.with_diffs {
            self.diff_for(identity, state, &copies, home_path)
        } else {
            None
        };

        Ok(ScanConflict::new(identity.clone(), state, sources)
            .with_copies(listed)
            .with_diff(diff))
    }

    fn diff_for(
        &self,
        identity: &AssetIdentity,
        state: ConflictState,
        copies: &[(DiscoveredAsset, Fingerprint)],
        home: Option<&Path>,
    ) -> Option<ConflictDiff> {
        let (left, left_path, right, right_path) = match state {
            ConflictState::AmbiguousMultiSource => {
                // First two distinct variants, in source label order
                let (first, first_fp) = copies.first()?;
                let (second, _) = copies.iter().find(|(_, fp)| !fp.same_content(first_fp))?;
                (
                    first.source.as_str(),
                    first.path.as_path(),
                    second.source.as_str(),
                    second.path.as_path(),
                )
            }
            ConflictState::ContentDrift | ConflictState::HomeModifiedUntracked => {
                let (source, _) = copies.first()?;
                ("home", home?, source.source.as_str(), source.path.as_path())
            }
            ConflictState::HomeUntracked | ConflictState::NoConflict => return None,
        };

        match self.build_diff(identity.kind, left, left_path, right, right_path) {
            Ok(diff) => Some(diff),
            Err(e) => {
                warn!(asset = %identity, error = %e, "could not build diff");
                None
            }
        }
    }

    fn build_diff(
        &self,
        kind: AssetKind,
        left: &str,
        left_path: &Path,
        right: &str,
        right_path: &Path,
    ) -> HearthResult<ConflictDiff> {
        match kind {
            AssetKind::Prompt => {
                let old = read_text(left_path)?;
                let new = read_text(right_path)?;
                Ok(self.differ.prompt_diff(left, &old, right, &new))
            }
            AssetKind::Skill => {
                let old = listing(left_path)?;
                let new = listing(right_path)?;
                Ok(self.differ.skill_listing_diff(left, &old, right, &new))
            }
        }
    }
}

fn failure(identity: &AssetIdentity, path: &Path, error: &HearthError) -> AssetFailure {
    AssetFailure {
        identity: identity.clone(),
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn read_text(path: &Path) -> HearthResult<String> {
    let bytes = fs::read(path).map_err(|source| HearthError::Fingerprint {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn listing(dir: &Path) -> HearthResult<Vec<String>> {
    Ok(skill_files(dir)?
        .into_iter()
        .map(|(relative, _)| relative)
        .collect())
}
