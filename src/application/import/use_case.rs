//! Import Use Case
//!
//! Resolves a selection against a fresh scan and imports each selected
//! identity independently: one failed item never aborts the batch.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::warn;

use crate::application::scan::ScanOutcome;
use crate::domain::entities::{AssetIdentity, ConflictState, DiscoveredAsset};
use crate::domain::value_objects::ContentHash;
use crate::error::{HearthError, HearthResult};

use super::importer::import_asset;
use super::options::{ImportOptions, ImportSelection};
use super::result::{ImportItem, ImportStatus, ImportSummary};

pub struct ImportUseCase {
    home: PathBuf,
}

impl ImportUseCase {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Execute the import use case
    pub fn execute(&self, outcome: &ScanOutcome, options: &ImportOptions) -> ImportSummary {
        let items = match &options.selection {
            ImportSelection::Identity { identity, from } => {
                vec![self.import_one(outcome, identity, from.as_deref(), options.overwrite)]
            }
            ImportSelection::AllUnsynced => outcome
                .report
                .unsynced()
                .map(|unsynced| {
                    let identity = &unsynced.identity;
                    if needs_selection(outcome, identity) {
                        ImportItem {
                            identity: identity.clone(),
                            source: None,
                            status: ImportStatus::Skipped {
                                reason: format!(
                                    "conflicting copies in {}; import it alone with --from",
                                    unsynced.sources.join(", ")
                                ),
                            },
                        }
                    } else {
                        self.import_one(outcome, identity, None, options.overwrite)
                    }
                })
                .collect(),
        };

        ImportSummary { items }
    }

    fn import_one(
        &self,
        outcome: &ScanOutcome,
        identity: &AssetIdentity,
        from: Option<&str>,
        overwrite: bool,
    ) -> ImportItem {
        let result = select(outcome, identity, from).and_then(|copy| {
            import_asset(&self.home, identity, &copy.path, overwrite)
                .map(|target| (copy.source.clone(), target))
        });

        match result {
            Ok((source, target)) => ImportItem {
                identity: identity.clone(),
                source: Some(source),
                status: ImportStatus::Imported { target },
            },
            Err(e) => {
                warn!(asset = %identity, error = %e, "import failed");
                ImportItem {
                    identity: identity.clone(),
                    source: from.map(str::to_string),
                    status: ImportStatus::Failed {
                        error: e.to_string(),
                    },
                }
            }
        }
    }
}

/// Pick the copy to import. Ambiguous identities require an explicit
/// selector, and the selector must narrow them down to one version.
///
/// `from` matches a copy by source label or by a trailing part of its path,
/// so two differing copies inside one source can still be told apart.
fn select<'a>(
    outcome: &'a ScanOutcome,
    identity: &'a AssetIdentity,
    from: Option<&str>,
) -> HearthResult<&'a DiscoveredAsset> {
    let copies: Vec<&DiscoveredAsset> = outcome.copies(identity).collect();
    if copies.is_empty() {
        return Err(HearthError::NotDiscovered {
            identity: identity.to_string(),
        });
    }

    let candidates = match from {
        Some(selector) => {
            let matched: Vec<&DiscoveredAsset> = copies
                .into_iter()
                .filter(|c| c.source == selector || c.path.ends_with(selector))
                .collect();
            if matched.is_empty() {
                return Err(HearthError::UnknownSource {
                    label: selector.to_string(),
                    identity: identity.to_string(),
                });
            }
            matched
        }
        None => copies,
    };

    if candidates.len() > 1 && disagree(outcome, identity, &candidates) {
        return Err(HearthError::AmbiguousSelection {
            identity: identity.to_string(),
            copies: candidates
                .iter()
                .map(|c| format!("{}:{}", c.source, c.path.display()))
                .collect(),
        });
    }
    Ok(candidates[0])
}

/// Whether `candidates` hold more than one version of `identity`. Copies of
/// an identity that could not be classified are assumed to disagree.
fn disagree(
    outcome: &ScanOutcome,
    identity: &AssetIdentity,
    candidates: &[&DiscoveredAsset],
) -> bool {
    match outcome.state_of(identity) {
        Some(ConflictState::AmbiguousMultiSource) => {
            let digests: HashSet<&ContentHash> = outcome
                .conflict(identity)
                .into_iter()
                .flat_map(|c| &c.copies)
                .filter(|copy| candidates.iter().any(|c| c.path == copy.path))
                .map(|copy| &copy.digest)
                .collect();
            digests.len() != 1
        }
        Some(_) => false,
        None => true,
    }
}

/// Whether importing `identity` needs a chosen copy: its copies disagree, or
/// it could not be classified and more than one copy exists.
fn needs_selection(outcome: &ScanOutcome, identity: &AssetIdentity) -> bool {
    match outcome.state_of(identity) {
        Some(state) => state == ConflictState::AmbiguousMultiSource,
        None => outcome.copies(identity).count() > 1,
    }
}
