//! Conflict classification
//!
//! One total function from (source fingerprints, home fingerprint, tracked)
//! to a [`ConflictState`]. Precedence is encoded by match-arm order:
//! source disagreement dominates everything, tracked status only matters once
//! a single source version is established.

use std::collections::BTreeSet;

use crate::domain::entities::ConflictState;
use crate::domain::value_objects::Fingerprint;

/// Classify one identity.
///
/// - `sources`: fingerprints of every discovered copy (may repeat)
/// - `home`: fingerprint of the home copy, if one exists
/// - `home_tracked`: whether the home copy is known to version control
pub fn classify<'a, I>(sources: I, home: Option<&Fingerprint>, home_tracked: bool) -> ConflictState
where
    I: IntoIterator<Item = &'a Fingerprint>,
{
    let distinct: BTreeSet<_> = sources.into_iter().map(|fp| &fp.digest).collect();

    match (distinct.len(), home) {
        (n, _) if n >= 2 => ConflictState::AmbiguousMultiSource,
        (1, Some(home)) if !distinct.contains(&home.digest) => {
            if home_tracked {
                ConflictState::ContentDrift
            } else {
                ConflictState::HomeModifiedUntracked
            }
        }
        (_, Some(_)) if !home_tracked => ConflictState::HomeUntracked,
        _ => ConflictState::NoConflict,
    }
}
