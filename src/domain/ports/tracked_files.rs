//! TrackedFiles port - the version-control substrate
//!
//! Supplies the set of home-relative paths under version control. It is only
//! used to sub-classify conflict severity, so implementations never fail:
//! when the substrate is unavailable they return an empty set and every home
//! copy appears untracked.

use std::collections::BTreeSet;
use std::path::Path;

/// Lists tracked files of the home store
///
/// Implementations:
/// - `GitTrackedFiles` - shells out to `git ls-files`
/// - `StaticTrackedFiles` - fixed set, for tests and offline use
pub trait TrackedFiles: Send + Sync {
    /// Paths relative to `home`, using `/` separators
    fn tracked_paths(&self, home: &Path) -> BTreeSet<String>;
}
