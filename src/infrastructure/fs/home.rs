//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the system API rather than environment
//! variables, so setting `HOME` in tests has no effect there.
//! `hearth_home_dir()` checks `HEARTH_TEST_HOME` first and falls back to
//! `dirs::home_dir()`.

use std::path::{Path, PathBuf};

/// Environment variable for test isolation of the home directory.
pub const HEARTH_TEST_HOME_VAR: &str = "HEARTH_TEST_HOME";

/// Get the user's home directory for Hearth-internal paths
/// (default home store, default `user` source).
pub fn hearth_home_dir() -> Option<PathBuf> {
    std::env::var(HEARTH_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` to the home directory.
///
/// Paths that don't start with `~` (and `~user` forms) are returned unchanged,
/// as is everything when the home directory is unknown.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };

    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        rest
    } else {
        return path.to_path_buf();
    };

    match hearth_home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
