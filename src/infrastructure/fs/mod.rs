//! File System Primitives
//!
//! Home directory resolution, breadth-first walking, and whole-asset
//! copy/removal.

mod copy;
mod home;
mod walk;

pub use copy::{copy_asset, remove_asset};
pub use home::{expand_home, hearth_home_dir, HEARTH_TEST_HOME_VAR};
pub use walk::{is_denied_dir, EntryKind, Walk, WalkEntry, WalkIter, DENY_LIST, MAX_DEPTH};
