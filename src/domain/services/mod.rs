//! Domain Services
//!
//! Stateless logic over domain types:
//! - `classify` - the single total conflict classification function
//! - `Differ` - bounded diffs between two versions of an asset

mod classifier;
mod differ;

pub use classifier::classify;
pub use differ::{DiffLine, DiffResult, DiffTag, Differ, MAX_DIFF_LINES};
