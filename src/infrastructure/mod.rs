//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and all I/O.
//!
//! ## Structure
//!
//! - `fs/` - Walking, copying, home directory resolution
//! - `discovery/` - Source Walker and Asset Catalog Reader
//! - `fingerprint` - Content digests of prompts and skills
//! - `git` - Tracked-file listing via git

pub mod discovery;
pub mod fingerprint;
pub mod fs;
pub mod git;

// Re-export for convenience
pub use discovery::{discover, read_catalog, HomeCatalog};
pub use fingerprint::fingerprint;
pub use git::{GitTrackedFiles, StaticTrackedFiles};
