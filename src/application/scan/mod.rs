//! Scan Module
//!
//! Discovers assets in every source root, fingerprints them, and classifies
//! each identity against the home store.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`ScanOptions`)
//! - `result` - Result types (`ScanOutcome`)
//! - `reconcile` - Per-identity classification over the complete fingerprint set
//! - `use_case` - Core use case logic (`ScanUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use hearth::application::scan::{ScanOptions, ScanUseCase};
//! use hearth::infrastructure::GitTrackedFiles;
//!
//! let use_case = ScanUseCase::new(GitTrackedFiles::new());
//! let outcome = use_case.execute(&config, &ScanOptions::default());
//! ```

mod options;
mod reconcile;
mod result;
mod use_case;

pub use options::ScanOptions;
pub use result::ScanOutcome;
pub use use_case::ScanUseCase;
